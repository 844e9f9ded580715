//! Conveniences for matching inputs that are single in-memory strings.
//!
//! A `&str` is not itself a slice of units, so it must be viewed as one of
//! two kinds of units.  As `char`s, which must be collected into a buffer
//! first since they have varying encoded lengths, positions count `char`s.
//! As bytes, which is zero-copy, positions count bytes, and each byte of a
//! multi-byte character is its own unit.

use crate::{Matchable, ParseError, parse};


/// Collect the `char`s of `s` into a buffer that can be matched against.
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// View `s` as bytes that can be matched against.
#[inline]
pub fn bytes(s: &str) -> &[u8] {
    s.as_bytes()
}

/// Match `rule`, whose units are `char`s, against all of `s`.
pub fn parse_str<R>(rule: &R, s: &str) -> Result<R::Attr, ParseError>
    where R: Matchable<char>,
{
    parse::parse_all(rule, &chars(s))
}

/// Match `rule`, whose units are bytes, against all of `s`.
pub fn parse_str_bytes<R>(rule: &R, s: &str) -> Result<R::Attr, ParseError>
    where R: Matchable<u8>,
{
    parse::parse_all(rule, bytes(s))
}
