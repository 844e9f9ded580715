//! Helpers for making inputs and for checking the contract of
//! [`Matchable::try_match`](../../kombi_core/trait.Matchable.html#tymethod.try_match).

use std::fmt::Debug;

use kombi_core::{Cursor, Matchable};


/// Convert the ASCII string `s` into a vector of units of any type that can be
/// made from bytes.
///
/// # Panics
///
/// If `s` is not ASCII, because then its bytes are not its characters.
pub fn units<U>(s: &str) -> Vec<U>
    where U: From<u8>,
{
    assert!(s.is_ascii(), "test inputs must be ASCII: {s:?}");
    s.bytes().map(U::from).collect()
}

/// Match `rule` against `input` from `start` to its end, and return the
/// position the cursor was left at and the result.
///
/// This also checks that a failure did not move the cursor, that a success
/// did not move it backwards or past the end, and that repeating a failure
/// gives the same failure.
///
/// # Panics
///
/// If any of those checks do not hold, or if `start` is past the end of
/// `input`.
pub fn match_checked<R, U>(rule: &R, input: &[U], start: usize) -> (usize, Option<R::Attr>)
    where R: Matchable<U>,
{
    let mut cursor = Cursor::bounded(input, start, input.len())
                            .expect("start must be within the input");
    let attr = rule.try_match(&mut cursor);
    if attr.is_some() {
        assert!(start <= cursor.pos() && cursor.pos() <= cursor.end(),
                "successful match left the cursor at {} (start {start}, end {})",
                cursor.pos(), cursor.end());
    } else {
        assert_eq!(cursor.pos(), start, "failed match moved the cursor");
        assert!(rule.try_match(&mut cursor).is_none(), "repeated match did not fail");
        assert_eq!(cursor.pos(), start, "repeated failed match moved the cursor");
    }
    (cursor.pos(), attr)
}

/// Like [`match_checked`](fn.match_checked.html) from the start of an ASCII
/// `input` string.
pub fn match_str<R, U>(rule: &R, input: &str) -> (usize, Option<R::Attr>)
    where R: Matchable<U>,
          U: From<u8>,
{
    match_checked(rule, &units::<U>(input), 0)
}

/// Checks, at compile time, that both arguments have the same type.
pub fn same_type<T>(_: &T, _: &T) {}

/// Used for the `Debug` bounds of the suites.
pub trait Unit: From<u8> + PartialEq + Clone + Debug {}

impl<U> Unit for U
    where U: From<u8> + PartialEq + Clone + Debug,
{}
