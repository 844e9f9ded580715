//! Running a rule over a whole input, or over a prefix of it.

use log::debug;

use crate::{Cursor, Matchable, ParseError};


/// Match `rule` against all of `input`.  The result is returned only if the
/// rule matched and consumed all of `input`.
pub fn parse_all<R, U>(rule: &R, input: &[U]) -> Result<R::Attr, ParseError>
    where R: Matchable<U>,
{
    parse_range(rule, input, 0, input.len())
}

/// Match `rule` against `input` from `pos` to `end`.  The result is returned
/// only if the rule matched and consumed everything up to `end`.
pub fn parse_range<R, U>(rule: &R, input: &[U], pos: usize, end: usize)
                         -> Result<R::Attr, ParseError>
    where R: Matchable<U>,
{
    let mut cursor = Cursor::bounded(input, pos, end)?;
    let attr = rule.try_match(&mut cursor).ok_or(ParseError::NoMatch)?;
    if cursor.is_at_end() {
        Ok(attr)
    } else {
        debug!("match from {pos} stopped at {} before end {end}", cursor.pos());
        Err(ParseError::Incomplete { consumed: cursor.pos(), end })
    }
}

/// Match `rule` against the start of `input`, and return the result and the
/// number of units consumed.  Any remaining input is ignored.
pub fn parse_prefix<R, U>(rule: &R, input: &[U]) -> Option<(R::Attr, usize)>
    where R: Matchable<U>,
{
    let mut cursor = Cursor::new(input);
    rule.try_match(&mut cursor).map(|attr| (attr, cursor.pos()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, lit};

    #[test]
    fn all() {
        let ab = lit('a') >> lit('b');
        assert_eq!(parse_all(&ab, &['a', 'b']), Ok(('a', 'b')));
        assert_eq!(parse_all(&ab, &['a', 'x']), Err(ParseError::NoMatch));
        assert_eq!(parse_all(&ab, &['a', 'b', 'c']),
                   Err(ParseError::Incomplete { consumed: 2, end: 3 }));
        assert_eq!(parse_all(&ab, &[]), Err(ParseError::NoMatch));
    }

    #[test]
    fn range() {
        let a = lit(b'a');
        assert_eq!(parse_range(&a, b"xax", 1, 2), Ok(b'a'));
        assert_eq!(parse_range(&a, b"xax", 1, 3),
                   Err(ParseError::Incomplete { consumed: 2, end: 3 }));
        assert_eq!(parse_range(&a, b"xax", 0, 4),
                   Err(ParseError::Bounds(Error::EndOutOfBounds { end: 4, len: 3 })));
    }

    #[test]
    fn prefix() {
        let ab = lit('a') >> lit('b');
        assert_eq!(parse_prefix(&ab, &['a', 'b', 'c']), Some((('a', 'b'), 2)));
        assert_eq!(parse_prefix(&ab, &['b']), None);
    }
}
