//! Errors that might be returned when setting up a match.
//!
//! Note that failing to match is not an error.  That is reported as `None` by
//! [`Matchable::try_match`](../trait.Matchable.html#tymethod.try_match).

use core::fmt;


/// The possible errors that might be returned by constructing a bounded
/// [`Cursor`](../struct.Cursor.html).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// The end bound is past the end of the input
    EndOutOfBounds {
        /// The requested end bound
        end: usize,
        /// The length of the input
        len: usize,
    },
    /// The start position is past the end bound
    PosPastEnd {
        /// The requested start position
        pos: usize,
        /// The end bound
        end: usize,
    },
}


impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EndOutOfBounds{end, len}
                => write!(f, "end bound {end} is past the input length {len}"),
            Error::PosPastEnd{pos, end}
                => write!(f, "position {pos} is past the end bound {end}"),
        }
    }
}

impl core::error::Error for Error {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality() {
        use Error::*;

        assert_eq!(EndOutOfBounds{end: 3, len: 2}, EndOutOfBounds{end: 3, len: 2});
        assert_ne!(EndOutOfBounds{end: 3, len: 2}, EndOutOfBounds{end: 4, len: 2});
        assert_eq!(PosPastEnd{pos: 1, end: 0}, PosPastEnd{pos: 1, end: 0});
        assert_ne!(PosPastEnd{pos: 1, end: 0}, EndOutOfBounds{end: 1, len: 0});
    }
}
