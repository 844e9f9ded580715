//! The capability that every grammar element provides, and the premade
//! literal elements that are the base cases of all grammars.

use crate::{Cursor, Error};


/// Implementations provided for ready use.
pub mod premade
{
    mod literal;
    pub use literal::{Lit, lit};

    mod const_literal;
    pub use const_literal::{Char, Byte};
}


/// A grammar element that can attempt to consume a prefix of the input from a
/// [`Cursor`](struct.Cursor.html) and produce a result of its statically-known
/// [`Attr`](#associatedtype.Attr) type.
///
/// The `U` type parameter is the type of the units of the input, e.g. `char`
/// or `u8`.
///
/// Values of this trait are immutable descriptors: they hold no state that
/// changes between calls, so a single one may be used any number of times,
/// including concurrently against independent cursors.
pub trait Matchable<U> {
    /// The type of result that is produced by a successful match.
    type Attr;

    /// Attempt to match at the cursor's position.
    ///
    /// On success, return `Some` and leave the cursor's position past the
    /// consumed prefix (and never past its end bound).  On failure, return
    /// `None` and leave the cursor's position exactly as it was on entry.
    /// Failing to match is a normal outcome, not an error.
    fn try_match(&self, cursor: &mut Cursor<'_, U>) -> Option<Self::Attr>;

    /// Match against `input` from `pos` bounded by `end`, and return the
    /// position that the cursor was left at along with the result.  An
    /// [`Error`](enum.Error.html) is returned only if the bounds are invalid.
    fn match_at(&self, input: &[U], pos: usize, end: usize)
                -> Result<(usize, Option<Self::Attr>), Error>
    {
        let mut cursor = Cursor::bounded(input, pos, end)?;
        let attr = self.try_match(&mut cursor);
        Ok((cursor.pos(), attr))
    }
}


/// This allows borrowed rules to be used as rules, which is how a
/// [`Seq`](struct.Seq.html) matches its remaining elements without copying
/// them.
impl<U, R> Matchable<U> for &R
    where R: Matchable<U> + ?Sized,
{
    type Attr = R::Attr;

    #[inline]
    fn try_match(&self, cursor: &mut Cursor<'_, U>) -> Option<Self::Attr> {
        (**self).try_match(cursor)
    }
}
