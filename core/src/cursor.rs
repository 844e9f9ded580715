//! The position and end bound that track progress through borrowed input, and
//! the guard that restores a position when matching fails.

use core::ops::{Deref, DerefMut};

use log::trace;

use crate::Error;


/// A position and an end bound over an input sequence of units that is
/// borrowed, not owned.
///
/// Invariant: `pos <= end <= input.len()`.  Matchers advance `pos` but never
/// move `end`, and nothing at or past `end` is ever read.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Cursor<'i, U> {
    input: &'i [U],
    pos: usize,
    end: usize,
}

impl<'i, U> Cursor<'i, U> {
    /// Make a new one at the start of all of `input`.
    #[inline]
    pub fn new(input: &'i [U]) -> Self {
        Self { input, pos: 0, end: input.len() }
    }

    /// Make a new one at `pos` that is bounded by `end`.  An
    /// [`Error`](enum.Error.html) is returned if these would violate our
    /// invariant.
    pub fn bounded(input: &'i [U], pos: usize, end: usize) -> Result<Self, Error> {
        if end > input.len() {
            Err(Error::EndOutOfBounds { end, len: input.len() })
        } else if pos > end {
            Err(Error::PosPastEnd { pos, end })
        } else {
            Ok(Self { input, pos, end })
        }
    }

    /// The current position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The end bound.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// All of the borrowed input, including anything before our position and
    /// after our end bound.
    #[inline]
    pub fn input(&self) -> &'i [U] {
        self.input
    }

    /// The units from our position up to our end bound.
    #[inline]
    pub fn remaining(&self) -> &'i [U] {
        &self.input[self.pos .. self.end]
    }

    /// Whether our position is at our end bound, so that nothing more can be
    /// consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos == self.end
    }

    /// The unit at our position, or `None` if at the end bound.
    ///
    /// The returned borrow is of the input, not of `self`, so the cursor can
    /// still be advanced while it is held.
    #[inline]
    pub fn peek(&self) -> Option<&'i U> {
        if self.pos < self.end {
            self.input.get(self.pos)
        } else {
            None
        }
    }

    /// Consume the unit at our position, if there is one, and return it.
    #[inline]
    pub fn bump(&mut self) -> Option<&'i U> {
        let unit = self.peek()?;
        self.pos += 1;
        Some(unit)
    }

    /// Move back to an earlier position, e.g. one previously gotten from
    /// [`pos`](#method.pos).  Returns `Error::PosPastEnd`, and does not move,
    /// if `pos` is past our end bound.
    pub fn rewind_to(&mut self, pos: usize) -> Result<(), Error> {
        if pos > self.end {
            Err(Error::PosPastEnd { pos, end: self.end })
        } else {
            self.restore(pos);
            Ok(())
        }
    }

    /// Only for positions already known to be within our bounds, i.e. a
    /// snapshot of our own position.
    #[inline]
    pub(crate) fn restore(&mut self, pos: usize) {
        debug_assert!(pos <= self.end);
        self.pos = pos;
    }

    /// Snapshot our position and return a guard that restores it when dropped,
    /// unless [`Rollback::commit`](struct.Rollback.html#method.commit) is
    /// called first.
    #[inline]
    pub fn rollback(&mut self) -> Rollback<'_, 'i, U> {
        Rollback::new(self)
    }
}


/// Guards a [`Cursor`](struct.Cursor.html) so that its position, as of when
/// this was made, is restored on every exit path except an explicit
/// [`commit`](#method.commit).
///
/// This derefs to the cursor, so it can be passed wherever a `&mut Cursor` is
/// expected, which is how sub-matchers are run under it.  The typical use is
/// to make one on entry, use `?` to propagate the `None` of any failing
/// sub-match (which drops this and so restores), and to `commit` just before
/// returning success.
#[derive(Debug)]
pub struct Rollback<'c, 'i, U> {
    cursor: &'c mut Cursor<'i, U>,
    start: usize,
    committed: bool,
}

impl<'c, 'i, U> Rollback<'c, 'i, U> {
    /// Make a new one that snapshots the current position of `cursor`.
    #[inline]
    pub fn new(cursor: &'c mut Cursor<'i, U>) -> Self {
        let start = cursor.pos;
        Self { cursor, start, committed: false }
    }

    /// The position that would be restored.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Keep whatever the cursor has consumed since we were made.
    #[inline]
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl<'i, U> Deref for Rollback<'_, 'i, U> {
    type Target = Cursor<'i, U>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &*self.cursor
    }
}

impl<U> DerefMut for Rollback<'_, '_, U> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.cursor
    }
}

impl<U> Drop for Rollback<'_, '_, U> {
    fn drop(&mut self) {
        if !self.committed {
            if self.cursor.pos != self.start {
                trace!("rolling back from {} to {}", self.cursor.pos, self.start);
            }
            self.cursor.restore(self.start);
        }
    }
}
