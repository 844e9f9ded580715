use log::trace;

use crate::{Cursor, Matchable};


/// A [`Matchable`](../trait.Matchable.html) that matches exactly one unit that
/// is equal to the one given at construction, and whose result is that unit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Lit<U>(pub U);

impl<U> Lit<U> {
    /// Make a new one that matches `unit`.
    #[inline]
    pub const fn new(unit: U) -> Self {
        Lit(unit)
    }

    /// The unit that we match.
    #[inline]
    pub fn unit(&self) -> &U {
        &self.0
    }
}

/// Shorthand for [`Lit::new`](struct.Lit.html#method.new).
#[inline]
pub const fn lit<U>(unit: U) -> Lit<U> {
    Lit(unit)
}


impl<U> Matchable<U> for Lit<U>
    where U: PartialEq + Clone,
{
    type Attr = U;

    fn try_match(&self, cursor: &mut Cursor<'_, U>) -> Option<Self::Attr> {
        match cursor.peek() {
            Some(unit) if *unit == self.0 => {
                let _ = cursor.bump();
                Some(self.0.clone())
            },
            _ => {
                trace!("literal did not match at {}", cursor.pos());
                None
            }
        }
    }
}

crate::composable!([U] Lit<U>);
