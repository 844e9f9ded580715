//! The sequence combinator: ordered, all-or-nothing matching of a fixed-arity
//! list of rules, with a single flat tuple of their results.

use log::trace;

use crate::{Cursor, Matchable};


/// A [`Matchable`](trait.Matchable.html) that matches each of the rules of its
/// tuple `T`, in order, and whose result is the flat tuple of their results.
///
/// Either all of the rules match, or the whole sequence fails and the cursor
/// is restored to where the sequence started, regardless of how many of the
/// rules had already consumed input.
///
/// Usually these are made by composing rules with `>>` (see
/// [`Composable`](trait.Composable.html)), which never nests sequences: the
/// elements of a `Seq` operand are spliced into the new one.  They can also be
/// made directly from a tuple of 1 to 12 rules with [`new`](#method.new).  A
/// `Seq` of the empty tuple is not a `Matchable`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Seq<T> {
    rules: T,
}

impl<T> Seq<T> {
    /// Make a new one that matches the rules of the `rules` tuple in order.
    #[inline]
    pub const fn new(rules: T) -> Self {
        Self { rules }
    }

    /// The tuple of our rules.
    #[inline]
    pub fn rules(&self) -> &T {
        &self.rules
    }

    /// Give up the tuple of our rules.
    #[inline]
    pub fn into_rules(self) -> T {
        self.rules
    }
}

impl<U, T> Matchable<U> for Seq<T>
    where T: RuleList<U>,
{
    type Attr = T::Attrs;

    #[inline]
    fn try_match(&self, cursor: &mut Cursor<'_, U>) -> Option<Self::Attr> {
        self.rules.match_list(cursor)
    }
}


/// A tuple of rules that can be matched in order, as the elements of a
/// [`Seq`](struct.Seq.html).
///
/// Implemented for tuples of 1 to 12 [`Matchable`](trait.Matchable.html)s.  A
/// tuple of more than one is matched by matching its first rule and then
/// matching the tuple of borrows of the rest of its rules, recursively, which
/// ends with the single-rule tuple.  Each level guards the cursor with a
/// [`Rollback`](struct.Rollback.html), so a failure at any depth leaves the
/// cursor where the whole list started.
pub trait RuleList<U> {
    /// The flat tuple of the results of our rules, in the same order.
    type Attrs;

    /// Match all of our rules in order, or none of them.
    fn match_list(&self, cursor: &mut Cursor<'_, U>) -> Option<Self::Attrs>;
}

impl<U, R> RuleList<U> for (R,)
    where R: Matchable<U>,
{
    type Attrs = (R::Attr,);

    #[inline]
    fn match_list(&self, cursor: &mut Cursor<'_, U>) -> Option<Self::Attrs> {
        let mut cursor = cursor.rollback();
        let only = self.0.try_match(&mut cursor)?;
        cursor.commit();
        Some((only,))
    }
}

macro_rules! impl_rule_list {
    ($($Rest:ident $rest:ident $attr:ident),+) => {
        impl<U, First, $($Rest),+> RuleList<U> for (First, $($Rest),+)
            where First: Matchable<U>,
                  $($Rest: Matchable<U>),+
        {
            type Attrs = (First::Attr, $($Rest::Attr),+);

            fn match_list(&self, cursor: &mut Cursor<'_, U>) -> Option<Self::Attrs> {
                let (first, $($rest),+) = self;
                let mut cursor = cursor.rollback();
                let start = cursor.start();
                let first = first.try_match(&mut cursor)?;
                let rest = ($($rest,)+);
                let Some(($($attr,)+)) = RuleList::<U>::match_list(&rest, &mut cursor) else {
                    trace!("sequence failed at {}, restoring {}", cursor.pos(), start);
                    return None;
                };
                trace!("sequence matched {} to {}", start, cursor.pos());
                cursor.commit();
                Some((first, $($attr),+))
            }
        }
    };
}

impl_rule_list!(B b b_);
impl_rule_list!(B b b_, C c c_);
impl_rule_list!(B b b_, C c c_, D d d_);
impl_rule_list!(B b b_, C c c_, D d d_, E e e_);
impl_rule_list!(B b b_, C c c_, D d d_, E e e_, F f f_);
impl_rule_list!(B b b_, C c c_, D d d_, E e e_, F f f_, G g g_);
impl_rule_list!(B b b_, C c c_, D d d_, E e e_, F f f_, G g g_, H h h_);
impl_rule_list!(B b b_, C c c_, D d d_, E e e_, F f f_, G g g_, H h h_, I i i_);
impl_rule_list!(B b b_, C c c_, D d d_, E e e_, F f f_, G g g_, H h h_, I i i_, J j j_);
impl_rule_list!(B b b_, C c c_, D d d_, E e e_, F f f_, G g g_, H h h_, I i i_, J j j_,
                K k k_);
impl_rule_list!(B b b_, C c c_, D d d_, E e e_, F f f_, G g g_, H h h_, I i i_, J j j_,
                K k k_, L l l_);


#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::premade::{lit, Lit};

    fn abc() -> Seq<(Lit<char>, Lit<char>, Lit<char>)> {
        Seq::new((lit('a'), lit('b'), lit('c')))
    }

    #[test]
    fn all_match() {
        let input = ['a', 'b', 'c'];
        let mut c = Cursor::new(&input);
        assert_eq!(abc().try_match(&mut c), Some(('a', 'b', 'c')));
        assert!(c.is_at_end());
    }

    #[test]
    fn leaves_rest() {
        let input = ['a', 'b', 'c', 'd'];
        let mut c = Cursor::new(&input);
        assert_eq!(abc().try_match(&mut c), Some(('a', 'b', 'c')));
        assert_eq!(c.remaining(), &['d']);
    }

    #[test]
    fn rolls_back_whole_sequence() {
        let input = ['a', 'b', 'x'];
        let mut c = Cursor::new(&input);
        assert_eq!(abc().try_match(&mut c), None);
        assert_eq!(c.pos(), 0);

        let input = ['a', 'x'];
        let mut c = Cursor::new(&input);
        assert_eq!(abc().try_match(&mut c), None);
        assert_eq!(c.pos(), 0);
    }

    #[test]
    fn rolls_back_to_own_start() {
        let input = ['z', 'a', 'b'];
        let mut c = Cursor::new(&input);
        let _ = c.bump();
        assert_eq!(abc().try_match(&mut c), None);
        assert_eq!(c.pos(), 1);
    }

    #[test]
    fn single() {
        let s = Seq::new((lit('a'),));
        let input = ['a'];
        let mut c = Cursor::new(&input);
        assert_eq!(s.try_match(&mut c), Some(('a',)));
        assert!(c.is_at_end());
        assert_eq!(s.try_match(&mut c), None);
        assert!(c.is_at_end());
    }

    #[test]
    fn end_bound() {
        let input = ['a', 'b', 'c'];
        let mut c = Cursor::bounded(&input, 0, 2).unwrap();
        assert_eq!(abc().try_match(&mut c), None);
        assert_eq!(c.pos(), 0);
    }

    #[test]
    fn nested_seq_element() {
        // A `Seq` given directly as an element is not flattened.
        let s = Seq::new((Seq::new((lit('a'), lit('b'))), lit('c')));
        let input = ['a', 'b', 'c'];
        let mut c = Cursor::new(&input);
        assert_eq!(s.try_match(&mut c), Some((('a', 'b'), 'c')));
    }

    #[test]
    fn twelve() {
        let input: [u8; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        let s = Seq::new((lit(0_u8), lit(1_u8), lit(2_u8), lit(3_u8), lit(4_u8), lit(5_u8),
                          lit(6_u8), lit(7_u8), lit(8_u8), lit(9_u8), lit(10_u8), lit(11_u8)));
        let mut c = Cursor::new(&input);
        assert_eq!(s.try_match(&mut c), Some((0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11)));
        assert!(c.is_at_end());

        let mut c = Cursor::new(&input[.. 11]);
        assert_eq!(s.try_match(&mut c), None);
        assert_eq!(c.pos(), 0);
    }

    #[test]
    fn reusable() {
        let s = abc();
        let input = ['a', 'b', 'c', 'a', 'b', 'c'];
        let mut c = Cursor::new(&input);
        assert!(s.try_match(&mut c).is_some());
        assert!(s.try_match(&mut c).is_some());
        assert!(s.try_match(&mut c).is_none());
        assert!(c.is_at_end());
    }
}
