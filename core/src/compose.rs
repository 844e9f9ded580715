//! The composition operator, `>>`, which builds a [`Seq`](../struct.Seq.html)
//! from two operands that are each either a single rule or a `Seq`.
//!
//! Composition is purely structural.  The operands are decomposed into their
//! element lists (a single rule is a list of itself, and a `Seq` is the list
//! of its rules), the lists are concatenated, and the result is a new `Seq` of
//! the concatenation.  So all four combinations (rule with rule, `Seq` with
//! rule, rule with `Seq`, and `Seq` with `Seq`) flatten the same way, and
//! grouping never matters: `(x >> y) >> z` and `x >> (y >> z)` have the very
//! same type and the very same elements.
//!
//! A rule with an attached [`Action`](../struct.Action.html) composes the same
//! way its rule does.  A single rule stays one element, still carrying its
//! action.  A `Seq` is spliced like any other `Seq`, and its action, which
//! belonged to that `Seq` and not to any of its elements, is not carried into
//! the new one.
//!
//! Composing something that is not [`Composable`](../trait.Composable.html)
//! does not compile.

use core::ops::Shr;

use crate::{Action, Seq, tuple::Concat};


/// Something that can be an operand of `>>`.
///
/// Implement this, and `Shr`, for your own rules with the
/// [`composable!`](../macro.composable.html) macro.
pub trait Composable {
    /// The tuple of the elements that this contributes to a composed
    /// [`Seq`](struct.Seq.html).
    type Rules;

    /// Decompose into our elements.
    fn into_rules(self) -> Self::Rules;

    /// Attach a semantic action, which is stored but is never run by
    /// matching.  See [`Action`](struct.Action.html).
    #[inline]
    fn with_action<F>(self, action: F) -> Action<Self, F>
        where Self: Sized,
    {
        Action::new(self, action)
    }
}

/// How a rule decomposes when it carries an attached action of type `F`.
///
/// [`composable!`](../macro.composable.html) implements this for single rules
/// as the one element `(Action<Self, F>,)`.  For a [`Seq`](struct.Seq.html) it
/// is the `Seq`'s own elements, and the action is dropped.
pub trait ActionRules<F> {
    /// The tuple of the elements that this, with its action, contributes to a
    /// composed `Seq`.
    type Rules;

    /// Decompose into our elements, given our attached `action`.
    fn action_rules(self, action: F) -> Self::Rules;
}

/// The type of composing `L` with `R`.
pub type Composed<L, R> = Seq<<<L as Composable>::Rules as Concat<<R as Composable>::Rules>>
                               ::Output>;

/// Compose `lhs` with `rhs`.  This is what `>>` does, and it can be used with
/// operands whose types do not implement `Shr`.
#[inline]
pub fn compose<L, R>(lhs: L, rhs: R) -> Composed<L, R>
    where L: Composable,
          R: Composable,
          L::Rules: Concat<R::Rules>,
{
    Seq::new(lhs.into_rules().concat(rhs.into_rules()))
}


impl<T> Composable for Seq<T> {
    type Rules = T;

    #[inline]
    fn into_rules(self) -> Self::Rules {
        Seq::into_rules(self)
    }
}

impl<T, F> ActionRules<F> for Seq<T> {
    type Rules = T;

    #[inline]
    fn action_rules(self, _action: F) -> Self::Rules {
        Seq::into_rules(self)
    }
}

impl<T, Rhs> Shr<Rhs> for Seq<T>
    where Rhs: Composable,
          T: Concat<Rhs::Rules>,
{
    type Output = Composed<Self, Rhs>;

    #[inline]
    fn shr(self, rhs: Rhs) -> Self::Output {
        compose(self, rhs)
    }
}


/// Make a type of rule be a single element when composed with `>>`, by
/// implementing [`Composable`](trait.Composable.html), `Shr`, and
/// [`ActionRules`](compose/trait.ActionRules.html) for it.
///
/// The optional bracketed part is the generic parameters of the `impl`s.
///
/// ```
/// use kombi_core::{composable, Cursor, Matchable};
///
/// /// Matches any one ASCII digit.
/// #[derive(Copy, Clone, Debug)]
/// struct Digit;
///
/// impl Matchable<u8> for Digit {
///     type Attr = u8;
///
///     fn try_match(&self, cursor: &mut Cursor<'_, u8>) -> Option<u8> {
///         match cursor.peek() {
///             Some(&d) if d.is_ascii_digit() => { cursor.bump(); Some(d - b'0') },
///             _ => None,
///         }
///     }
/// }
///
/// composable!(Digit);
///
/// let two = Digit >> Digit;
/// assert_eq!(two.match_at(b"42", 0, 2), Ok((2, Some((4, 2)))));
/// ```
#[macro_export]
macro_rules! composable {
    ([$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> $crate::Composable for $ty {
            type Rules = (Self,);

            #[inline]
            fn into_rules(self) -> Self::Rules {
                (self,)
            }
        }

        impl<Rhs, $($generics)*> ::core::ops::Shr<Rhs> for $ty
            where Rhs: $crate::Composable,
                  (Self,): $crate::tuple::Concat<<Rhs as $crate::Composable>::Rules>,
        {
            type Output = $crate::compose::Composed<Self, Rhs>;

            #[inline]
            fn shr(self, rhs: Rhs) -> Self::Output {
                $crate::compose::compose(self, rhs)
            }
        }

        impl<Act, $($generics)*> $crate::compose::ActionRules<Act> for $ty {
            type Rules = ($crate::Action<Self, Act>,);

            #[inline]
            fn action_rules(self, action: Act) -> Self::Rules {
                ($crate::Action::new(self, action),)
            }
        }
    };
    ($ty:ty) => {
        $crate::composable!([] $ty);
    };
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cursor, Matchable, rule::premade::{lit, Lit, Char}};

    type L = Lit<char>;

    fn same_type<T>(_: &T, _: &T) {}

    #[test]
    fn rule_rule() {
        let ab: Seq<(L, L)> = lit('a') >> lit('b');
        let input = ['a', 'b'];
        let mut c = Cursor::new(&input);
        assert_eq!(ab.try_match(&mut c), Some(('a', 'b')));
        assert!(c.is_at_end());
    }

    #[test]
    fn seq_rule() {
        let abc: Seq<(L, L, L)> = (lit('a') >> lit('b')) >> lit('c');
        assert_eq!(abc.rules(), &(lit('a'), lit('b'), lit('c')));
    }

    #[test]
    fn rule_seq() {
        let abc: Seq<(L, L, L)> = lit('a') >> (lit('b') >> lit('c'));
        assert_eq!(abc.rules(), &(lit('a'), lit('b'), lit('c')));
    }

    #[test]
    fn seq_seq() {
        let abcd: Seq<(L, L, L, L)> = (lit('a') >> lit('b')) >> (lit('c') >> lit('d'));
        let input = ['a', 'b', 'c', 'd'];
        let mut c = Cursor::new(&input);
        assert_eq!(abcd.try_match(&mut c), Some(('a', 'b', 'c', 'd')));
    }

    #[test]
    fn grouping_does_not_matter() {
        let (a, b, c, d) = (lit('a'), lit('b'), lit('c'), lit('d'));
        same_type(&((a >> b) >> c), &(a >> (b >> c)));
        assert_eq!((a >> b) >> c, a >> (b >> c));
        assert_eq!(((a >> b) >> c) >> d, a >> (b >> (c >> d)));
        assert_eq!((a >> b) >> (c >> d), a >> ((b >> c) >> d));
        assert_eq!(Seq::new((a, b, c, d)), compose(compose(a, b), compose(c, d)));
    }

    #[test]
    fn mixed_rule_types() {
        let r = Char::<'a'> >> lit('b') >> Char::<'c'>;
        let input = ['a', 'b', 'c'];
        let mut c = Cursor::new(&input);
        assert_eq!(r.try_match(&mut c), Some(('a', 'b', 'c')));
    }

    #[test]
    fn with_action_on_seq_still_flattens() {
        let (a, b, c) = (lit('a'), lit('b'), lit('c'));
        let left: Seq<(L, L, L)> = (a >> b).with_action(|_: &mut ()| ()) >> c;
        let right: Seq<(L, L, L)> = c >> (a >> b).with_action(|_: &mut ()| ());
        let input = ['a', 'b', 'c'];
        let mut cur = Cursor::new(&input);
        assert_eq!(left.try_match(&mut cur), Some(('a', 'b', 'c')));
        assert!(cur.is_at_end());
        assert_eq!(right.rules(), &(c, a, b));
        let both = (a >> b).with_action(|_: &mut ()| ()) >> (c >> a).with_action(|_: &mut ()| ());
        assert_eq!(both, Seq::new((a, b, c, a)));
    }

    #[test]
    fn with_action_on_rule_keeps_it() {
        let counted = lit('a').with_action(|n: &mut u32| *n += 1) >> lit('b');
        let input = ['a', 'b'];
        let mut c = Cursor::new(&input);
        assert_eq!(counted.try_match(&mut c), Some(('a', 'b')));
        let mut n = 0;
        counted.rules().0.run_action(&mut n);
        assert_eq!(n, 1);
    }

    #[test]
    fn composed_failure_rolls_back() {
        let r = (lit('a') >> lit('b')) >> (lit('c') >> lit('d'));
        let input = ['a', 'b', 'c', 'x'];
        let mut c = Cursor::new(&input);
        assert_eq!(r.try_match(&mut c), None);
        assert_eq!(c.pos(), 0);
    }
}
