//! Type-level operations on tuples, used to assemble the flat element lists
//! and result types of composed sequences.
//!
//! These are pure structural transforms.  They are implemented for tuples of
//! up to 12 elements, which is therefore the greatest arity of a
//! [`Seq`](../struct.Seq.html).


/// Append one element to the end of a tuple.
pub trait Push<X> {
    /// The tuple one element longer.
    type Output;

    /// Make the tuple with `x` after our elements.
    fn push(self, x: X) -> Self::Output;
}

/// Concatenate two tuples, preserving the order of all their elements.
///
/// This is defined by repeatedly [`Push`](trait.Push.html)ing the elements of
/// `Rhs`, which makes it hold for every pair of arities whose sum is at most
/// 12 without needing an implementation for each pair.
pub trait Concat<Rhs> {
    /// The flat tuple of the elements of `Self` followed by those of `Rhs`.
    type Output;

    /// Make the tuple with the elements of `rhs` after ours.
    fn concat(self, rhs: Rhs) -> Self::Output;
}


macro_rules! impl_push {
    ($($T:ident $t:ident),*) => {
        impl<$($T,)* X> Push<X> for ($($T,)*) {
            type Output = ($($T,)* X,);

            #[inline]
            fn push(self, x: X) -> Self::Output {
                let ($($t,)*) = self;
                ($($t,)* x,)
            }
        }
    };
}

impl_push!();
impl_push!(A a);
impl_push!(A a, B b);
impl_push!(A a, B b, C c);
impl_push!(A a, B b, C c, D d);
impl_push!(A a, B b, C c, D d, E e);
impl_push!(A a, B b, C c, D d, E e, F f);
impl_push!(A a, B b, C c, D d, E e, F f, G g);
impl_push!(A a, B b, C c, D d, E e, F f, G g, H h);
impl_push!(A a, B b, C c, D d, E e, F f, G g, H h, I i);
impl_push!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
impl_push!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);


impl<T> Concat<()> for T {
    type Output = T;

    #[inline]
    fn concat(self, (): ()) -> Self::Output {
        self
    }
}

macro_rules! impl_concat {
    ($First:ident $first:ident $(, $Rest:ident $rest:ident)*) => {
        impl<T, $First, $($Rest),*> Concat<($First, $($Rest,)*)> for T
            where T: Push<$First>,
                  <T as Push<$First>>::Output: Concat<($($Rest,)*)>,
        {
            type Output = <<T as Push<$First>>::Output as Concat<($($Rest,)*)>>::Output;

            #[inline]
            fn concat(self, ($first, $($rest,)*): ($First, $($Rest,)*)) -> Self::Output {
                self.push($first).concat(($($rest,)*))
            }
        }
    };
}

impl_concat!(A a);
impl_concat!(A a, B b);
impl_concat!(A a, B b, C c);
impl_concat!(A a, B b, C c, D d);
impl_concat!(A a, B b, C c, D d, E e);
impl_concat!(A a, B b, C c, D d, E e, F f);
impl_concat!(A a, B b, C c, D d, E e, F f, G g);
impl_concat!(A a, B b, C c, D d, E e, F f, G g, H h);
impl_concat!(A a, B b, C c, D d, E e, F f, G g, H h, I i);
impl_concat!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
impl_concat!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);
impl_concat!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l);
