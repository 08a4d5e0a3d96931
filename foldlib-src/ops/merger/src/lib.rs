//! Binary merging operations over an element type.
//!
//! A range-folding structure only ever combines two adjacent aggregates,
//! left one first, so the single capability it needs is [`Merger`]. The
//! marker traits record the algebraic laws the caller vouches for; nothing
//! checks them at runtime.

use std::marker::PhantomData;

pub trait Merger {
    type Set;
    fn merge(&self, lhs: &Self::Set, rhs: &Self::Set) -> Self::Set;
}

/// `merge(merge(a, b), c) == merge(a, merge(b, c))`.
pub trait Associative {}

/// `merge(a, b) == merge(b, a)`.
pub trait Commutative {}

pub trait Semigroup: Merger + Associative {}
pub trait CommutativeSemigroup: Merger + Associative + Commutative {}

impl<T: Merger + Associative> Semigroup for T {}
impl<T: Merger + Associative + Commutative> CommutativeSemigroup for T {}

/// Lifts a closure into a [`Merger`].
///
/// The closure is taken to be associative.
///
/// ```
/// use merger::{FnMerger, Merger};
///
/// let concat = FnMerger::new(|x: &String, y: &String| format!("{x}{y}"));
/// assert_eq!(concat.merge(&"ab".to_owned(), &"c".to_owned()), "abc");
/// ```
pub struct FnMerger<T, F> {
    f: F,
    _marker: PhantomData<fn(&T) -> T>,
}

impl<T, F: Fn(&T, &T) -> T> FnMerger<T, F> {
    pub fn new(f: F) -> Self { Self { f, _marker: PhantomData } }
}

impl<T, F: Clone> Clone for FnMerger<T, F> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone(), _marker: PhantomData }
    }
}

impl<T, F: Fn(&T, &T) -> T> Merger for FnMerger<T, F> {
    type Set = T;
    fn merge(&self, lhs: &T, rhs: &T) -> T { (self.f)(lhs, rhs) }
}

impl<T, F: Fn(&T, &T) -> T> Associative for FnMerger<T, F> {}

#[macro_export]
macro_rules! def_merger_generics {
    (
        $vis:vis $name:ident[$($gen:tt)*] where [$($where:tt)*] =
            ($ty:ty, $op:expr $(,)?)
    ) => {
        $vis struct $name<$($gen)*>(std::marker::PhantomData<fn() -> ($($gen)*)>)
        where $($where)*;
        impl<$($gen)*> $name<$($gen)*>
        where $($where)*
        {
            #[allow(dead_code)]
            $vis fn new() -> Self { Self(std::marker::PhantomData) }
        }
        impl<$($gen)*> $crate::Merger for $name<$($gen)*>
        where $($where)*
        {
            type Set = $ty;
            fn merge(&self, lhs: &Self::Set, rhs: &Self::Set) -> Self::Set {
                ($op)(lhs, rhs)
            }
        }
        impl<$($gen)*> $crate::Associative for $name<$($gen)*>
        where $($where)*
        {}
        impl<$($gen)*> Default for $name<$($gen)*>
        where $($where)*
        {
            fn default() -> Self { Self(std::marker::PhantomData) }
        }
        impl<$($gen)*> Clone for $name<$($gen)*>
        where $($where)*
        {
            fn clone(&self) -> Self { Self(std::marker::PhantomData) }
        }
    };
    (
        $vis:vis $name:ident[$($gen:tt)*] where [$($where:tt)*] =
            ($ty:ty, $op:expr, Commutative $(,)?)
    ) => {
        $crate::def_merger_generics! {
            $vis $name[$($gen)*] where [$($where)*] = ($ty, $op)
        }
        impl<$($gen)*> $crate::Commutative for $name<$($gen)*> where $($where)* {}
    };
    (
        $($vis:vis $name:ident[$($gen:tt)*] where [$($where:tt)*] = ($($impl:tt)*)),*
    ) => { $(
        $crate::def_merger_generics! {
            $vis $name[$($gen)*] where [$($where)*] = ($($impl)*)
        }
    )* };
    (
        $($vis:vis $name:ident[$($gen:tt)*] where [$($where:tt)*] = ($($impl:tt)*),)*
    ) => { $(
        $crate::def_merger_generics! {
            $vis $name[$($gen)*] where [$($where)*] = ($($impl)*)
        }
    )* };
}

#[macro_export]
macro_rules! def_merger {
    ( $vis:vis $name:ident = ($ty:ty, $op:expr $(,)?) ) => {
        $crate::def_merger_generics! { $vis $name[] where [] = ($ty, $op) }
    };
    ( $vis:vis $name:ident = ($ty:ty, $op:expr, Commutative $(,)?) ) => {
        $crate::def_merger_generics! { $vis $name[] where [] = ($ty, $op, Commutative) }
    };
    ( $($vis:vis $name:ident = ($($impl:tt)*)),* ) => { $(
        $crate::def_merger! { $vis $name = ($($impl)*) }
    )* };
    ( $($vis:vis $name:ident = ($($impl:tt)*),)* ) => { $(
        $crate::def_merger! { $vis $name = ($($impl)*) }
    )* };
}

#[cfg(test)]
mod tests {
    use std::ops::BitXor;

    use super::*;

    fn is_commutative<M: CommutativeSemigroup>(_: &M) -> bool { true }

    #[test]
    fn simple_merger() {
        def_merger! {
            OpXor = (u32, |x, y| x ^ y, Commutative),
            OpConcat = (String, |x: &String, y: &String| format!("{x}{y}")),
        }

        let xor = OpXor::new();
        assert_eq!(xor.merge(&2, &3), 1);
        assert!(is_commutative(&xor));

        let concat = OpConcat::default();
        let (x, y) = ("foo".to_owned(), "bar".to_owned());
        assert_eq!(concat.merge(&x, &y), "foobar");
        assert_eq!(concat.merge(&y, &x), "barfoo");
    }

    #[test]
    fn generics_merger() {
        def_merger_generics! {
            OpXor[T] where [for<'a> &'a T: BitXor<Output = T>] =
                (T, |x, y| x ^ y, Commutative),
            OpAppend[T] where [T: Clone] = (
                Vec<T>,
                |x: &Vec<T>, y: &Vec<T>| x.iter().chain(y).cloned().collect(),
            ),
        }

        let xor = OpXor::<u64>::new();
        assert_eq!(xor.merge(&6, &3), 5);

        let append = OpAppend::<char>::new();
        assert_eq!(append.merge(&vec!['a'], &vec!['b', 'c']), vec!['a', 'b', 'c']);
    }

    #[test]
    fn closure_merger() {
        let max = FnMerger::new(|&x: &i32, &y: &i32| x.max(y));
        assert_eq!(max.merge(&-1, &4), 4);
        assert_eq!(max.clone().merge(&7, &4), 7);
    }
}
