use std::ops::Add;

use merger::{Associative, Commutative, Merger};

pub struct OpAdd<T>(std::marker::PhantomData<fn(&T) -> T>);

impl<T> Default for OpAdd<T> {
    fn default() -> Self { Self(std::marker::PhantomData) }
}

impl<T> Clone for OpAdd<T> {
    fn clone(&self) -> Self { Self::default() }
}

impl<T> Merger for OpAdd<T>
where
    for<'a> &'a T: Add<&'a T, Output = T>,
{
    type Set = T;
    fn merge(&self, lhs: &T, rhs: &T) -> T { lhs + rhs }
}

impl<T> Associative for OpAdd<T> where for<'a> &'a T: Add<&'a T, Output = T> {}
impl<T> Commutative for OpAdd<T> where for<'a> &'a T: Add<&'a T, Output = T> {}

#[test]
fn sanity_check() {
    let op_add: OpAdd<i32> = Default::default();
    assert_eq!(op_add.merge(&1, &2), 3);
    assert_eq!(op_add.merge(&-4, &2), -2);

    let op_add: OpAdd<u64> = Default::default();
    assert_eq!(op_add.merge(&u64::MAX, &0), u64::MAX);
}
