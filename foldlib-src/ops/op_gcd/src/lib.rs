use merger::{Associative, Commutative, Merger};

pub trait Gcd {
    fn gcd(&self, other: &Self) -> Self;
}

macro_rules! impl_uint {
    ( $($ty:ty)* ) => { $(
        impl Gcd for $ty {
            fn gcd(&self, other: &Self) -> Self {
                let (mut a, mut b) = (*self, *other);
                while b != 0 {
                    let tmp = a % b;
                    a = std::mem::replace(&mut b, tmp);
                }
                a
            }
        }
    )* }
}

// `gcd(MIN, MIN)` and `gcd(MIN, 0)` are `2^(BITS-1)`, which wraps back to
// `MIN`.
macro_rules! impl_int {
    ( $($ty:ty)* ) => { $(
        impl Gcd for $ty {
            fn gcd(&self, other: &Self) -> Self {
                self.unsigned_abs().gcd(&other.unsigned_abs()) as $ty
            }
        }
    )* }
}

impl_uint! { u8 u16 u32 u64 u128 usize }
impl_int! { i8 i16 i32 i64 i128 isize }

#[cfg(feature = "bigint")]
mod bigint {
    use num_bigint::{BigInt, BigUint};

    use crate::Gcd;

    impl Gcd for BigUint {
        fn gcd(&self, other: &Self) -> Self {
            let zero = BigUint::default();
            let (mut a, mut b) = (self.clone(), other.clone());
            while b != zero {
                let tmp = &a % &b;
                a = std::mem::replace(&mut b, tmp);
            }
            a
        }
    }

    impl Gcd for BigInt {
        fn gcd(&self, other: &Self) -> Self {
            Gcd::gcd(self.magnitude(), other.magnitude()).into()
        }
    }
}

/// Greatest common divisor, with `0` acting as a neutral element.
pub struct OpGcd<T>(std::marker::PhantomData<fn(&T) -> T>);

impl<T> Default for OpGcd<T> {
    fn default() -> Self { Self(std::marker::PhantomData) }
}

impl<T> Clone for OpGcd<T> {
    fn clone(&self) -> Self { Self::default() }
}

impl<T: Gcd> Merger for OpGcd<T> {
    type Set = T;
    fn merge(&self, lhs: &T, rhs: &T) -> T { lhs.gcd(rhs) }
}

impl<T: Gcd> Associative for OpGcd<T> {}
impl<T: Gcd> Commutative for OpGcd<T> {}

#[test]
fn sanity_check() {
    assert_eq!(24_u32.gcd(&16), 8);
    assert_eq!(0_u32.gcd(&0), 0);
    assert_eq!(0_u64.gcd(&7), 7);
    assert_eq!((-12_i32).gcd(&18), 6);
    assert_eq!(i8::MIN.gcd(&0), i8::MIN);

    let op_gcd: OpGcd<u64> = Default::default();
    assert_eq!(op_gcd.merge(&12, &30), 6);
    assert_eq!(op_gcd.merge(&op_gcd.merge(&12, &30), &4), 2);
}

#[cfg(feature = "bigint")]
#[test]
fn bigint() {
    use num_bigint::{BigInt, BigUint};

    let a: BigUint = "123456789012345678901234567890".parse().unwrap();
    let b: BigUint = "987654321098765432109876543210".parse().unwrap();
    let g: BigUint = "9000000000900000000090".parse().unwrap();
    assert_eq!(a.gcd(&b), g);

    let op_gcd: OpGcd<BigInt> = Default::default();
    let x = BigInt::from(-84);
    let y = BigInt::from(36);
    assert_eq!(op_gcd.merge(&x, &y), BigInt::from(12));
}
