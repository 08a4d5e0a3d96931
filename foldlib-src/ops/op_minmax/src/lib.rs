//! Minimum and maximum over any totally ordered element.

use merger::def_merger_generics;

def_merger_generics! {
    pub OpMin[T] where [T: Ord + Clone] =
        (T, |x: &T, y: &T| x.min(y).clone(), Commutative),
    pub OpMax[T] where [T: Ord + Clone] =
        (T, |x: &T, y: &T| x.max(y).clone(), Commutative),
}
