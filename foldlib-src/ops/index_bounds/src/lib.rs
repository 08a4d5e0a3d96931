use std::ops::{
    Bound::{Excluded, Included, Unbounded},
    RangeBounds,
};

use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum IndexOob {
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// `start` comes after `end`, with both given the way the caller wrote
    /// them.
    #[error("range starts at {start} but ends at {end}")]
    ReversedRange { start: usize, end: usize },
    #[error("range starting at {start} selects no element of sequence of length {len}")]
    EmptyRange { start: usize, len: usize },
}

pub fn check_index(index: usize, len: usize) -> Result<usize, IndexOob> {
    if index < len {
        Ok(index)
    } else {
        Err(IndexOob::IndexOutOfRange { index, len })
    }
}

/// Validates the closed range `[start, end]`.
///
/// Each bound is checked on its own first, so an out-of-range bound wins
/// over a reversed pair.
pub fn check_inclusive(
    start: usize,
    end: usize,
    len: usize,
) -> Result<(usize, usize), IndexOob> {
    let start = check_index(start, len)?;
    let end = check_index(end, len)?;
    if start > end {
        Err(IndexOob::ReversedRange { start, end })
    } else {
        Ok((start, end))
    }
}

/// Resolves any `usize` range into the closed range `[start, end]` it
/// selects.
///
/// ```
/// use index_bounds::{IndexBounds, IndexOob};
///
/// assert_eq!((1..3).checked_to_inclusive(5), Ok((1, 2)));
/// assert_eq!((..).checked_to_inclusive(5), Ok((0, 4)));
/// assert_eq!(
///     (2..2).checked_to_inclusive(5),
///     Err(IndexOob::EmptyRange { start: 2, len: 5 })
/// );
/// ```
pub trait IndexBounds {
    fn checked_to_inclusive(
        &self,
        len: usize,
    ) -> Result<(usize, usize), IndexOob>;
}

impl<R: RangeBounds<usize>> IndexBounds for R {
    fn checked_to_inclusive(
        &self,
        len: usize,
    ) -> Result<(usize, usize), IndexOob> {
        let start = match self.start_bound() {
            Included(&s) => s,
            Excluded(&s) => s.checked_add(1).ok_or(
                IndexOob::IndexOutOfRange { index: usize::MAX, len },
            )?,
            Unbounded => 0,
        };
        let end = match self.end_bound() {
            Included(&e) => e.checked_add(1).ok_or(
                IndexOob::IndexOutOfRange { index: usize::MAX, len },
            )?,
            Excluded(&e) => e,
            Unbounded => len,
        };

        if start > len {
            Err(IndexOob::IndexOutOfRange { index: start, len })
        } else if end > len {
            Err(IndexOob::IndexOutOfRange { index: end - 1, len })
        } else if start > end {
            Err(IndexOob::ReversedRange { start, end })
        } else if start == end {
            Err(IndexOob::EmptyRange { start, len })
        } else {
            // start < end <= len
            Ok((start, end - 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_index() {
        assert_eq!(check_index(0, 1), Ok(0));
        assert_eq!(
            check_index(1, 1),
            Err(IndexOob::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            check_index(0, 0),
            Err(IndexOob::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn closed_range() {
        assert_eq!(check_inclusive(0, 4, 5), Ok((0, 4)));
        assert_eq!(check_inclusive(3, 3, 5), Ok((3, 3)));
        assert_eq!(
            check_inclusive(3, 1, 5),
            Err(IndexOob::ReversedRange { start: 3, end: 1 })
        );
        assert_eq!(
            check_inclusive(6, 1, 5),
            Err(IndexOob::IndexOutOfRange { index: 6, len: 5 })
        );
        assert_eq!(
            check_inclusive(1, 5, 5),
            Err(IndexOob::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn range_bounds() {
        use std::ops::Bound;

        assert_eq!((0..=0).checked_to_inclusive(1), Ok((0, 0)));
        assert_eq!((2..).checked_to_inclusive(4), Ok((2, 3)));
        assert_eq!((..=2).checked_to_inclusive(4), Ok((0, 2)));
        assert_eq!(
            (Bound::Excluded(0), Bound::Included(3)).checked_to_inclusive(4),
            Ok((1, 3))
        );
        assert_eq!(
            (..5).checked_to_inclusive(4),
            Err(IndexOob::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            (5..).checked_to_inclusive(4),
            Err(IndexOob::IndexOutOfRange { index: 5, len: 4 })
        );
        assert_eq!(
            (..=usize::MAX).checked_to_inclusive(4),
            Err(IndexOob::IndexOutOfRange { index: usize::MAX, len: 4 })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 3..1;
        assert_eq!(
            reversed.checked_to_inclusive(4),
            Err(IndexOob::ReversedRange { start: 3, end: 1 })
        );
        assert_eq!(
            (..).checked_to_inclusive(0),
            Err(IndexOob::EmptyRange { start: 0, len: 0 })
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            IndexOob::IndexOutOfRange { index: 5, len: 5 }.to_string(),
            "index 5 out of range for sequence of length 5"
        );
        assert_eq!(
            IndexOob::ReversedRange { start: 3, end: 1 }.to_string(),
            "range starts at 3 but ends at 1"
        );
    }
}
