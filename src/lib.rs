//! Range folding over fixed-length sequences.
//!
//! - [`ops`]: merging operations and index validation.
//! - [`ds`]: the segment tree.
//! - [`naive`]: linear-scan counterparts, for checking and comparison.
//!
//! ```
//! use foldlib::{ds::SegmentTree, ops::OpMin};
//!
//! let mut tree: SegmentTree<OpMin<i32>> = vec![5, 3, 8, 1, 9].into();
//! assert_eq!(tree.query(0, 4), Ok(1));
//! tree.set(3, 100).unwrap();
//! assert_eq!(tree.query(0, 4), Ok(3));
//! ```

#[doc(inline)]
pub use ds;
#[doc(inline)]
pub use naive;
#[doc(inline)]
pub use ops;
