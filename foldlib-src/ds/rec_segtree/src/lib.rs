//! Segment tree over a fixed-length sequence, built, queried and updated
//! by recursive halving.
//!
//! Node `k` of the tree lives in slot `k` of a flat vector of `4n` slots,
//! with its children in slots `2k+1` and `2k+2`. A node covering
//! `[left, right]` splits at `mid = left + (right - left) / 2`, and holds
//! the merge of its two halves. Slots that no node lands in stay empty.
//!
//! Merges always take the left operand from lower indices, so the merger
//! needs to be associative but not commutative.
//!
//! ```
//! use merger::FnMerger;
//! use rec_segtree::SegmentTree;
//!
//! let words = ["seg", "ment", " ", "tree"].map(String::from);
//! let concat = FnMerger::new(|x: &String, y: &String| format!("{x}{y}"));
//! let mut tree = SegmentTree::new(words.to_vec(), concat);
//! assert_eq!(tree.query(0, 3).unwrap(), "segment tree");
//!
//! tree.set(3, "s".to_owned()).unwrap();
//! assert_eq!(tree.query(1, 3).unwrap(), "ment s");
//! ```

use std::{
    fmt,
    ops::{Deref, DerefMut, Index, RangeBounds},
};

use index_bounds::{check_index, check_inclusive, IndexBounds, IndexOob};
use merger::Semigroup;

macro_rules! debug {
    ( $($arg:tt)* ) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
    };
}

macro_rules! trace {
    ( $($arg:tt)* ) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
    };
}

macro_rules! warn {
    ( $($arg:tt)* ) => {
        #[cfg(feature = "log")]
        log::warn!($($arg)*);
    };
}

fn left_child(k: usize) -> usize { 2 * k + 1 }
fn right_child(k: usize) -> usize { 2 * k + 2 }
fn mid(left: usize, right: usize) -> usize { left + (right - left) / 2 }

fn reject(e: IndexOob) -> IndexOob {
    warn!("rejected access: {}", e);
    e
}

#[derive(Clone)]
pub struct SegmentTree<M: Semigroup> {
    data: Vec<M::Set>,
    tree: Vec<Option<M::Set>>,
    merger: M,
}

/// Write access to one element; ancestors are recomputed on drop.
pub struct PeekMut<'a, M: Semigroup>
where
    M::Set: Clone,
{
    self_: &'a mut SegmentTree<M>,
    index: usize,
}

impl<M: Semigroup> SegmentTree<M>
where
    M::Set: Clone,
{
    /// Builds the tree in $O(n)$ merges.
    ///
    /// An empty `data` gives a tree with no nodes, on which every
    /// index-taking operation fails.
    pub fn new(data: Vec<M::Set>, merger: M) -> Self {
        let n = data.len();
        let mut self_ = Self { data, tree: vec![None; 4 * n], merger };
        if n > 0 {
            self_.build(0, 0, n - 1);
        }
        debug!("built segment tree over {} elements in {} slots", n, 4 * n);
        self_
    }

    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }
    pub fn as_slice(&self) -> &[M::Set] { &self.data }

    pub fn get(&self, index: usize) -> Result<&M::Set, IndexOob> {
        let index = check_index(index, self.len()).map_err(reject)?;
        Ok(&self.data[index])
    }

    /// Replaces the element at `index`, recomputing the $O(\log n)$ nodes
    /// above it. The tree is untouched on error.
    pub fn set(&mut self, index: usize, elt: M::Set) -> Result<(), IndexOob> {
        let n = self.len();
        let index = check_index(index, n).map_err(reject)?;
        self.data[index] = elt;
        self.pull(0, 0, n - 1, index);
        trace!("set index {} of {}", index, n);
        Ok(())
    }

    /// Merges `data[query_l..=query_r]` from left to right.
    ///
    /// Both bounds must be in range, and `query_l <= query_r`.
    ///
    /// ```
    /// use index_bounds::IndexOob;
    /// use op_add::OpAdd;
    /// use rec_segtree::SegmentTree;
    ///
    /// let tree: SegmentTree<OpAdd<i32>> = vec![1, 2, 3, 4, 5].into();
    /// assert_eq!(tree.query(1, 3), Ok(9));
    /// assert_eq!(tree.query(2, 2), Ok(3));
    /// assert_eq!(
    ///     tree.query(3, 1),
    ///     Err(IndexOob::ReversedRange { start: 3, end: 1 })
    /// );
    /// ```
    pub fn query(
        &self,
        query_l: usize,
        query_r: usize,
    ) -> Result<M::Set, IndexOob> {
        let n = self.len();
        let (query_l, query_r) =
            check_inclusive(query_l, query_r, n).map_err(reject)?;
        Ok(self.descend(0, 0, n - 1, query_l, query_r))
    }

    /// Same as [`query`](Self::query), for any non-empty `usize` range.
    pub fn fold(
        &self,
        range: impl RangeBounds<usize>,
    ) -> Result<M::Set, IndexOob> {
        let n = self.len();
        let (query_l, query_r) =
            range.checked_to_inclusive(n).map_err(reject)?;
        Ok(self.descend(0, 0, n - 1, query_l, query_r))
    }

    pub fn peek_mut(
        &mut self,
        index: usize,
    ) -> Result<PeekMut<'_, M>, IndexOob> {
        let index = check_index(index, self.len()).map_err(reject)?;
        Ok(PeekMut { self_: self, index })
    }

    fn node(&self, k: usize) -> &M::Set {
        match &self.tree[k] {
            Some(x) => x,
            None => unreachable!("slot {k} holds no node"),
        }
    }

    fn fix(&mut self, k: usize) {
        let x =
            self.merger.merge(self.node(left_child(k)), self.node(right_child(k)));
        self.tree[k] = Some(x);
    }

    fn build(&mut self, k: usize, left: usize, right: usize) {
        if left == right {
            self.tree[k] = Some(self.data[left].clone());
            return;
        }
        let mid = mid(left, right);
        self.build(left_child(k), left, mid);
        self.build(right_child(k), mid + 1, right);
        self.fix(k);
    }

    fn descend(
        &self,
        k: usize,
        left: usize,
        right: usize,
        query_l: usize,
        query_r: usize,
    ) -> M::Set {
        if (left, right) == (query_l, query_r) {
            return self.node(k).clone();
        }
        let mid = mid(left, right);
        if query_l > mid {
            return self.descend(right_child(k), mid + 1, right, query_l, query_r);
        }
        if query_r <= mid {
            return self.descend(left_child(k), left, mid, query_l, query_r);
        }
        let resl = self.descend(left_child(k), left, mid, query_l, mid);
        let resr = self.descend(right_child(k), mid + 1, right, mid + 1, query_r);
        self.merger.merge(&resl, &resr)
    }

    // Copies `data[index]` into its leaf and recomputes the leaf's ancestors.
    fn pull(&mut self, k: usize, left: usize, right: usize, index: usize) {
        if left == right {
            self.tree[k] = Some(self.data[index].clone());
            return;
        }
        let mid = mid(left, right);
        if index > mid {
            self.pull(right_child(k), mid + 1, right, index);
        } else {
            self.pull(left_child(k), left, mid, index);
        }
        self.fix(k);
    }
}

impl<M: Semigroup> Index<usize> for SegmentTree<M> {
    type Output = M::Set;
    fn index(&self, i: usize) -> &Self::Output {
        match check_index(i, self.data.len()) {
            Ok(i) => &self.data[i],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<M: Semigroup> Deref for PeekMut<'_, M>
where
    M::Set: Clone,
{
    type Target = M::Set;
    fn deref(&self) -> &Self::Target { &self.self_.data[self.index] }
}

impl<M: Semigroup> DerefMut for PeekMut<'_, M>
where
    M::Set: Clone,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.self_.data[self.index]
    }
}

impl<M: Semigroup> Drop for PeekMut<'_, M>
where
    M::Set: Clone,
{
    fn drop(&mut self) {
        let Self { self_, index } = self;
        let n = self_.len();
        self_.pull(0, 0, n - 1, *index);
        trace!("wrote back index {} of {}", index, n);
    }
}

impl<M: Semigroup + Default> From<Vec<M::Set>> for SegmentTree<M>
where
    M::Set: Clone,
{
    fn from(a: Vec<M::Set>) -> Self { Self::new(a, M::default()) }
}

impl<M: Semigroup> From<(Vec<M::Set>, M)> for SegmentTree<M>
where
    M::Set: Clone,
{
    fn from((a, merger): (Vec<M::Set>, M)) -> Self { Self::new(a, merger) }
}

impl<M: Semigroup> From<SegmentTree<M>> for Vec<M::Set> {
    fn from(self_: SegmentTree<M>) -> Vec<M::Set> { self_.data }
}

impl<M: Semigroup + Default> FromIterator<M::Set> for SegmentTree<M>
where
    M::Set: Clone,
{
    fn from_iter<I: IntoIterator<Item = M::Set>>(iter: I) -> Self {
        let buf: Vec<_> = iter.into_iter().collect();
        buf.into()
    }
}

impl<M: Semigroup> fmt::Debug for SegmentTree<M>
where
    M::Set: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

/// Lists every slot of the tree array, `empty` for unused ones.
impl<M: Semigroup> fmt::Display for SegmentTree<M>
where
    M::Set: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (k, slot) in self.tree.iter().enumerate() {
            if k > 0 {
                f.write_str(",")?;
            }
            match slot {
                Some(x) => write!(f, "{x}")?,
                None => f.write_str("empty")?,
            }
        }
        f.write_str("]")
    }
}
