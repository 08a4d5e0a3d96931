#[doc(inline)]
pub use rec_segtree::{self, *};
