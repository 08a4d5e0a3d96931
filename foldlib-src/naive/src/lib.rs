#[doc(inline)]
pub use fold_scan::{self, *};
