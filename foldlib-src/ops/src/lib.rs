#[doc(inline)]
pub use index_bounds::{self, *};
#[doc(inline)]
pub use merger::{self, *};
#[doc(inline)]
pub use op_add::{self, *};
#[doc(inline)]
pub use op_gcd::{self, *};
#[doc(inline)]
pub use op_minmax::{self, *};
