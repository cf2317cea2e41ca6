//! Matrix module: the dense matrix type.

pub mod dense;
pub use dense::Matrix;
