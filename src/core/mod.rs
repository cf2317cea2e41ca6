//! Core traits shared across the crate.

pub mod traits;
pub use traits::MatShape;
