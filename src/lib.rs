//! denmat: dense f64 matrix building block
//!
//! This crate provides a single owned dense matrix type with checked element
//! access, prefix-preserving resize, in-place and out-of-place transposition,
//! and naive matrix multiplication. It is a small numeric building block, not
//! a linear-algebra library.

pub mod core;
pub mod error;
pub mod matrix;

// Re-exports for convenience
pub use self::core::MatShape;
pub use error::MatrixError;
pub use matrix::Matrix;
