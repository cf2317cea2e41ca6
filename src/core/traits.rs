//! Core shape trait for denmat.

/// Row/column counts of a 2-D container.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
}
