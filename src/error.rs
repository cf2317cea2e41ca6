use thiserror::Error;

// Unified error type for denmat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matrix dimensions must be non-negative (got {rows} x {cols})")]
    InvalidDimension { rows: isize, cols: isize },
    #[error("index ({row}, {col}) out of range for {rows} x {cols} matrix")]
    IndexOutOfRange {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },
    #[error("dimension mismatch for multiplication: left has {left_cols} columns, right has {right_rows} rows")]
    DimensionMismatch { left_cols: usize, right_rows: usize },
}
