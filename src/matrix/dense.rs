//! Dense f64 matrix over a flat row-major buffer.
//!
//! This module provides the `Matrix` type: an owned `rows x cols` grid of
//! double-precision values with checked element access, prefix-preserving
//! resize, transposition, and naive matrix multiplication.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::core::traits::MatShape;
use crate::error::MatrixError;

/// Owned dense matrix of `f64` values.
///
/// Storage is a single row-major buffer with stride `cols`; the invariant
/// `data.len() == rows * cols` holds after every public operation. Either
/// dimension may be zero, in which case the matrix holds no elements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Validate a signed dimension pair, converting to unsigned on success.
fn check_dims(rows: isize, cols: isize) -> Result<(usize, usize), MatrixError> {
    if rows < 0 || cols < 0 {
        return Err(MatrixError::InvalidDimension { rows, cols });
    }
    Ok((rows as usize, cols as usize))
}

impl Matrix {
    /// Empty 0 x 0 matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-filled `rows x cols` matrix.
    ///
    /// Fails with [`MatrixError::InvalidDimension`] if either count is
    /// negative; validation happens before any allocation, so a failed
    /// construction never yields an instance.
    pub fn with_dims(rows: isize, cols: isize) -> Result<Self, MatrixError> {
        let (rows, cols) = check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Bounds check shared by every element accessor.
    fn check_index(&self, i: isize, j: isize) -> Result<(usize, usize), MatrixError> {
        if i < 0 || j < 0 || i as usize >= self.rows || j as usize >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row: i,
                col: j,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((i as usize, j as usize))
    }

    /// Read the element at `(i, j)`.
    pub fn get(&self, i: isize, j: isize) -> Result<f64, MatrixError> {
        let (i, j) = self.check_index(i, j)?;
        Ok(self.data[self.offset(i, j)])
    }

    /// Write `value` to the element at `(i, j)`.
    pub fn set(&mut self, i: isize, j: isize, value: f64) -> Result<(), MatrixError> {
        let (i, j) = self.check_index(i, j)?;
        let idx = self.offset(i, j);
        self.data[idx] = value;
        Ok(())
    }

    /// Mutable handle to the element at `(i, j)`.
    pub fn at_mut(&mut self, i: isize, j: isize) -> Result<&mut f64, MatrixError> {
        let (i, j) = self.check_index(i, j)?;
        let idx = self.offset(i, j);
        Ok(&mut self.data[idx])
    }

    /// Resize to `rows x cols`, preserving the overlapping prefix.
    ///
    /// Kept rows retain their first `min(old_cols, new_cols)` values; every
    /// newly introduced cell is zero; shrinking discards trailing rows and
    /// columns. Fails with [`MatrixError::InvalidDimension`] on a negative
    /// count, leaving the matrix unchanged.
    pub fn resize(&mut self, rows: isize, cols: isize) -> Result<(), MatrixError> {
        let (new_rows, new_cols) = check_dims(rows, cols)?;
        let mut data = vec![0.0; new_rows * new_cols];
        for i in 0..self.rows.min(new_rows) {
            for j in 0..self.cols.min(new_cols) {
                data[i * new_cols + j] = self.data[self.offset(i, j)];
            }
        }
        self.rows = new_rows;
        self.cols = new_cols;
        self.data = data;
        Ok(())
    }

    /// In-place transposition via the legacy pairwise-swap scheme.
    ///
    /// Swaps cell `(i, j)` with `(j, i)` for `j` in `i+1..cols`, then swaps
    /// the recorded dimensions. The scheme is only dimension-correct for
    /// square matrices:
    ///
    /// - square: correct transpose, no allocation;
    /// - `rows > cols`: every touched cell lies inside the stored grid, so
    ///   the swaps run to completion, but the dimension swap reinterprets the
    ///   buffer with the new stride and the result is *not* the transpose;
    /// - `cols > rows`: the mirror cell `(rows, 0)` falls outside the grid;
    ///   rejected up front with [`MatrixError::IndexOutOfRange`] and no
    ///   mutation.
    ///
    /// Use [`Matrix::transpose`] for shape-correct results on non-square
    /// input.
    pub fn transpose_in_place(&mut self) -> Result<(), MatrixError> {
        if self.cols > self.rows {
            // First mirror access of the swap loop that leaves the grid.
            return Err(MatrixError::IndexOutOfRange {
                row: self.rows as isize,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        for i in 0..self.rows {
            for j in (i + 1)..self.cols {
                let a = self.offset(i, j);
                let b = self.offset(j, i);
                self.data.swap(a, b);
            }
        }
        std::mem::swap(&mut self.rows, &mut self.cols);
        Ok(())
    }

    /// Out-of-place transpose: cell `(j, i)` of the result equals cell
    /// `(i, j)` of `self`. Correct for all rectangular shapes; never fails.
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix {
            rows: self.cols,
            cols: self.rows,
            data: vec![0.0; self.data.len()],
        };
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[self.offset(i, j)];
            }
        }
        out
    }

    /// Matrix product `self * rhs`.
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] unless
    /// `self.cols() == rhs.rows()`. Each result cell is accumulated from 0.0
    /// in increasing `k` order, so rounding is reproducible. Naive triple
    /// loop; neither operand is mutated.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                left_cols: self.cols,
                right_rows: rhs.rows,
            });
        }
        let mut out = Matrix {
            rows: self.rows,
            cols: rhs.cols,
            data: vec![0.0; self.rows * rhs.cols],
        };
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self[(i, k)] * rhs[(k, j)];
                }
                out.data[i * rhs.cols + j] = sum;
            }
        }
        Ok(out)
    }

    /// Dump the matrix to stdout, one row per line. Debugging convenience;
    /// see the [`fmt::Display`] impl for the format.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl MatShape for Matrix {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

/// Panicking convenience indexing; the checked API is `get`/`set`/`at_mut`.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        &mut self.data[i * self.cols + j]
    }
}

/// Each row's elements separated by single spaces, one row per line.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{} ", self.data[self.offset(i, j)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
