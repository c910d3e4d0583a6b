//! Row-major, immutable m×n matrix.

use std::fmt;
use std::ops::{Div, Mul};

use super::vector::Vector;
use crate::error::{FitError, Result};

/// An m×n matrix stored row-major. Every operation returns a new `Matrix`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    contents: Vec<f32>,
    m: usize,
    n: usize,
}

impl Matrix {
    /// Build from row-major `contents`, which must hold exactly `m * n` values.
    pub fn new(m: usize, n: usize, contents: Vec<f32>) -> Result<Self> {
        if contents.len() != m * n {
            return Err(FitError::mismatch(
                "matrix new",
                format!("{}x{}", m, n),
                contents.len(),
            ));
        }
        Ok(Self { contents, m, n })
    }

    /// An `len`×1 column matrix.
    pub fn from_column(v: &Vector) -> Self {
        Self {
            contents: v.as_slice().to_vec(),
            m: v.len(),
            n: 1,
        }
    }

    /// A 1×`len` row matrix.
    pub fn from_row(v: &Vector) -> Self {
        Self {
            contents: v.as_slice().to_vec(),
            m: 1,
            n: v.len(),
        }
    }

    pub fn identity(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(FitError::EmptyMatrix);
        }
        let mut contents = vec![0.0; size * size];
        for i in 0..size {
            contents[size * i + i] = 1.0;
        }
        Ok(Self {
            contents,
            m: size,
            n: size,
        })
    }

    pub fn rows(&self) -> usize {
        self.m
    }

    pub fn cols(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.at(row, col))
    }

    pub fn transpose(&self) -> Self {
        let mut contents = Vec::with_capacity(self.m * self.n);
        for col in 0..self.n {
            for row in 0..self.m {
                contents.push(self.at(row, col));
            }
        }
        Self {
            contents,
            m: self.n,
            n: self.m,
        }
    }

    pub fn mul(&self, rhs: &Matrix) -> Result<Self> {
        if self.n != rhs.m {
            return Err(FitError::mismatch(
                "matrix mul",
                format!("{}x{}", self.m, self.n),
                format!("{}x{}", rhs.m, rhs.n),
            ));
        }
        let mut contents = Vec::with_capacity(self.m * rhs.n);
        for row in 0..self.m {
            for col in 0..rhs.n {
                let value = (0..self.n)
                    .map(|k| self.at(row, k) * rhs.at(k, col))
                    .sum::<f32>();
                contents.push(value);
            }
        }
        Ok(Self {
            contents,
            m: self.m,
            n: rhs.n,
        })
    }

    /// Matrix × column vector.
    pub fn mul_vector(&self, rhs: &Vector) -> Result<Vector> {
        self.mul(&Matrix::from_column(rhs))?.column(0)
    }

    pub fn add(&self, rhs: &Matrix) -> Result<Self> {
        self.zip_with(rhs, "matrix add", |a, b| a + b)
    }

    pub fn sub(&self, rhs: &Matrix) -> Result<Self> {
        self.zip_with(rhs, "matrix sub", |a, b| a - b)
    }

    pub fn column(&self, col: usize) -> Result<Vector> {
        self.check_col(col)?;
        Ok(Vector::new((0..self.m).map(|row| self.at(row, col)).collect()))
    }

    pub fn row(&self, row: usize) -> Result<Vector> {
        self.check_row(row)?;
        Ok(Vector::new(
            self.contents[row * self.n..(row + 1) * self.n].to_vec(),
        ))
    }

    /// Overwrite a block of this matrix with `block`, its top-left corner
    /// placed at (`row`, `col`). `None` aligns the block to the bottom/right edge.
    ///
    /// A block the size of the whole matrix is returned as is.
    pub fn insert(&self, block: &Matrix, row: Option<usize>, col: Option<usize>) -> Result<Self> {
        if block.m > self.m || block.n > self.n {
            return Err(FitError::mismatch(
                "matrix insert",
                format!("{}x{}", block.m, block.n),
                format!("{}x{}", self.m, self.n),
            ));
        }
        let start_row = row.unwrap_or(self.m - block.m);
        let start_col = col.unwrap_or(self.n - block.n);
        if start_row + block.m > self.m {
            return Err(FitError::IndexOutOfRange {
                index: start_row + block.m,
                len: self.m,
            });
        }
        if start_col + block.n > self.n {
            return Err(FitError::IndexOutOfRange {
                index: start_col + block.n,
                len: self.n,
            });
        }

        if block.m == self.m && block.n == self.n {
            return Ok(block.clone());
        }

        let mut contents = self.contents.clone();
        for r in 0..block.m {
            for c in 0..block.n {
                contents[(start_row + r) * self.n + start_col + c] = block.at(r, c);
            }
        }
        Ok(Self {
            contents,
            m: self.m,
            n: self.n,
        })
    }

    /// Copy the block spanning rows `start_row..=end_row` and columns
    /// `start_col..=end_col`. A `None` end means the last row/column.
    pub fn subsection(
        &self,
        start_row: usize,
        end_row: Option<usize>,
        start_col: usize,
        end_col: Option<usize>,
    ) -> Result<Self> {
        let end_row = end_row.unwrap_or(self.m.saturating_sub(1));
        let end_col = end_col.unwrap_or(self.n.saturating_sub(1));
        self.check_row(end_row)?;
        self.check_col(end_col)?;
        if start_row > end_row {
            return Err(FitError::IndexOutOfRange {
                index: start_row,
                len: end_row + 1,
            });
        }
        if start_col > end_col {
            return Err(FitError::IndexOutOfRange {
                index: start_col,
                len: end_col + 1,
            });
        }

        let m = end_row - start_row + 1;
        let n = end_col - start_col + 1;
        let mut contents = Vec::with_capacity(m * n);
        for row in start_row..=end_row {
            contents.extend_from_slice(&self.contents[row * self.n + start_col..=row * self.n + end_col]);
        }
        Ok(Self { contents, m, n })
    }

    /// True when every entry below the diagonal is within `epsilon` of zero
    /// and every diagonal entry is not.
    pub fn is_upper_triangular(&self, epsilon: f32) -> bool {
        let is_zero = |v: f32| v.abs() < epsilon;
        for row in 0..self.m {
            for col in 0..self.n.min(row + 1) {
                let value = self.at(row, col);
                if col < row && !is_zero(value) {
                    return false;
                }
                if col == row && is_zero(value) {
                    return false;
                }
            }
        }
        true
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.contents[row * self.n + col]
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.m {
            return Err(FitError::IndexOutOfRange {
                index: row,
                len: self.m,
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.n {
            return Err(FitError::IndexOutOfRange {
                index: col,
                len: self.n,
            });
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Matrix, op: &'static str, f: impl Fn(f32, f32) -> f32) -> Result<Self> {
        if self.m != rhs.m || self.n != rhs.n {
            return Err(FitError::mismatch(
                op,
                format!("{}x{}", self.m, self.n),
                format!("{}x{}", rhs.m, rhs.n),
            ));
        }
        Ok(Self {
            contents: self
                .contents
                .iter()
                .zip(&rhs.contents)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            m: self.m,
            n: self.n,
        })
    }
}

impl Mul<f32> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f32) -> Matrix {
        Matrix {
            contents: self.contents.iter().map(|v| v * rhs).collect(),
            m: self.m,
            n: self.n,
        }
    }
}

impl Mul<&Matrix> for f32 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs * self
    }
}

impl Div<f32> for &Matrix {
    type Output = Matrix;

    fn div(self, rhs: f32) -> Matrix {
        self * (1.0 / rhs)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.m {
            for col in 0..self.n {
                write!(f, "| {:.6} ", self.at(row, col))?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
