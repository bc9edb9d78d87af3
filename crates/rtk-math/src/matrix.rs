//! Dynamically sized rectangular matrix.
//!
//! [`Matrix`] backs every transform in the kernel. It is deliberately not
//! a fixed 4x4 type: minors and cofactors recurse through 3x3 and 2x2
//! submatrices, so one container serves every size.
//!
//! # Convention
//!
//! Storage is a flat **row-major** buffer. Tuples are **column vectors**:
//!
//! ```text
//! | m00 m01 m02 m03 |   | x |   | m00*x + m01*y + m02*z + m03*w |
//! | m10 m11 m12 m13 | * | y | = | m10*x + m11*y + m12*z + m13*w |
//! | m20 m21 m22 m23 |   | z |   | m20*x + m21*y + m22*z + m23*w |
//! | m30 m31 m32 m33 |   | w |   | m30*x + m31*y + m32*z + m33*w |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use rtk_math::Matrix;
//!
//! let m = Matrix::from_rows([
//!     [1.0, 2.0, 6.0],
//!     [-5.0, 8.0, -4.0],
//!     [2.0, 6.0, 4.0],
//! ]);
//!
//! assert_eq!(m.cofactor(0, 0).unwrap(), 56.0);
//! assert_eq!(m.determinant().unwrap(), -196.0);
//! ```

use crate::Tuple;
use rtk_core::{equal, ApproxEq, Error, Result};
use std::fmt;
use std::ops::Index;

/// A rectangular, row-major matrix of `f64`.
///
/// Every row has exactly [`cols`](Matrix::cols) elements. Operations never
/// mutate their operands; each returns a fresh matrix.
///
/// `PartialEq` is exact comparison; use [`Matrix::equal`] for the
/// epsilon-tolerant one.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates an all-zero matrix of the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates a matrix from row arrays.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rtk_math::Matrix;
    ///
    /// let m = Matrix::from_rows([[-3.0, 5.0], [1.0, -2.0]]);
    /// assert_eq!(m.at(1, 0), 1.0);
    /// ```
    pub fn from_rows<const R: usize, const C: usize>(rows: [[f64; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Creates a matrix from a vector of rows.
    ///
    /// An empty vector gives the 0x0 matrix.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedShape`] if the rows differ in length or are empty.
    pub fn try_from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height > 0 && width == 0 {
            return Err(Error::malformed(height, 0, "rows must not be empty"));
        }
        if rows.iter().any(|r| r.len() != width) {
            return Err(Error::malformed(height, width, "rows have different lengths"));
        }
        Ok(Self {
            rows: height,
            cols: width,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Creates a matrix whose `(r, c)` element is `f(r, c)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Creates an `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |r, c| if r == c { 1.0 } else { 0.0 })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns true if rows equal columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns true for a matrix with no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads element `(r, c)`.
    ///
    /// # Panics
    ///
    /// If `r` or `c` is out of range.
    #[inline]
    pub fn at(&self, r: usize, c: usize) -> f64 {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[r * self.cols + c]
    }

    /// Returns row `r` as a slice.
    ///
    /// # Panics
    ///
    /// If `r` is out of range.
    pub fn row(&self, r: usize) -> &[f64] {
        assert!(r < self.rows, "row {r} out of range for {}x{} matrix", self.rows, self.cols);
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Returns true if both shapes match and every element is
    /// epsilon-equal.
    pub fn equal(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self.data.iter().zip(&other.data).all(|(a, b)| equal(*a, *b))
    }

    /// Standard matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `self.cols() != other.rows()`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(Error::dimension_mismatch(self.shape(), other.shape()));
        }
        Ok(Self::from_fn(self.rows, other.cols, |r, c| {
            (0..self.cols).map(|i| self.at(r, i) * other.at(i, c)).sum()
        }))
    }

    /// Multiplies a tuple, treated as a 4x1 column, by this matrix.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] unless the matrix is 4x4; the product
    /// must have four rows to be read back as a tuple.
    pub fn multiply_tuple(&self, t: Tuple) -> Result<Tuple> {
        if self.rows != 4 {
            return Err(Error::dimension_mismatch(self.shape(), (4, 1)));
        }
        let column = Self {
            rows: 4,
            cols: 1,
            data: t.to_array().to_vec(),
        };
        let product = self.multiply(&column)?;
        Ok(Tuple::new(
            product.data[0],
            product.data[1],
            product.data[2],
            product.data[3],
        ))
    }

    /// Returns the transpose; an `R x C` matrix becomes `C x R`.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |r, c| self.at(c, r))
    }

    /// Returns a copy with `row` and `col` removed.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is out of range.
    pub fn submatrix(&self, row: usize, col: usize) -> Self {
        assert!(
            row < self.rows && col < self.cols,
            "submatrix ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        Self::from_fn(self.rows - 1, self.cols - 1, |r, c| {
            let src_r = if r < row { r } else { r + 1 };
            let src_c = if c < col { c } else { c + 1 };
            self.at(src_r, src_c)
        })
    }

    /// Determinant of the submatrix at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedShape`] if the matrix is not square or the
    /// submatrix is empty.
    pub fn minor(&self, row: usize, col: usize) -> Result<f64> {
        self.require_square("minor requires a square matrix")?;
        self.submatrix(row, col).determinant()
    }

    /// Minor at `(row, col)`, negated when `row + col` is odd.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::minor`].
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        let minor = self.minor(row, col)?;
        Ok(if (row + col) % 2 == 1 { -minor } else { minor })
    }

    /// Determinant by Laplace expansion along row 0.
    ///
    /// A 1x1 matrix's determinant is its only element; 2x2 uses
    /// `ad - bc`.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedShape`] for non-square or empty matrices.
    pub fn determinant(&self) -> Result<f64> {
        self.require_square("determinant requires a square matrix")?;
        match self.rows {
            1 => Ok(self.data[0]),
            2 => Ok(self.data[0] * self.data[3] - self.data[1] * self.data[2]),
            _ => (0..self.cols).try_fold(0.0, |acc, c| -> Result<f64> {
                Ok(acc + self.at(0, c) * self.cofactor(0, c)?)
            }),
        }
    }

    /// Returns true if the determinant exists and is not epsilon-equal
    /// to zero.
    pub fn invertible(&self) -> bool {
        self.determinant().is_ok_and(|d| !equal(d, 0.0))
    }

    /// Inverse via the adjugate: each cofactor divided by the
    /// determinant, stored at the transposed position.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedShape`] for non-square or empty matrices
    /// - [`Error::Singular`] if the determinant is epsilon-equal to zero
    ///
    /// # Example
    ///
    /// ```rust
    /// use rtk_math::{transform, Matrix};
    ///
    /// let m = transform::scaling(2.0, 4.0, 8.0);
    /// let inv = m.inverse().unwrap();
    /// assert!(m.multiply(&inv).unwrap().equal(&Matrix::identity(4)));
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant()?;
        if equal(determinant, 0.0) {
            return Err(Error::Singular { determinant });
        }
        if self.rows == 1 {
            return Ok(Self::from_rows([[1.0 / determinant]]));
        }

        let mut result = Self::new(self.rows, self.cols);
        for r in 0..self.rows {
            for c in 0..self.cols {
                // (c, r): adjugate is the transposed cofactor matrix
                result.data[c * self.cols + r] = self.cofactor(r, c)? / determinant;
            }
        }
        Ok(result)
    }

    /// Converts a 4x4 matrix to a [`glam::DMat4`]; `None` for other shapes.
    pub fn to_glam(&self) -> Option<glam::DMat4> {
        if self.shape() != (4, 4) {
            return None;
        }
        // glam is column-major
        let t = self.transpose();
        let mut cols = [0.0; 16];
        cols.copy_from_slice(&t.data);
        Some(glam::DMat4::from_cols_array(&cols))
    }

    /// Creates a 4x4 matrix from a [`glam::DMat4`].
    pub fn from_glam(m: glam::DMat4) -> Self {
        Self::from_rows(m.transpose().to_cols_array_2d())
    }

    fn require_square(&self, reason: &'static str) -> Result<()> {
        if self.is_empty() || !self.is_square() {
            return Err(Error::malformed(self.rows, self.cols, reason));
        }
        Ok(())
    }
}

impl ApproxEq for Matrix {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[r * self.cols + c]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let cells: Vec<String> = self.row(r).iter().map(|v| format!("{v:>10.5}")).collect();
            writeln!(f, "|{} |", cells.join(""))?;
        }
        Ok(())
    }
}
