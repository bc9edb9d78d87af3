//! Error types for kernel operations.
//!
//! The [`Error`] enum covers every recoverable failure in the kernel:
//! - Point/vector domain rules (adding two points, dot product of a point)
//! - Matrix shape rules (multiplying incompatible shapes, determinant of a
//!   non-square matrix, inverting a singular matrix)
//! - Ray construction rules
//! - Pixel buffer bounds and PPM output
//!
//! Indexing a matrix out of range is not represented here: it is a logic
//! error in the caller and panics.
//!
//! # Usage
//!
//! ```rust
//! use rtk_core::{Error, Result};
//!
//! fn check_pixel(x: usize, y: usize, width: usize, height: usize) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_pixel(10, 0, 10, 10).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tuple, matrix, ray and canvas operations.
///
/// # Categories
///
/// - **Domain errors**: [`DomainViolation`](Error::DomainViolation),
///   [`ConstructionViolation`](Error::ConstructionViolation)
/// - **Shape errors**: [`DimensionMismatch`](Error::DimensionMismatch),
///   [`MalformedShape`](Error::MalformedShape), [`Singular`](Error::Singular)
/// - **Canvas errors**: [`OutOfBounds`](Error::OutOfBounds), [`Io`](Error::Io)
#[derive(Debug, Error)]
pub enum Error {
    /// A point/vector rule was broken by a tuple operation.
    ///
    /// Returned for point + point, vector - point, and dot or cross
    /// products with a point operand.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rtk_core::Error;
    ///
    /// let err = Error::domain("add", "cannot add two points");
    /// assert!(err.to_string().contains("add"));
    /// ```
    #[error("domain violation in {op}: {reason}")]
    DomainViolation {
        /// Operation that was attempted
        op: &'static str,
        /// What rule was broken
        reason: &'static str,
    },

    /// Matrix shapes are incompatible for multiplication.
    ///
    /// Multiplying an `a x b` matrix requires the right-hand side to
    /// have exactly `b` rows.
    #[error("dimension mismatch: {lhs_rows}x{lhs_cols} * {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        /// Left operand rows
        lhs_rows: usize,
        /// Left operand columns
        lhs_cols: usize,
        /// Right operand rows
        rhs_rows: usize,
        /// Right operand columns
        rhs_cols: usize,
    },

    /// The matrix has a zero determinant and cannot be inverted.
    #[error("matrix is singular (determinant {determinant})")]
    Singular {
        /// Determinant that was computed
        determinant: f64,
    },

    /// The operation is undefined for a matrix of this shape.
    ///
    /// Determinant, minor and cofactor require a non-empty square matrix;
    /// building a matrix from jagged rows is also rejected here.
    #[error("malformed {rows}x{cols} matrix: {reason}")]
    MalformedShape {
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
        /// Why the shape was rejected
        reason: &'static str,
    },

    /// A value was built from components of the wrong kind.
    ///
    /// Returned when a ray is given a non-point origin or a non-vector
    /// direction.
    #[error("construction violation: {0}")]
    ConstructionViolation(&'static str),

    /// Pixel coordinates are outside the canvas.
    #[error("pixel ({x}, {y}) out of bounds for canvas {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: usize,
        /// Y coordinate that was out of bounds
        y: usize,
        /// Canvas width
        width: usize,
        /// Canvas height
        height: usize,
    },

    /// I/O error while writing an image.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::DomainViolation`] error.
    #[inline]
    pub fn domain(op: &'static str, reason: &'static str) -> Self {
        Self::DomainViolation { op, reason }
    }

    /// Creates an [`Error::DimensionMismatch`] error from two shapes.
    #[inline]
    pub fn dimension_mismatch(lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            lhs_rows: lhs.0,
            lhs_cols: lhs.1,
            rhs_rows: rhs.0,
            rhs_cols: rhs.1,
        }
    }

    /// Creates an [`Error::MalformedShape`] error.
    #[inline]
    pub fn malformed(rows: usize, cols: usize, reason: &'static str) -> Self {
        Self::MalformedShape { rows, cols, reason }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    ///
    /// # Arguments
    ///
    /// * `x` - X coordinate that was accessed
    /// * `y` - Y coordinate that was accessed
    /// * `width` - Canvas width
    /// * `height` - Canvas height
    #[inline]
    pub fn out_of_bounds(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true for [`Error::DomainViolation`].
    pub fn is_domain_violation(&self) -> bool {
        matches!(self, Self::DomainViolation { .. })
    }

    /// Returns true for [`Error::DimensionMismatch`].
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }

    /// Returns true for [`Error::Singular`].
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Singular { .. })
    }

    /// Returns true for [`Error::MalformedShape`].
    pub fn is_malformed_shape(&self) -> bool {
        matches!(self, Self::MalformedShape { .. })
    }

    /// Returns true for [`Error::ConstructionViolation`].
    pub fn is_construction_violation(&self) -> bool {
        matches!(self, Self::ConstructionViolation(_))
    }

    /// Returns true for [`Error::OutOfBounds`].
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
