//! Rays: an origin point plus a direction vector.

use crate::{Matrix, Tuple};
use rtk_core::{ApproxEq, Error, Result};

/// A half-line starting at `origin` and heading along `direction`.
///
/// Construction is validated: the origin must classify as a point and the
/// direction as a vector.
///
/// # Example
///
/// ```rust
/// use rtk_math::{Ray, Tuple};
///
/// let r = Ray::new(Tuple::point(2.0, 3.0, 4.0), Tuple::vector(1.0, 0.0, 0.0)).unwrap();
/// assert_eq!(r.position(2.5), Tuple::point(4.5, 3.0, 4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Tuple,
    direction: Tuple,
}

impl Ray {
    /// Creates a ray.
    ///
    /// # Errors
    ///
    /// [`Error::ConstructionViolation`] if `origin` is not a point or
    /// `direction` is not a vector.
    pub fn new(origin: Tuple, direction: Tuple) -> Result<Self> {
        if !origin.is_point() {
            return Err(Error::ConstructionViolation("origin must be a point"));
        }
        if !direction.is_vector() {
            return Err(Error::ConstructionViolation("direction must be a vector"));
        }
        Ok(Self { origin, direction })
    }

    /// Starting point.
    #[inline]
    pub fn origin(&self) -> Tuple {
        self.origin
    }

    /// Direction of travel; not necessarily unit length.
    #[inline]
    pub fn direction(&self) -> Tuple {
        self.direction
    }

    /// Point at parameter `t`: `origin + direction * t`.
    ///
    /// Linear in `t`; `position(0.0)` is exactly the origin.
    pub fn position(&self, t: f64) -> Tuple {
        // point + vector never breaks the domain rules
        self.origin.zip_with(self.direction.scale(t), |a, b| a + b)
    }

    /// Applies `m` to both origin and direction.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `m` is not 4x4, or
    /// [`Error::ConstructionViolation`] if `m` breaks the point/vector
    /// classification (a non-affine bottom row).
    pub fn transform(&self, m: &Matrix) -> Result<Self> {
        Self::new(m.multiply_tuple(self.origin)?, m.multiply_tuple(self.direction)?)
    }
}

impl ApproxEq for Ray {
    fn approx_eq(&self, other: &Self) -> bool {
        self.origin.equal(&other.origin) && self.direction.equal(&other.direction)
    }
}
