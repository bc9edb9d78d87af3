//! Affine transform builders.
//!
//! Each function returns a canonical 4x4 [`Matrix`]. Transforms compose by
//! matrix multiplication and apply right to left:
//!
//! ```text
//! c * b * a * p    // a first, then b, then c
//! ```
//!
//! [`Transform`] records steps in application order and multiplies them
//! in the right order for you.
//!
//! # Usage
//!
//! ```rust
//! use rtk_math::{transform, Tuple};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let p = Tuple::point(1.0, 0.0, 1.0);
//! let a = transform::rotation_x(FRAC_PI_2);
//! let b = transform::scaling(5.0, 5.0, 5.0);
//! let c = transform::translation(10.0, 5.0, 7.0);
//!
//! let t = c.multiply(&b).unwrap().multiply(&a).unwrap();
//! assert!(t.multiply_tuple(p).unwrap().equal(&Tuple::point(15.0, 0.0, 7.0)));
//! ```

use crate::{Matrix, Tuple};
use rtk_core::{Error, Result};

/// 4x4 identity.
pub fn identity() -> Matrix {
    Matrix::identity(4)
}

/// Moves points by `(x, y, z)`; vectors are unaffected.
pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::from_rows([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Scales each axis independently. A negative factor reflects.
pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::from_rows([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotates about the X axis by `radians` (y toward z).
pub fn rotation_x(radians: f64) -> Matrix {
    let (sin, cos) = radians.sin_cos();
    Matrix::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, -sin, 0.0],
        [0.0, sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotates about the Y axis by `radians` (z toward x).
pub fn rotation_y(radians: f64) -> Matrix {
    let (sin, cos) = radians.sin_cos();
    Matrix::from_rows([
        [cos, 0.0, sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotates about the Z axis by `radians` (x toward y).
pub fn rotation_z(radians: f64) -> Matrix {
    let (sin, cos) = radians.sin_cos();
    Matrix::from_rows([
        [cos, -sin, 0.0, 0.0],
        [sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Shears each coordinate in proportion to the other two.
///
/// `xy` moves x in proportion to y, `xz` moves x in proportion to z,
/// and so on.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
    Matrix::from_rows([
        [1.0, xy, xz, 0.0],
        [yx, 1.0, yz, 0.0],
        [zx, zy, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// A chain of transforms listed in the order they apply.
///
/// # Example
///
/// ```rust
/// use rtk_math::{transform::Transform, Tuple};
/// use std::f64::consts::FRAC_PI_2;
///
/// let t = Transform::new()
///     .rotate_x(FRAC_PI_2)
///     .scale(5.0, 5.0, 5.0)
///     .translate(10.0, 5.0, 7.0);
///
/// let p = t.apply(Tuple::point(1.0, 0.0, 1.0)).unwrap();
/// assert!(p.equal(&Tuple::point(15.0, 0.0, 7.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    matrix: Matrix,
}

impl Transform {
    /// Empty chain (identity).
    pub fn new() -> Self {
        Self { matrix: identity() }
    }

    /// Appends an arbitrary 4x4 step.
    ///
    /// # Errors
    ///
    /// [`rtk_core::Error::DimensionMismatch`] if `step` is not 4x4.
    pub fn then(self, step: &Matrix) -> Result<Self> {
        if step.shape() != (4, 4) {
            return Err(Error::dimension_mismatch(step.shape(), (4, 4)));
        }
        Ok(Self {
            matrix: step.multiply(&self.matrix)?,
        })
    }

    // Builder steps are always 4x4.
    fn push(self, step: Matrix) -> Self {
        match self.then(&step) {
            Ok(chain) => chain,
            Err(e) => unreachable!("builder step is not 4x4: {e}"),
        }
    }

    /// Appends a rotation about X.
    pub fn rotate_x(self, radians: f64) -> Self {
        self.push(rotation_x(radians))
    }

    /// Appends a rotation about Y.
    pub fn rotate_y(self, radians: f64) -> Self {
        self.push(rotation_y(radians))
    }

    /// Appends a rotation about Z.
    pub fn rotate_z(self, radians: f64) -> Self {
        self.push(rotation_z(radians))
    }

    /// Appends a scaling.
    pub fn scale(self, x: f64, y: f64, z: f64) -> Self {
        self.push(scaling(x, y, z))
    }

    /// Appends a translation.
    pub fn translate(self, x: f64, y: f64, z: f64) -> Self {
        self.push(translation(x, y, z))
    }

    /// Appends a shear.
    pub fn shear(self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        self.push(shearing(xy, xz, yx, yz, zx, zy))
    }

    /// The composed matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Consumes the chain, returning the composed matrix.
    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Applies the chain to a tuple.
    pub fn apply(&self, t: Tuple) -> Result<Tuple> {
        self.matrix.multiply_tuple(t)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Transform> for Matrix {
    fn from(t: Transform) -> Self {
        t.into_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};

    const HALF_SQRT_2: f64 = SQRT_2 / 2.0;

    #[test]
    fn test_translation() {
        let transform = translation(5.0, -3.0, 2.0);
        let p = Tuple::point(-3.0, 4.0, 5.0);
        assert_eq!(transform.multiply_tuple(p).unwrap(), Tuple::point(2.0, 1.0, 7.0));

        let inv = transform.inverse().unwrap();
        assert!(inv.multiply_tuple(p).unwrap().equal(&Tuple::point(-8.0, 7.0, 3.0)));

        let v = Tuple::vector(-3.0, 4.0, 5.0);
        assert_eq!(transform.multiply_tuple(v).unwrap(), v);
    }

    #[test]
    fn test_scaling() {
        let transform = scaling(2.0, 3.0, 4.0);
        let p = Tuple::point(-4.0, 6.0, 8.0);
        assert_eq!(transform.multiply_tuple(p).unwrap(), Tuple::point(-8.0, 18.0, 32.0));

        let v = Tuple::vector(-4.0, 6.0, 8.0);
        assert_eq!(transform.multiply_tuple(v).unwrap(), Tuple::vector(-8.0, 18.0, 32.0));

        let inv = transform.inverse().unwrap();
        assert!(inv.multiply_tuple(v).unwrap().equal(&Tuple::vector(-2.0, 2.0, 2.0)));
    }

    #[test]
    fn test_reflection() {
        let transform = scaling(-1.0, 1.0, 1.0);
        let p = Tuple::point(2.0, 3.0, 4.0);
        assert_eq!(transform.multiply_tuple(p).unwrap(), Tuple::point(-2.0, 3.0, 4.0));
    }

    #[test]
    fn test_rotation_x() {
        let p = Tuple::point(0.0, 1.0, 0.0);
        let half_quarter = rotation_x(FRAC_PI_4);
        let full_quarter = rotation_x(FRAC_PI_2);

        let hq = half_quarter.multiply_tuple(p).unwrap();
        assert!(hq.equal(&Tuple::point(0.0, HALF_SQRT_2, HALF_SQRT_2)));
        let fq = full_quarter.multiply_tuple(p).unwrap();
        assert!(fq.equal(&Tuple::point(0.0, 0.0, 1.0)));

        let inv = half_quarter.inverse().unwrap();
        let back = inv.multiply_tuple(p).unwrap();
        assert!(back.equal(&Tuple::point(0.0, HALF_SQRT_2, -HALF_SQRT_2)));
    }

    #[test]
    fn test_rotation_y() {
        let p = Tuple::point(0.0, 0.0, 1.0);
        let hq = rotation_y(FRAC_PI_4).multiply_tuple(p).unwrap();
        assert!(hq.equal(&Tuple::point(HALF_SQRT_2, 0.0, HALF_SQRT_2)));
        let fq = rotation_y(FRAC_PI_2).multiply_tuple(p).unwrap();
        assert!(fq.equal(&Tuple::point(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rotation_z() {
        let p = Tuple::point(0.0, 1.0, 0.0);
        let hq = rotation_z(FRAC_PI_4).multiply_tuple(p).unwrap();
        assert!(hq.equal(&Tuple::point(-HALF_SQRT_2, HALF_SQRT_2, 0.0)));
        let fq = rotation_z(FRAC_PI_2).multiply_tuple(p).unwrap();
        assert!(fq.equal(&Tuple::point(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_shearing_each_axis() {
        let p = Tuple::point(2.0, 3.0, 4.0);
        let cases = [
            ([1.0, 0.0, 0.0, 0.0, 0.0, 0.0], Tuple::point(5.0, 3.0, 4.0)),
            ([0.0, 1.0, 0.0, 0.0, 0.0, 0.0], Tuple::point(6.0, 3.0, 4.0)),
            ([0.0, 0.0, 1.0, 0.0, 0.0, 0.0], Tuple::point(2.0, 5.0, 4.0)),
            ([0.0, 0.0, 0.0, 1.0, 0.0, 0.0], Tuple::point(2.0, 7.0, 4.0)),
            ([0.0, 0.0, 0.0, 0.0, 1.0, 0.0], Tuple::point(2.0, 3.0, 6.0)),
            ([0.0, 0.0, 0.0, 0.0, 0.0, 1.0], Tuple::point(2.0, 3.0, 7.0)),
        ];
        for ([xy, xz, yx, yz, zx, zy], expected) in cases {
            let res = shearing(xy, xz, yx, yz, zx, zy).multiply_tuple(p).unwrap();
            assert_eq!(res, expected);
        }
    }

    #[test]
    fn test_individual_transformations_in_sequence() {
        let p = Tuple::point(1.0, 0.0, 1.0);
        let a = rotation_x(FRAC_PI_2);
        let b = scaling(5.0, 5.0, 5.0);
        let c = translation(10.0, 5.0, 7.0);

        let p2 = a.multiply_tuple(p).unwrap();
        assert!(p2.equal(&Tuple::point(1.0, -1.0, 0.0)));
        let p3 = b.multiply_tuple(p2).unwrap();
        assert!(p3.equal(&Tuple::point(5.0, -5.0, 0.0)));
        let p4 = c.multiply_tuple(p3).unwrap();
        assert!(p4.equal(&Tuple::point(15.0, 0.0, 7.0)));
    }

    #[test]
    fn test_chained_transformations_apply_right_to_left() {
        let p = Tuple::point(1.0, 0.0, 1.0);
        let a = rotation_x(FRAC_PI_2);
        let b = scaling(5.0, 5.0, 5.0);
        let c = translation(10.0, 5.0, 7.0);

        let t = c.multiply(&b).unwrap().multiply(&a).unwrap();
        assert!(t.multiply_tuple(p).unwrap().equal(&Tuple::point(15.0, 0.0, 7.0)));
    }

    #[test]
    fn test_builder_matches_manual_composition() {
        let manual = translation(10.0, 5.0, 7.0)
            .multiply(&scaling(5.0, 5.0, 5.0))
            .unwrap()
            .multiply(&rotation_x(FRAC_PI_2))
            .unwrap();
        let built = Transform::new()
            .rotate_x(FRAC_PI_2)
            .scale(5.0, 5.0, 5.0)
            .translate(10.0, 5.0, 7.0);
        assert!(built.matrix().equal(&manual));
        assert_eq!(Transform::default().into_matrix(), identity());
    }

    #[test]
    fn test_builder_then() {
        let t = Transform::new().then(&scaling(2.0, 2.0, 2.0)).unwrap();
        let p = t.apply(Tuple::point(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(p, Tuple::point(2.0, 4.0, 6.0));
        assert!(Transform::new().then(&Matrix::identity(3)).is_err());

        for (rows, cols) in [(3, 4), (5, 4), (4, 5)] {
            let err = Transform::new().then(&Matrix::new(rows, cols)).unwrap_err();
            assert!(err.is_dimension_mismatch());
        }
        let chain = Transform::new()
            .then(&translation(1.0, 0.0, 0.0))
            .unwrap()
            .rotate_x(1.0);
        assert_eq!(chain.matrix().shape(), (4, 4));
    }

    #[test]
    fn test_builder_shear_and_rotate_yz() {
        let t = Transform::new()
            .shear(1.0, 0.0, 0.0, 0.0, 0.0, 0.0)
            .rotate_y(FRAC_PI_2)
            .rotate_z(FRAC_PI_2);
        let manual = rotation_z(FRAC_PI_2)
            .multiply(&rotation_y(FRAC_PI_2))
            .unwrap()
            .multiply(&shearing(1.0, 0.0, 0.0, 0.0, 0.0, 0.0))
            .unwrap();
        assert!(Matrix::from(t).equal(&manual));
    }
}
