//! Homogeneous 4-component tuple for points and vectors.
//!
//! A [`Tuple`] is a point when `w` is 1 and a vector when `w` is 0.
//! Both kinds share one type because arithmetic mixes them freely
//! (point - point is a vector, point + vector is a point); the kind is a
//! runtime classification, checked by the operations that care.
//!
//! # Domain rules
//!
//! | Operation            | Fails when                  |
//! |----------------------|-----------------------------|
//! | [`Tuple::add`]       | both operands are points    |
//! | [`Tuple::subtract`]  | a point is taken from a vector |
//! | [`Tuple::dot`]       | either operand is a point   |
//! | [`Tuple::cross`]     | either operand is a point   |
//!
//! # Usage
//!
//! ```rust
//! use rtk_math::Tuple;
//!
//! let p = Tuple::point(3.0, 2.0, 1.0);
//! let q = Tuple::point(5.0, 6.0, 7.0);
//!
//! let d = p.subtract(q).unwrap();
//! assert!(d.is_vector());
//! assert!(p.add(q).is_err());
//! ```

use rtk_core::{equal, ApproxEq, Error, Result};
use std::fmt;
use std::ops::{Div, Index, Mul, Neg};

const POINT_W: f64 = 1.0;
const VECTOR_W: f64 = 0.0;

/// A homogeneous coordinate `(x, y, z, w)`.
///
/// `PartialEq` is exact bitwise comparison of the four fields; use
/// [`Tuple::equal`] for the epsilon-tolerant comparison.
///
/// # Example
///
/// ```rust
/// use rtk_math::Tuple;
///
/// let t = Tuple::new(4.3, -4.2, 3.1, 1.0);
/// assert!(t.is_point());
/// assert_eq!(t[1], -4.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tuple {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
    /// Homogeneous component (1 for points, 0 for vectors)
    pub w: f64,
}

impl Tuple {
    /// The zero vector.
    pub const ZERO: Self = Self::vector(0.0, 0.0, 0.0);

    /// The origin point.
    pub const ORIGIN: Self = Self::point(0.0, 0.0, 0.0);

    /// Creates a tuple from four components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a point (`w = 1`).
    #[inline]
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, POINT_W)
    }

    /// Creates a vector (`w = 0`).
    #[inline]
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, VECTOR_W)
    }

    /// Creates from an `[x, y, z, w]` array.
    #[inline]
    pub const fn from_array(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an `[x, y, z, w]` array.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Returns true if `w` is epsilon-equal to 1.
    #[inline]
    pub fn is_point(&self) -> bool {
        equal(self.w, POINT_W)
    }

    /// Returns true if `w` is epsilon-equal to 0.
    #[inline]
    pub fn is_vector(&self) -> bool {
        equal(self.w, VECTOR_W)
    }

    /// Returns true if all four components are epsilon-equal.
    pub fn equal(&self, other: &Self) -> bool {
        equal(self.x, other.x)
            && equal(self.y, other.y)
            && equal(self.z, other.z)
            && equal(self.w, other.w)
    }

    /// Combines two tuples component by component, without domain checks.
    ///
    /// ```rust
    /// use rtk_math::Tuple;
    ///
    /// let a = Tuple::vector(1.0, 2.0, 3.0);
    /// let b = Tuple::vector(4.0, 5.0, 6.0);
    /// let max = a.zip_with(b, f64::max);
    /// assert_eq!(max, b);
    /// ```
    #[inline]
    pub fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(
            f(self.x, other.x),
            f(self.y, other.y),
            f(self.z, other.z),
            f(self.w, other.w),
        )
    }

    /// Applies `f` to all four components.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    /// Component-wise sum.
    ///
    /// # Errors
    ///
    /// [`Error::DomainViolation`] if both operands are points; the result
    /// would have `w = 2`, which is neither a point nor a vector.
    pub fn add(self, other: Self) -> Result<Self> {
        if self.is_point() && other.is_point() {
            return Err(Error::domain("add", "cannot add two points"));
        }
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Component-wise difference.
    ///
    /// point - point gives a vector, point - vector gives a point and
    /// vector - vector gives a vector.
    ///
    /// # Errors
    ///
    /// [`Error::DomainViolation`] if `self` is a vector and `other` is a
    /// point (the result would have `w = -1`).
    pub fn subtract(self, other: Self) -> Result<Self> {
        if self.is_vector() && other.is_point() {
            return Err(Error::domain("subtract", "cannot subtract a point from a vector"));
        }
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Negates all four components, `w` included. Never fails.
    #[inline]
    pub fn negate(self) -> Self {
        self.map(|v| -v)
    }

    /// Multiplies all four components by `scalar`.
    #[inline]
    pub fn scale(self, scalar: f64) -> Self {
        self.map(|v| v * scalar)
    }

    /// Divides all four components by `scalar`.
    ///
    /// Division by zero follows IEEE rules (infinities or NaN).
    #[inline]
    pub fn divide(self, scalar: f64) -> Self {
        self.map(|v| v / scalar)
    }

    /// Euclidean length over all four components.
    ///
    /// Only meaningful for vectors.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Scales the tuple to unit length.
    ///
    /// A zero-length tuple produces NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        self.divide(self.magnitude())
    }

    /// Dot product of two vectors.
    ///
    /// The smaller the dot product, the larger the angle between the
    /// vectors; for unit vectors it is the cosine of that angle.
    ///
    /// # Errors
    ///
    /// [`Error::DomainViolation`] if either operand is a point.
    pub fn dot(self, other: Self) -> Result<f64> {
        if self.is_point() || other.is_point() {
            return Err(Error::domain("dot", "cannot take the dot product of a point"));
        }
        Ok(self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w)
    }

    /// Cross product of two vectors, perpendicular to both.
    ///
    /// `w` is ignored by the formula; the result is always a vector.
    ///
    /// # Errors
    ///
    /// [`Error::DomainViolation`] if either operand is a point.
    pub fn cross(self, other: Self) -> Result<Self> {
        if self.is_point() || other.is_point() {
            return Err(Error::domain("cross", "cannot take the cross product of a point"));
        }
        Ok(Self::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        ))
    }

    /// Converts to a [`glam::DVec4`].
    #[inline]
    pub fn to_glam(self) -> glam::DVec4 {
        glam::DVec4::new(self.x, self.y, self.z, self.w)
    }

    /// Creates from a [`glam::DVec4`].
    #[inline]
    pub fn from_glam(v: glam::DVec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl ApproxEq for Tuple {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "point({}, {}, {})", self.x, self.y, self.z)
        } else if self.is_vector() {
            write!(f, "vector({}, {}, {})", self.x, self.y, self.z)
        } else {
            write!(f, "tuple({}, {}, {}, {})", self.x, self.y, self.z, self.w)
        }
    }
}

impl Neg for Tuple {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<f64> for Tuple {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Div<f64> for Tuple {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        self.divide(rhs)
    }
}

impl Index<usize> for Tuple {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("tuple index {i} out of range 0..4"),
        }
    }
}

impl From<[f64; 4]> for Tuple {
    fn from(a: [f64; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Tuple> for [f64; 4] {
    fn from(t: Tuple) -> Self {
        t.to_array()
    }
}
