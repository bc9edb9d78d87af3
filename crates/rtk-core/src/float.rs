//! Tolerant scalar equality.
//!
//! Every notion of "equal" in the kernel bottoms out in [`equal`]:
//! tuple and matrix comparison, point/vector classification and the
//! invertibility test all compare against [`EPSILON`].
//!
//! NaN never compares equal to anything, including itself.

/// Absolute tolerance used for all floating-point comparisons.
pub const EPSILON: f64 = 1e-5;

/// Returns true if `a` and `b` differ by strictly less than [`EPSILON`].
///
/// # Example
///
/// ```rust
/// use rtk_core::{equal, EPSILON};
///
/// assert!(equal(0.1 + 0.2, 0.3));
/// assert!(!equal(0.0, EPSILON));
/// ```
#[inline]
pub fn equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Epsilon-tolerant equality for compound values.
///
/// Implemented by tuples, matrices, rays and colors so that tests and
/// callers can compare any of them the same way.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Returns true if `self` and `other` are equal within [`EPSILON`].
    fn approx_eq(&self, other: &Rhs) -> bool;
}

impl ApproxEq for f64 {
    #[inline]
    fn approx_eq(&self, other: &f64) -> bool {
        equal(*self, *other)
    }
}

impl<T: ApproxEq> ApproxEq for [T] {
    fn approx_eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.approx_eq(b))
    }
}
