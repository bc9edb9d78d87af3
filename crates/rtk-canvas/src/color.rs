//! RGB color built on tuple arithmetic.
//!
//! [`Color`] wraps a vector [`Tuple`] and forwards channel reads and
//! arithmetic to it. Point/vector predicates stay hidden: a color is
//! never a point.
//!
//! # Usage
//!
//! ```rust
//! use rtk_canvas::Color;
//!
//! let c1 = Color::new(1.0, 0.2, 0.4);
//! let c2 = Color::new(0.9, 1.0, 0.1);
//! assert!((c1 * c2).equal(&Color::new(0.9, 0.2, 0.04)));
//! ```

use rtk_core::ApproxEq;
use rtk_math::Tuple;
use std::ops::{Add, Mul, Sub};

/// Largest channel value written to a PPM file.
pub const MAX_CHANNEL: u8 = 255;

/// An RGB color with unbounded `f64` channels.
///
/// Channels are nominally in `[0, 1]` but may leave that range during
/// intermediate math; they are clamped only on output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    rgb: Tuple,
}

impl Color {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Red (1, 0, 0).
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    /// Creates a color from channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            rgb: Tuple::vector(r, g, b),
        }
    }

    /// Red channel.
    #[inline]
    pub fn r(&self) -> f64 {
        self.rgb.x
    }

    /// Green channel.
    #[inline]
    pub fn g(&self) -> f64 {
        self.rgb.y
    }

    /// Blue channel.
    #[inline]
    pub fn b(&self) -> f64 {
        self.rgb.z
    }

    /// Returns true if every channel is epsilon-equal.
    #[inline]
    pub fn equal(&self, other: &Self) -> bool {
        self.rgb.equal(&other.rgb)
    }

    /// Channel-wise sum.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self {
            rgb: self.rgb.zip_with(other.rgb, |a, b| a + b),
        }
    }

    /// Channel-wise difference.
    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        Self {
            rgb: self.rgb.zip_with(other.rgb, |a, b| a - b),
        }
    }

    /// Multiplies every channel by `scalar`.
    #[inline]
    pub fn scale(self, scalar: f64) -> Self {
        Self {
            rgb: self.rgb.scale(scalar),
        }
    }

    /// Hadamard (channel-wise) product, used to blend colors.
    #[inline]
    pub fn multiply(self, other: Self) -> Self {
        Self {
            rgb: self.rgb.zip_with(other.rgb, |a, b| a * b),
        }
    }

    /// Channels as 8-bit values: `round(c * 255)` clamped to `0..=255`.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [to_byte(self.r()), to_byte(self.g()), to_byte(self.b())]
    }
}

fn to_byte(c: f64) -> u8 {
    let max = f64::from(MAX_CHANNEL);
    // NaN lands on 0 through the saturating cast
    (c * max).round().clamp(0.0, max) as u8
}

impl ApproxEq for Color {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Add for Color {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Color::add(self, rhs)
    }
}

impl Sub for Color {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_channels() {
        let c = Color::new(-0.5, 0.4, 1.7);
        assert_eq!(c.r(), -0.5);
        assert_eq!(c.g(), 0.4);
        assert_eq!(c.b(), 1.7);
    }

    #[test]
    fn test_add() {
        let c1 = Color::new(0.9, 0.6, 0.75);
        let c2 = Color::new(0.7, 0.1, 0.25);
        assert!(c1.add(c2).equal(&Color::new(1.6, 0.7, 1.0)));
        assert!((c1 + c2).equal(&Color::new(1.6, 0.7, 1.0)));
    }

    #[test]
    fn test_subtract() {
        let c1 = Color::new(0.9, 0.6, 0.75);
        let c2 = Color::new(0.7, 0.1, 0.25);
        assert!(c1.subtract(c2).equal(&Color::new(0.2, 0.5, 0.5)));
        assert!((c1 - c2).approx_eq(&Color::new(0.2, 0.5, 0.5)));
    }

    #[test]
    fn test_scale() {
        let c = Color::new(0.2, 0.3, 0.4);
        assert!(c.scale(2.0).equal(&Color::new(0.4, 0.6, 0.8)));
        assert!((c * 2.0).equal(&Color::new(0.4, 0.6, 0.8)));
    }

    #[test]
    fn test_hadamard() {
        let c1 = Color::new(1.0, 0.2, 0.4);
        let c2 = Color::new(0.9, 1.0, 0.1);
        assert!(c1.multiply(c2).equal(&Color::new(0.9, 0.2, 0.04)));

        let product = c1 * c2;
        assert_abs_diff_eq!(product.r(), 0.9, epsilon = 1e-12);
        assert_abs_diff_eq!(product.g(), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(product.b(), 0.04, epsilon = 1e-12);
    }

    #[test]
    fn test_to_rgb8_clamps() {
        assert_eq!(Color::new(1.5, 0.0, 0.0).to_rgb8(), [255, 0, 0]);
        assert_eq!(Color::new(0.0, 0.5, 0.0).to_rgb8(), [0, 128, 0]);
        assert_eq!(Color::new(-0.5, 0.0, 1.0).to_rgb8(), [0, 0, 255]);
        assert_eq!(Color::new(f64::NAN, 0.0, 0.0).to_rgb8(), [0, 0, 0]);
    }
}
