//! Owned pixel grid.
//!
//! [`Canvas`] is a `width x height` buffer of [`Color`] values, initially
//! black. Reads and writes are bounds-checked the same way: coordinates
//! outside the grid return [`Error::OutOfBounds`] rather than being
//! clamped or ignored.
//!
//! # Usage
//!
//! ```rust
//! use rtk_canvas::{Canvas, Color};
//!
//! let mut canvas = Canvas::new(10, 20);
//! canvas.write_pixel(2, 3, Color::RED).unwrap();
//! assert_eq!(canvas.pixel_at(2, 3).unwrap(), Color::RED);
//! assert!(canvas.write_pixel(10, 0, Color::RED).is_err());
//! ```

use crate::Color;
use rtk_core::{Error, Result};
use tracing::{debug, trace};

/// A rectangular grid of colors, stored row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a black canvas.
    pub fn new(width: usize, height: usize) -> Self {
        debug!(width, height, "Creating canvas");
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if `(x, y)` lies on the canvas.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if !self.contains(x, y) {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        Ok(y * self.width + x)
    }

    /// Writes one pixel.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if `(x, y)` is off the canvas.
    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        let i = self.index(x, y)?;
        trace!(x, y, r = color.r(), g = color.g(), b = color.b(), "write_pixel");
        self.pixels[i] = color;
        Ok(())
    }

    /// Reads one pixel.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if `(x, y)` is off the canvas.
    pub fn pixel_at(&self, x: usize, y: usize) -> Result<Color> {
        Ok(self.pixels[self.index(x, y)?])
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Pixel row `y`, left to right.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row(&self, y: usize) -> &[Color] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_canvas() {
        let c = Canvas::new(10, 20);
        assert_eq!(c.width(), 10);
        assert_eq!(c.height(), 20);
        assert!(c.pixels().iter().all(|p| *p == Color::BLACK));
    }

    #[test]
    fn test_write_and_read_pixel() {
        let mut c = Canvas::new(10, 20);
        assert_eq!(c.pixel_at(2, 3).unwrap(), Color::BLACK);

        c.write_pixel(2, 3, Color::RED).unwrap();
        assert_eq!(c.pixel_at(2, 3).unwrap(), Color::RED);
        assert_eq!(c.row(3)[2], Color::RED);
    }

    #[test]
    fn test_bounds_are_checked_uniformly() {
        let mut c = Canvas::new(10, 20);
        assert!(c.write_pixel(10, 0, Color::RED).unwrap_err().is_out_of_bounds());
        assert!(c.write_pixel(0, 20, Color::RED).unwrap_err().is_out_of_bounds());
        assert!(c.pixel_at(10, 0).unwrap_err().is_out_of_bounds());
        assert!(c.pixel_at(0, 20).unwrap_err().is_out_of_bounds());
        assert!(c.pixels().iter().all(|p| *p == Color::BLACK));
    }

    #[test]
    fn test_fill() {
        let mut c = Canvas::new(3, 2);
        c.fill(Color::WHITE);
        assert!(c.pixels().iter().all(|p| *p == Color::WHITE));
    }

    #[test]
    fn test_empty_canvas() {
        let c = Canvas::new(0, 0);
        assert!(c.pixels().is_empty());
        assert!(c.pixel_at(0, 0).is_err());
    }
}
