//! # rtk-canvas
//!
//! Pixel output for the ray tracing kernel.
//!
//! - [`Color`] - RGB triple reusing tuple arithmetic, plus the Hadamard product
//! - [`Canvas`] - owned, bounds-checked pixel grid
//! - [`ppm`] - plain PPM (P3) encoding
//!
//! The canvas only ever receives final integer coordinates and colors;
//! all geometry happens in `rtk-math`.
//!
//! # Usage
//!
//! ```rust
//! use rtk_canvas::{Canvas, Color};
//!
//! let mut canvas = Canvas::new(3, 1);
//! canvas.write_pixel(1, 0, Color::WHITE).unwrap();
//! assert!(canvas.to_ppm().starts_with("P3\n3 1\n255\n"));
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - encode PPM rows with rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod canvas;
mod color;
pub mod ppm;

pub use canvas::*;
pub use color::*;

pub use rtk_core::{Error, Result};
