//! # rtk-core
//!
//! Core types shared by every crate of the ray tracing kernel.
//!
//! - [`Error`] / [`Result`] - the failure taxonomy for tuple, matrix, ray
//!   and pixel buffer operations
//! - [`EPSILON`], [`equal`], [`ApproxEq`] - tolerant floating-point equality
//!
//! ## Crate Structure
//!
//! ```text
//! rtk-core (this crate)
//!    ^
//!    |
//!    +-- rtk-math (tuples, matrices, transforms, rays)
//!    +-- rtk-canvas (colors, pixel buffer, PPM)
//!    +-- rtk-cli (demo drivers)
//! ```
//!
//! Equality everywhere in the kernel means "within [`EPSILON`]":
//!
//! ```rust
//! use rtk_core::equal;
//!
//! assert!(equal(1.0, 1.000001));
//! assert!(!equal(1.0, 1.0001));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod float;

pub use error::*;
pub use float::*;

/// Prelude module for convenient imports.
///
/// ```
/// use rtk_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::float::{equal, ApproxEq, EPSILON};
}
