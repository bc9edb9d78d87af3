//! # rtk-math
//!
//! Geometry kernel for the ray tracer.
//!
//! - [`Tuple`] - homogeneous `(x, y, z, w)` points and vectors
//! - [`Matrix`] - dynamically sized matrix with determinant and inverse
//! - [`transform`] - translation, scaling, rotation and shearing builders
//! - [`Ray`] - origin + direction with parametric positions
//!
//! # Design
//!
//! All types are immutable values; every operation returns a new value.
//! Operations whose result would break the point/vector rules, or whose
//! operand shapes do not fit, return [`rtk_core::Error`] instead of a
//! silently wrong value.
//!
//! Matrices are **row-major** and tuples are **column vectors**:
//!
//! ```text
//! result = matrix * tuple
//! ```
//!
//! # Usage
//!
//! ```rust
//! use rtk_math::{transform, Ray, Tuple};
//! use std::f64::consts::PI;
//!
//! let twelve = Tuple::point(0.0, 0.0, 1.0);
//! let three = transform::rotation_y(PI / 2.0).multiply_tuple(twelve).unwrap();
//! assert!(three.equal(&Tuple::point(1.0, 0.0, 0.0)));
//!
//! let ray = Ray::new(Tuple::point(0.0, 0.0, 0.0), three.subtract(Tuple::ORIGIN).unwrap()).unwrap();
//! assert!(ray.position(2.0).equal(&Tuple::point(2.0, 0.0, 0.0)));
//! ```
//!
//! # Dependencies
//!
//! - `rtk-core` - errors and scalar equality
//! - [`glam`] - conversions to and from `DVec4` / `DMat4`
//!
//! # Used By
//!
//! - `rtk-canvas` - colors reuse tuple arithmetic
//! - `rtk-cli` - demo drivers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod matrix;
mod ray;
pub mod transform;
mod tuple;

pub use matrix::*;
pub use ray::*;
pub use transform::Transform;
pub use tuple::*;

pub use rtk_core::{equal, ApproxEq, Error, Result, EPSILON};
