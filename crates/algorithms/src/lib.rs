#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! 2d path algorithms: containment testing, stroke outlining and bounds.
//!
//! This crate is reexported in [contour](https://docs.rs/contour/).
//!
//! # Examples
//!
//! ```
//! use contour_algorithms::hit_test::contains;
//! use contour_algorithms::stroke::{outline, LineCap, LineJoin};
//! use contour_algorithms::math::{point, Transform};
//! use contour_algorithms::path::{FillRule, Path};
//! use contour_algorithms::path::builder::PathBuilder;
//!
//! let mut builder = Path::builder();
//! builder.move_to(point(0.0, 0.0));
//! builder.line_to(point(10.0, 0.0));
//! let line = builder.build();
//!
//! let outline = outline(&line, 2.0, LineCap::Butt, LineJoin::Miter, 4.0, &Transform::identity());
//!
//! assert!(contains(point(5.0, 0.5), &outline, FillRule::NonZero, &Transform::identity()));
//! assert!(!contains(point(5.0, 1.5), &outline, FillRule::NonZero, &Transform::identity()));
//! ```

pub extern crate contour_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod aabb;
pub mod hit_test;
pub mod stroke;

pub use crate::path::geom;
pub use crate::path::math;
