#![deny(bare_trait_objects)]

//! 2D vector path construction, flattening, hit testing and stroke outlining.
//!
//! # Crates
//!
//! This meta-crate (`contour`) reexports the following sub-crates for convenience:
//!
//! * **contour_path** - Tools to build, store and iterate over paths.
//! * **contour_algorithms** - Containment testing, stroke outlines and bounds.
//! * **contour_geom** - Quadratic and cubic bézier curves, arcs and their flattening.
//!
//! Each `contour_<name>` crate is reexported as a `<name>` module in `contour`.
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ```
//! use contour::math::{point, rect, Transform};
//! use contour::path::{FillRule, Path};
//! use contour::path::builder::PathBuilder;
//! use contour::algorithms::hit_test::contains;
//! use contour::algorithms::stroke::{outline, LineCap, LineJoin};
//!
//! // Build a path.
//! let mut builder = Path::builder();
//! builder.add_rounded_rect(&rect(0.0, 0.0, 100.0, 50.0), 10.0, 10.0);
//! builder.move_to(point(20.0, 25.0));
//! builder.line_to(point(80.0, 25.0));
//! let path = builder.build();
//!
//! // Hand it over to a renderer, one command at a time.
//! path.enumerate(|element| {
//!     println!("{:?} {:?}", element.kind, element.points);
//! });
//!
//! // Hit testing.
//! let identity = Transform::identity();
//! assert!(contains(point(50.0, 10.0), &path, FillRule::NonZero, &identity));
//! assert!(!contains(point(1.0, 1.0), &path, FillRule::NonZero, &identity));
//!
//! // The area covered by a stroke, as a path that can be filled.
//! let stroke = outline(&path, 2.0, LineCap::Round, LineJoin::Round, 4.0, &identity);
//! assert!(contains(point(50.0, 0.5), &stroke, FillRule::NonZero, &identity));
//! ```

pub extern crate contour_algorithms;

pub use contour_algorithms as algorithms;
pub use algorithms::geom;
pub use algorithms::path;

pub use path::math;
