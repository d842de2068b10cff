//! Convert strokes into fillable outlines.
//!
//! The outline of a stroke is a path whose interior, filled with the non-zero rule,
//! covers the area painted by the stroke. Curves are flattened with a fixed number of
//! steps and joins are approximated:
//!
//! - `Miter` and `Bevel` joins connect the two offset points of the adjacent segments
//!   directly, without computing the miter intersection.
//! - `Round` joins add a single point in the direction of the averaged normals.
//!
//! Open sub-paths produce one closed outline going along the left side, around the
//! end cap, back along the right side and around the start cap. Closed sub-paths
//! produce two loops, the right one reversed so that the inside of the original
//! sub-path is left out.
//!
//! Closed sub-paths are offset as a cycle, with a join at the start vertex like at any
//! other vertex. With `Round` joins this adds a point there that an open polyline
//! returning to its start would not have.
//!
//! # Examples
//!
//! ```
//! use contour_algorithms::stroke::{outline_with_style, LineCap, StrokeStyle};
//! use contour_algorithms::math::{point, rect, Transform};
//! use contour_algorithms::path::Path;
//! use contour_algorithms::path::builder::PathBuilder;
//!
//! let mut builder = Path::builder();
//! builder.move_to(point(0.0, 0.0));
//! builder.line_to(point(10.0, 0.0));
//! let path = builder.build();
//!
//! let style = StrokeStyle::DEFAULT.with_line_width(2.0);
//! let outline = outline_with_style(&path, &style, &Transform::identity());
//! assert_eq!(outline.is_rectangle(), Some(rect(0.0, -1.0, 10.0, 2.0)));
//! ```

use crate::geom::{Flattening, LineSegment};
use crate::math::{vector, Point, Transform, Vector};
use crate::path::builder::{Builder, PathBuilder};
use crate::path::{Path, PathEvent};

use std::f64::consts::PI;

/// Number of segments approximating a round cap.
pub const ROUND_CAP_STEPS: u32 = 8;

/// Line cap as defined by the SVG specification.
///
/// See: <https://svgwg.org/specs/strokes/#StrokeLinecapProperty>
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineCap {
    /// The stroke ends at the end points of the sub-path.
    Butt,
    /// A half circle centered on the end points.
    Round,
    /// The stroke extends past the end points by half of the line width.
    Square,
}

/// Line join as defined by the SVG specification.
///
/// See: <https://svgwg.org/specs/strokes/#StrokeLinejoinProperty>
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Parameters of the stroke outline.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct StrokeStyle {
    /// Line width.
    ///
    /// Default value: `StrokeStyle::DEFAULT_LINE_WIDTH`.
    pub line_width: f64,

    /// Cap used at both ends of open sub-paths.
    ///
    /// Default value: `LineCap::Butt`.
    pub line_cap: LineCap,

    /// Default value: `LineJoin::Miter`.
    pub line_join: LineJoin,

    /// See the SVG specification. Joins are approximated and the limit is not enforced.
    ///
    /// Default value: `StrokeStyle::DEFAULT_MITER_LIMIT`.
    pub miter_limit: f64,
}

impl StrokeStyle {
    /// Minimum miter limit as defined by the SVG specification.
    pub const MINIMUM_MITER_LIMIT: f64 = 1.0;
    /// Default miter limit as defined by the SVG specification.
    pub const DEFAULT_MITER_LIMIT: f64 = 4.0;
    pub const DEFAULT_LINE_CAP: LineCap = LineCap::Butt;
    pub const DEFAULT_LINE_JOIN: LineJoin = LineJoin::Miter;
    pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

    pub const DEFAULT: Self = StrokeStyle {
        line_width: Self::DEFAULT_LINE_WIDTH,
        line_cap: Self::DEFAULT_LINE_CAP,
        line_join: Self::DEFAULT_LINE_JOIN,
        miter_limit: Self::DEFAULT_MITER_LIMIT,
    };

    #[inline]
    pub const fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    #[inline]
    pub const fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = cap;
        self
    }

    #[inline]
    pub const fn with_line_join(mut self, join: LineJoin) -> Self {
        self.line_join = join;
        self
    }

    /// Limits below `MINIMUM_MITER_LIMIT` are raised to it.
    #[inline]
    pub fn with_miter_limit(mut self, limit: f64) -> Self {
        self.miter_limit = limit.max(Self::MINIMUM_MITER_LIMIT);
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Computes the outline of the path stroked with the given parameters.
///
/// The transformation is applied to the path before outlining, so the line width is
/// measured in the transformed space. A line width that isn't positive produces an
/// empty path.
pub fn outline(
    path: &Path,
    width: f64,
    cap: LineCap,
    join: LineJoin,
    miter_limit: f64,
    transform: &Transform,
) -> Path {
    let style = StrokeStyle {
        line_width: width,
        line_cap: cap,
        line_join: join,
        miter_limit,
    };

    outline_with_style(path, &style, transform)
}

/// Same as [`outline`] with the parameters packed in a [`StrokeStyle`].
pub fn outline_with_style(path: &Path, style: &StrokeStyle, transform: &Transform) -> Path {
    if !(style.line_width > 0.0) {
        log::debug!("empty stroke outline for line width {}", style.line_width);
        return Path::new();
    }

    let transformed;
    let path = if *transform == Transform::identity() {
        path
    } else {
        transformed = path.transformed(transform);
        &transformed
    };

    let mut outliner = Outliner {
        style,
        half_width: style.line_width * 0.5,
        output: Builder::with_capacity(path.len() * 2),
        left: Vec::new(),
        right: Vec::new(),
        sub_paths: 0,
    };

    let mut points: Vec<Point> = Vec::new();
    for evt in path.events() {
        match evt {
            PathEvent::Begin { at } => {
                points.clear();
                points.push(at);
            }
            PathEvent::End { close, .. } => {
                if close {
                    outliner.closed_sub_path(&mut points);
                } else {
                    outliner.open_sub_path(&points);
                }
            }
            _ => {
                evt.for_each_flattened(&Flattening::FixedStep, &mut |segment| {
                    push_point(&mut points, segment.to);
                });
            }
        }
    }

    log::trace!(
        "stroke outline: {} sub-paths, width {} {:?} {:?} miter limit {}, {} commands",
        outliner.sub_paths,
        style.line_width,
        style.line_cap,
        style.line_join,
        style.miter_limit,
        outliner.output.len(),
    );

    outliner.output.build()
}

// Consecutive duplicates have no direction to offset along.
fn push_point(points: &mut Vec<Point>, p: Point) {
    if points.last() != Some(&p) {
        points.push(p);
    }
}

// Left normal of the segment, scaled to half of the line width.
fn normal(from: Point, to: Point, half_width: f64) -> Vector {
    LineSegment { from, to }
        .normal()
        .map_or(Vector::zero(), |n| n * half_width)
}

// Rotates clockwise by a quarter turn (in a y-up space).
fn outward(offset: Vector) -> Vector {
    vector(offset.y, -offset.x)
}

struct Outliner<'l> {
    style: &'l StrokeStyle,
    half_width: f64,
    output: Builder,
    left: Vec<Point>,
    right: Vec<Point>,
    sub_paths: u32,
}

impl<'l> Outliner<'l> {
    fn open_sub_path(&mut self, points: &[Point]) {
        if points.len() < 2 {
            return;
        }

        let normals: Vec<Vector> = points
            .windows(2)
            .map(|w| normal(w[0], w[1], self.half_width))
            .collect();

        self.left.clear();
        self.right.clear();

        let first = points[0];
        self.left.push(first + normals[0]);
        self.right.push(first - normals[0]);
        for i in 1..points.len() - 1 {
            self.join(points[i], normals[i - 1], normals[i]);
        }
        let last = points[points.len() - 1];
        let last_normal = normals[normals.len() - 1];
        self.left.push(last + last_normal);
        self.right.push(last - last_normal);

        let mut outline = Vec::with_capacity(self.left.len() + self.right.len() + 16);
        for p in &self.left {
            push_point(&mut outline, *p);
        }
        self.cap(&mut outline, last, last_normal);
        for p in self.right.iter().rev() {
            push_point(&mut outline, *p);
        }
        self.cap(&mut outline, first, -normals[0]);

        self.emit(&outline);
        self.sub_paths += 1;
    }

    fn closed_sub_path(&mut self, points: &mut Vec<Point>) {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        let n = points.len();
        if n < 2 {
            return;
        }

        let normals: Vec<Vector> = (0..n)
            .map(|i| normal(points[i], points[(i + 1) % n], self.half_width))
            .collect();

        self.left.clear();
        self.right.clear();
        for i in 0..n {
            self.join(points[i], normals[(i + n - 1) % n], normals[i]);
        }

        let mut outline = Vec::with_capacity(self.left.len());
        for p in &self.left {
            push_point(&mut outline, *p);
        }
        self.emit(&outline);

        outline.clear();
        for p in self.right.iter().rev() {
            push_point(&mut outline, *p);
        }
        self.emit(&outline);

        self.sub_paths += 1;
    }

    fn join(&mut self, p: Point, n0: Vector, n1: Vector) {
        self.left.push(p + n0);
        self.right.push(p - n0);

        if self.style.line_join == LineJoin::Round {
            let sum = n0 + n1;
            let len = sum.length();
            if len > 1e-9 {
                let mid = sum * (self.half_width / len);
                self.left.push(p + mid);
                self.right.push(p - mid);
            }
        }

        self.left.push(p + n1);
        self.right.push(p - n1);
    }

    // Connects `center + offset` to `center - offset` around the outside of the end point.
    fn cap(&self, outline: &mut Vec<Point>, center: Point, offset: Vector) {
        match self.style.line_cap {
            LineCap::Butt => {}
            LineCap::Square => {
                let out = outward(offset);
                push_point(outline, center + offset + out);
                push_point(outline, center - offset + out);
            }
            LineCap::Round => {
                for i in 1..ROUND_CAP_STEPS {
                    let angle = -PI * i as f64 / ROUND_CAP_STEPS as f64;
                    let (sin, cos) = angle.sin_cos();
                    let v = vector(
                        offset.x * cos - offset.y * sin,
                        offset.x * sin + offset.y * cos,
                    );
                    push_point(outline, center + v);
                }
            }
        }
    }

    fn emit(&mut self, outline: &[Point]) {
        let outline = match outline.split_last() {
            Some((last, rest)) if !rest.is_empty() && Some(last) == rest.first() => rest,
            _ => outline,
        };
        if outline.is_empty() {
            return;
        }

        self.output.add_lines(outline);
        self.output.close();
    }
}

#[cfg(test)]
use crate::math::{point, rect};
#[cfg(test)]
use crate::path::FillRule;

#[cfg(test)]
fn line(from: Point, to: Point) -> Path {
    let mut builder = Path::builder();
    builder.move_to(from);
    builder.line_to(to);
    builder.build()
}

#[cfg(test)]
fn is_inside(p: Point, path: &Path) -> bool {
    crate::hit_test::contains(p, path, FillRule::NonZero, &Transform::identity())
}

#[test]
fn zero_width_is_empty() {
    let path = Path::rect(&rect(0.0, 0.0, 10.0, 10.0));
    let id = Transform::identity();
    for width in [0.0, -1.0, f64::NAN] {
        let out = outline(&path, width, LineCap::Round, LineJoin::Round, 4.0, &id);
        assert!(out.is_empty());
    }
    assert!(outline(&Path::new(), 1.0, LineCap::Butt, LineJoin::Miter, 4.0, &id).is_empty());
}

#[test]
fn butt_segment_is_a_rectangle() {
    let path = line(point(0.0, 0.0), point(10.0, 0.0));
    let out = outline(&path, 2.0, LineCap::Butt, LineJoin::Miter, 4.0, &Transform::identity());
    assert_eq!(out.is_rectangle(), Some(rect(0.0, -1.0, 10.0, 2.0)));

    // The line width applies after the transformation.
    let t = Transform::scale(2.0, 2.0);
    let out = outline(&path, 2.0, LineCap::Butt, LineJoin::Miter, 4.0, &t);
    assert_eq!(out.is_rectangle(), Some(rect(0.0, -1.0, 20.0, 2.0)));
}

#[test]
fn square_caps_extend_the_segment() {
    let path = line(point(0.0, 0.0), point(10.0, 0.0));
    let style = StrokeStyle::DEFAULT
        .with_line_width(2.0)
        .with_line_cap(LineCap::Square);
    let out = outline_with_style(&path, &style, &Transform::identity());

    assert_eq!(out.bounding_box(), Some(rect(-1.0, -1.0, 12.0, 2.0)));
    assert!(is_inside(point(10.5, 0.5), &out));
    assert!(is_inside(point(-0.5, -0.5), &out));
    assert!(!is_inside(point(11.5, 0.0), &out));
}

#[test]
fn round_caps() {
    let path = line(point(0.0, 0.0), point(10.0, 0.0));
    let style = StrokeStyle::DEFAULT
        .with_line_width(2.0)
        .with_line_cap(LineCap::Round);
    let out = outline_with_style(&path, &style, &Transform::identity());

    // Two offset points per side and seven intermediate points per cap.
    assert_eq!(out.len(), 4 + 2 * (ROUND_CAP_STEPS as usize - 1) + 1);
    let bounds = out.bounding_box().unwrap();
    assert!((bounds.min.x + 1.0).abs() < 1e-9);
    assert!((bounds.max.x - 11.0).abs() < 1e-9);
    assert!(is_inside(point(10.5, 0.0), &out));
    assert!(!is_inside(point(10.9, 0.9), &out));
}

#[test]
fn joins() {
    let mut builder = Path::builder();
    builder.add_lines(&[point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)]);
    let path = builder.build();
    let id = Transform::identity();

    let miter = outline(&path, 2.0, LineCap::Butt, LineJoin::Miter, 4.0, &id);
    let bevel = outline(&path, 2.0, LineCap::Butt, LineJoin::Bevel, 4.0, &id);
    let round = outline(&path, 2.0, LineCap::Butt, LineJoin::Round, 4.0, &id);

    assert_eq!(miter, bevel);
    // MoveTo, 7 LineTo, Close.
    assert_eq!(miter.len(), 9);
    // Plus one point on each side of the corner.
    assert_eq!(round.len(), 11);

    assert!(is_inside(point(5.0, 0.5), &miter));
    assert!(is_inside(point(10.5, 5.0), &miter));
    assert!(!is_inside(point(5.0, 5.0), &miter));
    assert!(is_inside(point(10.5, -0.5), &round));
}

#[test]
fn closed_sub_path_leaves_a_hole() {
    let path = Path::rect(&rect(0.0, 0.0, 10.0, 10.0));
    let out = outline(&path, 2.0, LineCap::Round, LineJoin::Miter, 4.0, &Transform::identity());

    // Two loops, caps are not used.
    let moves = out
        .iter()
        .filter(|cmd| matches!(cmd, crate::path::PathCommand::MoveTo(..)))
        .count();
    assert_eq!(moves, 2);
    assert_eq!(out.len(), 2 * (1 + 7 + 1));

    assert!(is_inside(point(0.5, 5.0), &out));
    assert!(is_inside(point(-0.5, 5.0), &out));
    assert!(is_inside(point(5.0, 10.5), &out));
    assert!(!is_inside(point(5.0, 5.0), &out));
    assert!(!is_inside(point(12.0, 5.0), &out));
}

#[test]
fn closed_sub_path_round_join_at_start() {
    let path = Path::rect(&rect(0.0, 0.0, 10.0, 10.0));
    let out = outline(&path, 2.0, LineCap::Butt, LineJoin::Round, 4.0, &Transform::identity());

    // Three offset points at each of the four vertices, the start vertex included.
    assert_eq!(out.len(), 2 * (1 + 11 + 1));

    let d = 0.5f64.sqrt();
    match out.commands()[..2] {
        [crate::path::PathCommand::MoveTo(a), crate::path::PathCommand::LineTo(b)] => {
            assert!((a - point(1.0, 0.0)).length() < 1e-9);
            assert!((b - point(d, d)).length() < 1e-9);
        }
        _ => panic!("expected the left loop to start at the first vertex"),
    }
}

#[test]
fn curves_are_sampled() {
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.quadratic_bezier_to(point(50.0, 100.0), point(100.0, 0.0));
    let path = builder.build();

    let out = outline(&path, 4.0, LineCap::Butt, LineJoin::Miter, 4.0, &Transform::identity());
    // 9 sampled points: 2 offset points at the ends, 4 at each of the 7 joins.
    assert_eq!(out.len(), 2 * (2 + 7 * 2) + 1);
    assert!(is_inside(point(50.0, 50.0), &out));
    assert!(!is_inside(point(50.0, 60.0), &out));
    assert!(!is_inside(point(50.0, 40.0), &out));
}

#[test]
fn degenerate_sub_paths() {
    let mut builder = Path::builder();
    builder.move_to(point(1.0, 1.0));
    builder.move_to(point(5.0, 5.0));
    builder.line_to(point(5.0, 5.0));
    builder.close();
    let path = builder.build();

    let out = outline(&path, 2.0, LineCap::Round, LineJoin::Round, 4.0, &Transform::identity());
    assert!(out.is_empty());
}
