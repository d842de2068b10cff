//! Path building utilities.
//!
//! ## `PathBuilder`
//!
//! The [PathBuilder](trait.PathBuilder.html) trait only requires a handful of primitives
//! (`move_to`, `line_to`, `quadratic_bezier_to`, `cubic_bezier_to`, `close` and
//! `current_position`). Every shape generator (rectangles, ellipses, rounded rectangles,
//! arcs, ...) is a provided method built on top of them, so all implementations get
//! them for free.
//!
//! ## Examples
//!
//! ```
//! use contour_path::Path;
//! use contour_path::builder::PathBuilder;
//! use contour_path::math::{point, rect, Angle};
//!
//! let mut builder = Path::builder();
//!
//! builder.move_to(point(0.0, 0.0));
//! builder.line_to(point(1.0, 0.0));
//! builder.quadratic_bezier_to(point(2.0, 0.0), point(2.0, 1.0));
//! builder.close();
//!
//! builder.add_rect(&rect(10.0, 10.0, 5.0, 5.0));
//! builder.add_arc(point(30.0, 30.0), 5.0, Angle::zero(), Angle::pi(), false);
//!
//! let path = builder.build();
//! ```
//!
//! Points can be transformed on their way into the builder with the
//! [Transformed](struct.Transformed.html) adapter. Borrowing the builder lets the
//! transformation apply to a single shape:
//!
//! ```
//! use contour_path::Path;
//! use contour_path::builder::PathBuilder;
//! use contour_path::math::{rect, Transform};
//!
//! let mut builder = Path::builder();
//! builder.add_rect(&rect(0.0, 0.0, 1.0, 1.0));
//!
//! let rotation = Transform::rotation(contour_path::math::Angle::degrees(45.0));
//! (&mut builder).transformed(&rotation).add_ellipse(&rect(0.0, 0.0, 4.0, 2.0));
//!
//! let path = builder.build();
//! ```

use crate::commands::PathCommand;
use crate::geom::Arc;
use crate::math::*;
use crate::path::{current_point, Path};

use std::f64::consts::{PI, TAU};

/// Control point distance of a cubic bézier quarter circle, relative to the radius.
pub const KAPPA: f64 = 0.55228475;

// Below this length, tangents used to build an arc are considered degenerate.
const DEGENERATE_LENGTH: f64 = 1e-9;
const PARALLEL_EPSILON: f64 = 1e-9;

/// The base path building interface.
///
/// All positions are provided in absolute coordinates.
///
/// Implementations are not expected to validate the sequence of commands: like
/// paths themselves, builders are permissive and record what they are given.
pub trait PathBuilder {
    /// Starts a new sub-path at a given position.
    fn move_to(&mut self, to: Point);

    /// Adds a line segment to the current sub-path.
    fn line_to(&mut self, to: Point);

    /// Adds a quadratic bézier curve to the current sub-path.
    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point);

    /// Adds a cubic bézier curve to the current sub-path.
    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point);

    /// Closes the current sub-path.
    fn close(&mut self);

    /// The end point of the last command that has one, or `None` if nothing
    /// was added yet.
    fn current_position(&self) -> Option<Point>;

    /// Hints at the builder that a certain number of commands will be added.
    ///
    /// The Builder implementation may use this information to pre-allocate
    /// memory as an optimization.
    fn reserve(&mut self, _commands: usize) {}

    /// Applies the provided command.
    fn command(&mut self, command: PathCommand) {
        match command {
            PathCommand::MoveTo(to) => self.move_to(to),
            PathCommand::LineTo(to) => self.line_to(to),
            PathCommand::QuadCurveTo { ctrl, to } => self.quadratic_bezier_to(ctrl, to),
            PathCommand::CurveTo { ctrl1, ctrl2, to } => self.cubic_bezier_to(ctrl1, ctrl2, to),
            PathCommand::CloseSubpath => self.close(),
        }
    }

    /// Adds commands from an iterator.
    fn add_commands<Commands>(&mut self, commands: Commands)
    where
        Commands: IntoIterator<Item = PathCommand>,
        Self: Sized,
    {
        for cmd in commands {
            self.command(cmd);
        }
    }

    /// Appends all commands of another path.
    fn add_path(&mut self, path: &Path) {
        self.reserve(path.len());
        for cmd in path {
            self.command(*cmd);
        }
    }

    /// Adds a `MoveTo` to the first point followed by a `LineTo` per remaining point.
    ///
    /// Does nothing if `points` is empty.
    fn add_lines(&mut self, points: &[Point]) {
        let (first, rest) = match points.split_first() {
            Some(split) => split,
            None => return,
        };

        self.reserve(points.len());
        self.move_to(*first);
        for p in rest {
            self.line_to(*p);
        }
    }

    /// Adds a closed sub-path going through `(min x, min y)`, `(max x, min y)`,
    /// `(max x, max y)` and `(min x, max y)`.
    fn add_rect(&mut self, rect: &Box2D) {
        let r = normalized(rect);
        self.reserve(5);
        self.move_to(r.min);
        self.line_to(point(r.max.x, r.min.y));
        self.line_to(r.max);
        self.line_to(point(r.min.x, r.max.y));
        self.close();
    }

    /// Adds one closed sub-path per rectangle, see `add_rect`.
    fn add_rects(&mut self, rects: &[Box2D]) {
        self.reserve(rects.len() * 5);
        for rect in rects {
            self.add_rect(rect);
        }
    }

    /// Adds a closed ellipse inscribed in the rectangle, made of four cubic bézier curves.
    ///
    /// The ellipse starts at its rightmost point and goes in the direction of increasing
    /// angles (counter-clockwise when the y axis points up).
    fn add_ellipse(&mut self, rect: &Box2D) {
        let r = normalized(rect);
        let center = r.center();
        let rx = (r.max.x - r.min.x) * 0.5;
        let ry = (r.max.y - r.min.y) * 0.5;
        let dx = rx * KAPPA;
        let dy = ry * KAPPA;

        self.reserve(6);
        self.move_to(point(r.max.x, center.y));
        self.cubic_bezier_to(
            point(r.max.x, center.y + dy),
            point(center.x + dx, r.max.y),
            point(center.x, r.max.y),
        );
        self.cubic_bezier_to(
            point(center.x - dx, r.max.y),
            point(r.min.x, center.y + dy),
            point(r.min.x, center.y),
        );
        self.cubic_bezier_to(
            point(r.min.x, center.y - dy),
            point(center.x - dx, r.min.y),
            point(center.x, r.min.y),
        );
        self.cubic_bezier_to(
            point(center.x + dx, r.min.y),
            point(r.max.x, center.y - dy),
            point(r.max.x, center.y),
        );
        self.close();
    }

    /// Adds a closed rectangle with elliptical corners.
    ///
    /// The corner radii are clamped to half of the width and height of the rectangle.
    /// If either of them is not positive, a plain rectangle is added.
    fn add_rounded_rect(&mut self, rect: &Box2D, corner_width: f64, corner_height: f64) {
        let r = normalized(rect);
        let cw = corner_width.min((r.max.x - r.min.x) * 0.5);
        let ch = corner_height.min((r.max.y - r.min.y) * 0.5);
        if !(cw > 0.0 && ch > 0.0) {
            self.add_rect(&r);
            return;
        }

        let dx = cw * KAPPA;
        let dy = ch * KAPPA;
        let (x0, y0, x1, y1) = (r.min.x, r.min.y, r.max.x, r.max.y);

        self.reserve(10);
        self.move_to(point(x0 + cw, y0));
        self.line_to(point(x1 - cw, y0));
        self.cubic_bezier_to(
            point(x1 - cw + dx, y0),
            point(x1, y0 + ch - dy),
            point(x1, y0 + ch),
        );
        self.line_to(point(x1, y1 - ch));
        self.cubic_bezier_to(
            point(x1, y1 - ch + dy),
            point(x1 - cw + dx, y1),
            point(x1 - cw, y1),
        );
        self.line_to(point(x0 + cw, y1));
        self.cubic_bezier_to(
            point(x0 + cw - dx, y1),
            point(x0, y1 - ch + dy),
            point(x0, y1 - ch),
        );
        self.line_to(point(x0, y0 + ch));
        self.cubic_bezier_to(
            point(x0, y0 + ch - dy),
            point(x0 + cw - dx, y0),
            point(x0 + cw, y0),
        );
        self.close();
    }

    /// Adds a circular arc going from `start_angle` to `end_angle`.
    ///
    /// If something was already added, a line connects the current position to the
    /// start of the arc, otherwise a new sub-path begins there. With `clockwise` the arc
    /// goes in the direction of decreasing angles. Angles a full turn or more apart
    /// produce a full circle.
    fn add_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
        clockwise: bool,
    ) {
        let delta = end_angle.radians - start_angle.radians;
        let mut sweep = if clockwise {
            -(-delta).rem_euclid(TAU)
        } else {
            delta.rem_euclid(TAU)
        };
        if sweep == 0.0 && delta != 0.0 {
            sweep = if clockwise { -TAU } else { TAU };
        }

        self.add_relative_arc(center, radius, start_angle, Angle::radians(sweep));
    }

    /// Adds a circular arc starting at `start_angle` and sweeping `delta` radians.
    ///
    /// Connects to the start of the arc like `add_arc`. The sweep is clamped to a
    /// full turn in either direction.
    fn add_relative_arc(&mut self, center: Point, radius: f64, start_angle: Angle, delta: Angle) {
        let arc = Arc {
            center,
            radius: radius.abs(),
            start_angle,
            sweep_angle: delta,
        };

        let start = arc.from();
        if self.current_position().is_some() {
            self.line_to(start);
        } else {
            self.move_to(start);
        }

        arc.for_each_cubic_bezier(&mut |curve| {
            self.cubic_bezier_to(curve.ctrl1, curve.ctrl2, curve.to);
        });
    }

    /// Adds an arc of the given radius tangent to the line from the current position
    /// to `tangent1_end` and to the line from `tangent1_end` to `tangent2_end`.
    ///
    /// A line connects the current position to the start of the arc. When the arc is
    /// undefined (one of the lines has no length, the lines are parallel or the radius
    /// is not positive) a line to `tangent1_end` is added instead. A new sub-path begins
    /// at `tangent1_end` if nothing was added yet.
    fn add_arc_to(&mut self, tangent1_end: Point, tangent2_end: Point, radius: f64) {
        let current = match self.current_position() {
            Some(p) => p,
            None => {
                log::debug!("arc to {:?} without a current position", tangent1_end);
                self.move_to(tangent1_end);
                return;
            }
        };

        let v1 = current - tangent1_end;
        let v2 = tangent2_end - tangent1_end;
        let l1 = v1.length();
        let l2 = v2.length();
        if !(l1 > DEGENERATE_LENGTH && l2 > DEGENERATE_LENGTH && radius > DEGENERATE_LENGTH) {
            log::debug!("degenerate tangent arc, adding a line to {:?}", tangent1_end);
            self.line_to(tangent1_end);
            return;
        }

        let u1 = v1 / l1;
        let u2 = v2 / l2;
        // Both folding back and going straight through leave no corner to round.
        let dot = u1.dot(u2);
        if !(1.0 - dot.abs() > PARALLEL_EPSILON) {
            log::debug!("parallel tangents, adding a line to {:?}", tangent1_end);
            self.line_to(tangent1_end);
            return;
        }

        // Half of the angle between the two tangents, seen from the corner.
        let half = dot.acos() * 0.5;
        let tangent_distance = radius / half.tan();
        if !tangent_distance.is_finite() {
            log::debug!("tangent arc out of range, adding a line to {:?}", tangent1_end);
            self.line_to(tangent1_end);
            return;
        }
        let arc_start = tangent1_end + u1 * tangent_distance;
        let arc_end = tangent1_end + u2 * tangent_distance;
        let center = tangent1_end + (u1 + u2).normalize() * (radius / half.sin());

        let start_angle = angle_of(arc_start - center);
        let mut sweep = angle_of(arc_end - center) - start_angle;
        if sweep > PI {
            sweep -= TAU;
        } else if sweep <= -PI {
            sweep += TAU;
        }

        self.line_to(arc_start);
        let arc = Arc {
            center,
            radius,
            start_angle: Angle::radians(start_angle),
            sweep_angle: Angle::radians(sweep),
        };
        arc.for_each_cubic_bezier(&mut |curve| {
            self.cubic_bezier_to(curve.ctrl1, curve.ctrl2, curve.to);
        });
    }

    /// Returns a builder that applies the given transformation to all positions.
    fn transformed(self, transform: &Transform) -> Transformed<Self>
    where
        Self: Sized,
    {
        Transformed::new(self, transform)
    }
}

fn normalized(rect: &Box2D) -> Box2D {
    Box2D {
        min: Point::min(rect.min, rect.max),
        max: Point::max(rect.min, rect.max),
    }
}

fn angle_of(v: Vector) -> f64 {
    v.y.atan2(v.x)
}

impl<'l, Builder: PathBuilder + ?Sized> PathBuilder for &'l mut Builder {
    fn move_to(&mut self, to: Point) {
        (**self).move_to(to);
    }

    fn line_to(&mut self, to: Point) {
        (**self).line_to(to);
    }

    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        (**self).quadratic_bezier_to(ctrl, to);
    }

    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        (**self).cubic_bezier_to(ctrl1, ctrl2, to);
    }

    fn close(&mut self) {
        (**self).close();
    }

    fn current_position(&self) -> Option<Point> {
        (**self).current_position()
    }

    fn reserve(&mut self, commands: usize) {
        (**self).reserve(commands);
    }
}

/// Builders that produce a path.
pub trait Build {
    /// The type of object that is created by this builder.
    type PathType;

    /// Builds a path object, consuming the builder.
    fn build(self) -> Self::PathType;
}

/// The default path builder: records commands into a growable buffer.
///
/// A builder has a single owner and is not meant to be shared while it is being
/// filled. [`build`](#method.build) moves the buffer into an immutable [`Path`],
/// [`snapshot`](#method.snapshot) copies it.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    commands: Vec<PathCommand>,
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            commands: Vec::new(),
        }
    }

    pub fn with_capacity(commands: usize) -> Self {
        Builder {
            commands: Vec::with_capacity(commands),
        }
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Builder { commands }
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Same as [`Path::current_point`] on the commands added so far.
    pub fn current_point(&self) -> Point {
        current_point(&self.commands).unwrap_or_else(Point::origin)
    }

    /// Returns a path containing a copy of the commands added so far.
    pub fn snapshot(&self) -> Path {
        Path::from_commands(self.commands.clone())
    }

    pub fn build(self) -> Path {
        Path::from_commands(self.commands)
    }
}

impl PathBuilder for Builder {
    fn move_to(&mut self, to: Point) {
        nan_check(to);
        self.commands.push(PathCommand::MoveTo(to));
    }

    fn line_to(&mut self, to: Point) {
        nan_check(to);
        self.commands.push(PathCommand::LineTo(to));
    }

    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        nan_check(ctrl);
        nan_check(to);
        self.commands.push(PathCommand::QuadCurveTo { ctrl, to });
    }

    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        nan_check(ctrl1);
        nan_check(ctrl2);
        nan_check(to);
        self.commands.push(PathCommand::CurveTo { ctrl1, ctrl2, to });
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::CloseSubpath);
    }

    fn current_position(&self) -> Option<Point> {
        current_point(&self.commands)
    }

    fn reserve(&mut self, commands: usize) {
        self.commands.reserve(commands);
    }
}

impl Build for Builder {
    type PathType = Path;

    fn build(self) -> Path {
        Path::from_commands(self.commands)
    }
}

/// A builder that applies a transformation to all points before forwarding them.
///
/// `current_position` maps the position of the underlying builder back through the
/// inverse transformation, so that shapes relying on it (such as `add_arc_to`) are
/// computed in the untransformed space.
/// With a transformation that can't be inverted, the position is reported as is.
pub struct Transformed<Builder> {
    builder: Builder,
    transform: Transform,
    inverse: Option<Transform>,
}

impl<Builder> Transformed<Builder> {
    #[inline]
    pub fn new(builder: Builder, transform: &Transform) -> Self {
        Transformed {
            builder,
            transform: *transform,
            inverse: transform.inverse(),
        }
    }

}

impl<Builder: Build> Build for Transformed<Builder> {
    type PathType = Builder::PathType;

    #[inline]
    fn build(self) -> Builder::PathType {
        self.builder.build()
    }
}

impl<Builder: PathBuilder> PathBuilder for Transformed<Builder> {
    #[inline]
    fn move_to(&mut self, to: Point) {
        self.builder.move_to(self.transform.transform_point(to));
    }

    #[inline]
    fn line_to(&mut self, to: Point) {
        self.builder.line_to(self.transform.transform_point(to));
    }

    #[inline]
    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        self.builder.quadratic_bezier_to(
            self.transform.transform_point(ctrl),
            self.transform.transform_point(to),
        );
    }

    #[inline]
    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.builder.cubic_bezier_to(
            self.transform.transform_point(ctrl1),
            self.transform.transform_point(ctrl2),
            self.transform.transform_point(to),
        );
    }

    #[inline]
    fn close(&mut self) {
        self.builder.close();
    }

    fn current_position(&self) -> Option<Point> {
        let p = self.builder.current_position()?;
        Some(match self.inverse {
            Some(inverse) => inverse.transform_point(p),
            None => {
                log::debug!(
                    "singular transform {:?}, position left untransformed",
                    self.transform
                );
                p
            }
        })
    }

    #[inline]
    fn reserve(&mut self, commands: usize) {
        self.builder.reserve(commands);
    }
}

#[inline]
fn nan_check(p: Point) {
    debug_assert!(p.x.is_finite());
    debug_assert!(p.y.is_finite());
}

#[cfg(test)]
fn approx_eq(a: Point, b: Point) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn add_lines() {
    let mut builder = Path::builder();
    builder.add_lines(&[]);
    assert!(builder.is_empty());

    builder.add_lines(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)]);
    assert_eq!(
        builder.commands(),
        &[
            PathCommand::MoveTo(point(0.0, 0.0)),
            PathCommand::LineTo(point(1.0, 0.0)),
            PathCommand::LineTo(point(1.0, 1.0)),
        ]
    );
}

#[test]
fn rect_vertex_order() {
    let mut builder = Path::builder();
    // Corners given in the wrong order are normalized.
    builder.add_rect(&Box2D {
        min: point(4.0, 6.0),
        max: point(1.0, 2.0),
    });

    assert_eq!(
        builder.commands(),
        &[
            PathCommand::MoveTo(point(1.0, 2.0)),
            PathCommand::LineTo(point(4.0, 2.0)),
            PathCommand::LineTo(point(4.0, 6.0)),
            PathCommand::LineTo(point(1.0, 6.0)),
            PathCommand::CloseSubpath,
        ]
    );

    builder.add_rects(&[rect(0.0, 0.0, 1.0, 1.0), rect(2.0, 2.0, 1.0, 1.0)]);
    assert_eq!(builder.len(), 15);
}

#[test]
fn ellipse_starts_at_rightmost_point() {
    let path = Path::ellipse(&rect(0.0, 0.0, 20.0, 10.0));
    let commands = path.commands();
    assert_eq!(commands.len(), 6);
    assert_eq!(commands[0], PathCommand::MoveTo(point(20.0, 5.0)));
    assert_eq!(commands[1].end_point(), Some(point(10.0, 10.0)));
    assert_eq!(commands[2].end_point(), Some(point(0.0, 5.0)));
    assert_eq!(commands[3].end_point(), Some(point(10.0, 0.0)));
    assert_eq!(commands[4].end_point(), Some(point(20.0, 5.0)));
    assert_eq!(commands[5], PathCommand::CloseSubpath);

    match commands[1] {
        PathCommand::CurveTo { ctrl1, ctrl2, .. } => {
            assert!(approx_eq(ctrl1, point(20.0, 5.0 + 5.0 * KAPPA)));
            assert!(approx_eq(ctrl2, point(10.0 + 10.0 * KAPPA, 10.0)));
        }
        _ => panic!("expected a cubic bézier curve"),
    }
}

#[test]
fn rounded_rect_clamps_radii() {
    let r = rect(0.0, 0.0, 10.0, 4.0);
    let path = Path::rounded_rect(&r, 100.0, 1.0);
    let commands = path.commands();
    assert_eq!(commands.len(), 10);
    // Corner width clamped to 5.
    assert_eq!(commands[0], PathCommand::MoveTo(point(5.0, 0.0)));
    assert_eq!(commands[1], PathCommand::LineTo(point(5.0, 0.0)));
    assert_eq!(commands[2].end_point(), Some(point(10.0, 1.0)));
    assert_eq!(commands[9], PathCommand::CloseSubpath);
    assert_eq!(path.bounding_box(), Some(r));

    // No rounding.
    assert_eq!(Path::rounded_rect(&r, 0.0, 2.0), Path::rect(&r));
}

#[test]
fn arc_connects_to_existing_content() {
    let mut builder = Path::builder();
    builder.add_arc(point(0.0, 0.0), 1.0, Angle::zero(), Angle::frac_pi_2(), false);
    assert!(matches!(builder.commands()[0], PathCommand::MoveTo(_)));
    assert_eq!(builder.len(), 2);

    builder.add_arc(point(10.0, 0.0), 1.0, Angle::zero(), Angle::pi(), false);
    assert_eq!(builder.commands()[2], PathCommand::LineTo(point(11.0, 0.0)));
    assert_eq!(builder.len(), 5);
    assert!(approx_eq(builder.current_point(), point(9.0, 0.0)));
}

#[test]
fn arc_direction() {
    // From 0 to 90 degrees clockwise is a three quarter turn through negative y.
    let mut builder = Path::builder();
    builder.add_arc(point(0.0, 0.0), 2.0, Angle::zero(), Angle::frac_pi_2(), true);
    let path = builder.build();
    assert_eq!(path.len(), 4);
    assert!(approx_eq(path.commands()[1].end_point().unwrap(), point(0.0, -2.0)));
    assert!(approx_eq(path.current_point(), point(0.0, 2.0)));

    // Full circle.
    let mut builder = Path::builder();
    builder.add_arc(point(0.0, 0.0), 1.0, Angle::zero(), Angle::radians(TAU), false);
    assert_eq!(builder.len(), 5);

    // Zero sweep only positions the pen.
    let mut builder = Path::builder();
    builder.add_arc(point(0.0, 0.0), 1.0, Angle::pi(), Angle::pi(), false);
    assert_eq!(builder.len(), 1);
    match builder.commands()[0] {
        PathCommand::MoveTo(p) => assert!(approx_eq(p, point(-1.0, 0.0))),
        _ => panic!("expected a move"),
    }
}

#[test]
fn relative_arc() {
    let mut builder = Path::builder();
    builder.add_relative_arc(point(0.0, 0.0), 1.0, Angle::zero(), Angle::radians(-PI));
    let path = builder.build();
    assert_eq!(path.len(), 3);
    assert!(approx_eq(path.commands()[1].end_point().unwrap(), point(0.0, -1.0)));
    assert!(approx_eq(path.current_point(), point(-1.0, 0.0)));
}

#[test]
fn arc_to_rounds_a_corner() {
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.add_arc_to(point(10.0, 0.0), point(10.0, 10.0), 2.0);
    let path = builder.build();

    assert_eq!(path.len(), 3);
    assert_eq!(path.commands()[1].kind(), crate::ElementKind::LineTo);
    assert!(approx_eq(path.commands()[1].end_point().unwrap(), point(8.0, 0.0)));
    assert!(approx_eq(path.current_point(), point(10.0, 2.0)));
    match path.commands()[2] {
        PathCommand::CurveTo { ctrl1, ctrl2, .. } => {
            assert!(approx_eq(ctrl1, point(8.0 + 2.0 * KAPPA, 0.0)));
            assert!(approx_eq(ctrl2, point(10.0, 2.0 - 2.0 * KAPPA)));
        }
        _ => panic!("expected a cubic bézier curve"),
    }
}

#[test]
fn arc_to_degenerate_cases() {
    // Parallel tangents.
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.add_arc_to(point(5.0, 0.0), point(10.0, 0.0), 1.0);
    assert_eq!(builder.commands()[1], PathCommand::LineTo(point(5.0, 0.0)));
    assert_eq!(builder.len(), 2);

    // Zero length tangent.
    let mut builder = Path::builder();
    builder.move_to(point(5.0, 0.0));
    builder.add_arc_to(point(5.0, 0.0), point(10.0, 3.0), 1.0);
    assert_eq!(builder.commands()[1], PathCommand::LineTo(point(5.0, 0.0)));

    // Zero radius.
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.add_arc_to(point(5.0, 0.0), point(5.0, 3.0), 0.0);
    assert_eq!(builder.commands()[1], PathCommand::LineTo(point(5.0, 0.0)));

    // Nothing to connect from.
    let mut builder = Path::builder();
    builder.add_arc_to(point(5.0, 0.0), point(5.0, 3.0), 1.0);
    assert_eq!(builder.commands(), &[PathCommand::MoveTo(point(5.0, 0.0))]);
}

#[test]
fn arc_to_nearly_parallel_tangents() {
    // Folding back onto the incoming tangent.
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.add_arc_to(point(10.0, 0.0), point(0.0, 1e-7), 1.0);
    assert_eq!(
        builder.commands(),
        &[
            PathCommand::MoveTo(point(0.0, 0.0)),
            PathCommand::LineTo(point(10.0, 0.0)),
        ]
    );

    // Almost going straight through the corner.
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.add_arc_to(point(10.0, 0.0), point(20.0, 1e-7), 1.0);
    assert_eq!(builder.commands()[1], PathCommand::LineTo(point(10.0, 0.0)));
    assert_eq!(builder.len(), 2);

    // A sharp but well defined turn still produces an arc.
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.add_arc_to(point(10.0, 0.0), point(0.0, 1.0), 0.1);
    let path = builder.build();
    assert!(path.len() > 2);
    for cmd in path.iter() {
        for p in cmd.points() {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }
}

#[test]
fn arc_of_a_third_of_a_turn() {
    let mut builder = Path::builder();
    builder.add_arc(point(0.0, 0.0), 3.0, Angle::zero(), Angle::degrees(120.0), false);
    let path = builder.build();
    assert_eq!(path.len(), 3);

    let k = 4.0 / 3.0 * Angle::degrees(15.0).radians.tan();
    match path.commands()[1] {
        PathCommand::CurveTo { ctrl1, to, .. } => {
            assert!(approx_eq(ctrl1, point(3.0, 3.0 * k)));
            assert!(approx_eq(to, point(1.5, 3.0 * 0.75f64.sqrt())));
        }
        _ => panic!("expected a cubic bézier curve"),
    }
}

#[test]
fn singular_transform_reports_the_output_position() {
    let mut builder = Path::builder();
    let mut t = (&mut builder).transformed(&Transform::scale(0.0, 2.0));
    t.move_to(point(3.0, 4.0));
    assert_eq!(t.current_position(), Some(point(0.0, 8.0)));
    assert_eq!(builder.commands(), &[PathCommand::MoveTo(point(0.0, 8.0))]);
}

#[test]
fn transformed_builder() {
    let mut builder = Path::builder();
    {
        let mut t = (&mut builder).transformed(&Transform::translation(10.0, 0.0));
        t.add_rect(&rect(0.0, 0.0, 1.0, 1.0));
        // Reported in the untransformed space.
        assert_eq!(t.current_position(), Some(point(0.0, 1.0)));
    }
    assert_eq!(builder.current_position(), Some(point(10.0, 1.0)));

    builder.add_path(&Path::rect(&rect(0.0, 0.0, 1.0, 1.0)));
    let path = builder.build();
    assert_eq!(path.len(), 10);
    assert_eq!(path.commands()[0], PathCommand::MoveTo(point(10.0, 0.0)));
    assert_eq!(path.commands()[5], PathCommand::MoveTo(point(0.0, 0.0)));

    let owned = Path::builder()
        .transformed(&Transform::scale(2.0, 2.0))
        .build();
    assert!(owned.is_empty());
}

#[test]
fn snapshot_does_not_consume() {
    let mut builder = Path::builder();
    builder.move_to(point(1.0, 1.0));
    let first = builder.snapshot();
    builder.line_to(point(2.0, 2.0));
    let second = builder.snapshot();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
    assert_eq!(builder.build(), second);
}
