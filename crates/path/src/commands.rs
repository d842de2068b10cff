//! The drawing instructions a [`Path`](crate::Path) is made of.

use crate::geom::arrayvec::ArrayVec;
use crate::geom::traits::Transformation;
use crate::math::Point;

use std::hash::{Hash, Hasher};

/// One drawing instruction.
///
/// Curve commands start at the end of the previous command. `CloseSubpath` draws
/// an implicit line back to the start of the sub-path when the path is rendered.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadCurveTo { ctrl: Point, to: Point },
    CurveTo { ctrl1: Point, ctrl2: Point, to: Point },
    CloseSubpath,
}

/// The kind of a [`PathCommand`], without its points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ElementKind {
    MoveTo,
    LineTo,
    QuadCurveTo,
    CurveTo,
    CloseSubpath,
}

impl ElementKind {
    /// Number of points carried by commands of this kind.
    pub fn num_points(self) -> usize {
        match self {
            ElementKind::MoveTo | ElementKind::LineTo => 1,
            ElementKind::QuadCurveTo => 2,
            ElementKind::CurveTo => 3,
            ElementKind::CloseSubpath => 0,
        }
    }
}

/// A command presented to path visitors: its kind and its points in order.
///
/// See [`Path::enumerate`](crate::Path::enumerate).
#[derive(Clone, Debug, PartialEq)]
pub struct PathElement {
    pub kind: ElementKind,
    pub points: ArrayVec<Point, 3>,
}

impl PathCommand {
    pub fn kind(&self) -> ElementKind {
        match self {
            PathCommand::MoveTo(..) => ElementKind::MoveTo,
            PathCommand::LineTo(..) => ElementKind::LineTo,
            PathCommand::QuadCurveTo { .. } => ElementKind::QuadCurveTo,
            PathCommand::CurveTo { .. } => ElementKind::CurveTo,
            PathCommand::CloseSubpath => ElementKind::CloseSubpath,
        }
    }

    /// The points of the command, control points first.
    pub fn points(&self) -> ArrayVec<Point, 3> {
        let mut points = ArrayVec::new();
        match *self {
            PathCommand::MoveTo(to) | PathCommand::LineTo(to) => {
                points.push(to);
            }
            PathCommand::QuadCurveTo { ctrl, to } => {
                points.push(ctrl);
                points.push(to);
            }
            PathCommand::CurveTo { ctrl1, ctrl2, to } => {
                points.push(ctrl1);
                points.push(ctrl2);
                points.push(to);
            }
            PathCommand::CloseSubpath => {}
        }

        points
    }

    /// The position the command ends at, or `None` for `CloseSubpath`.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(to)
            | PathCommand::LineTo(to)
            | PathCommand::QuadCurveTo { to, .. }
            | PathCommand::CurveTo { to, .. } => Some(to),
            PathCommand::CloseSubpath => None,
        }
    }

    pub fn element(&self) -> PathElement {
        PathElement {
            kind: self.kind(),
            points: self.points(),
        }
    }

    pub fn transformed<T: Transformation<f64>>(&self, transform: &T) -> Self {
        match *self {
            PathCommand::MoveTo(to) => PathCommand::MoveTo(transform.transform_point(to)),
            PathCommand::LineTo(to) => PathCommand::LineTo(transform.transform_point(to)),
            PathCommand::QuadCurveTo { ctrl, to } => PathCommand::QuadCurveTo {
                ctrl: transform.transform_point(ctrl),
                to: transform.transform_point(to),
            },
            PathCommand::CurveTo { ctrl1, ctrl2, to } => PathCommand::CurveTo {
                ctrl1: transform.transform_point(ctrl1),
                ctrl2: transform.transform_point(ctrl2),
                to: transform.transform_point(to),
            },
            PathCommand::CloseSubpath => PathCommand::CloseSubpath,
        }
    }
}

// Consistent with `PartialEq`: 0.0 and -0.0 hash the same.
fn hash_coordinate<H: Hasher>(v: f64, state: &mut H) {
    let v = if v == 0.0 { 0.0 } else { v };
    v.to_bits().hash(state);
}

impl Hash for PathCommand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        for p in self.points() {
            hash_coordinate(p.x, state);
            hash_coordinate(p.y, state);
        }
    }
}

#[cfg(test)]
use crate::math::{point, Transform};

#[test]
fn points_per_kind() {
    let commands = [
        PathCommand::MoveTo(point(0.0, 0.0)),
        PathCommand::LineTo(point(1.0, 0.0)),
        PathCommand::QuadCurveTo {
            ctrl: point(2.0, 0.0),
            to: point(2.0, 1.0),
        },
        PathCommand::CurveTo {
            ctrl1: point(2.0, 2.0),
            ctrl2: point(1.0, 2.0),
            to: point(0.0, 2.0),
        },
        PathCommand::CloseSubpath,
    ];

    for cmd in &commands {
        assert_eq!(cmd.points().len(), cmd.kind().num_points());
    }
    assert_eq!(commands[2].end_point(), Some(point(2.0, 1.0)));
    assert_eq!(commands[4].end_point(), None);
    assert_eq!(
        commands[3].element().points.as_slice(),
        &[point(2.0, 2.0), point(1.0, 2.0), point(0.0, 2.0)]
    );
}

#[test]
fn transformed_command_keeps_kind() {
    let t = Transform::translation(1.0, 2.0);
    let cmd = PathCommand::QuadCurveTo {
        ctrl: point(0.0, 0.0),
        to: point(3.0, 3.0),
    };
    assert_eq!(
        cmd.transformed(&t),
        PathCommand::QuadCurveTo {
            ctrl: point(1.0, 2.0),
            to: point(4.0, 5.0),
        }
    );
    assert_eq!(
        PathCommand::CloseSubpath.transformed(&t),
        PathCommand::CloseSubpath
    );
}

#[test]
fn signed_zero_hashes_like_zero() {
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(cmd: &PathCommand) -> u64 {
        let mut hasher = DefaultHasher::new();
        cmd.hash(&mut hasher);
        hasher.finish()
    }

    let a = PathCommand::LineTo(point(0.0, 1.0));
    let b = PathCommand::LineTo(point(-0.0, 1.0));
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(hash_of(&a), hash_of(&PathCommand::MoveTo(point(0.0, 1.0))));
}
