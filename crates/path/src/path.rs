//! The default path data structure.
//!

use crate::builder::{Builder, PathBuilder};
use crate::commands::{PathCommand, PathElement};
use crate::events::Events;
use crate::geom::traits::Transformation;
use crate::math::*;

use std::fmt;
use std::iter::{FromIterator, IntoIterator};

/// An immutable sequence of [`PathCommand`]s.
///
/// Paths are values: they are built once (see [`Path::builder`]), never modified
/// afterwards, and compare and hash structurally, command by command.
/// Operations such as [`Path::transformed`] return new paths.
///
/// # Representation
///
/// The commands are stored in a single contiguous buffer, in the order they were
/// added.
///
/// ```ascii
///  ______________________________________________________
/// |          |          |               |              |
/// |MoveTo x,y|LineTo x,y|CurveTo c1,c2,p| CloseSubpath | ...
/// |__________|__________|_______________|______________|_
/// ```
#[derive(Clone, Default, PartialEq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    commands: Box<[PathCommand]>,
}

impl Path {
    /// Creates a [Builder](../builder/struct.Builder.html) to build a path.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Creates an empty `Path`.
    #[inline]
    pub fn new() -> Path {
        Path {
            commands: Box::new([]),
        }
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Path {
        Path {
            commands: commands.into_boxed_slice(),
        }
    }

    /// A closed rectangle, see [`PathBuilder::add_rect`].
    pub fn rect(rect: &Box2D) -> Path {
        let mut builder = Builder::with_capacity(5);
        builder.add_rect(rect);
        builder.build()
    }

    /// A closed ellipse inscribed in a rectangle, see [`PathBuilder::add_ellipse`].
    pub fn ellipse(rect: &Box2D) -> Path {
        let mut builder = Builder::with_capacity(6);
        builder.add_ellipse(rect);
        builder.build()
    }

    /// A closed rounded rectangle, see [`PathBuilder::add_rounded_rect`].
    pub fn rounded_rect(rect: &Box2D, corner_width: f64, corner_height: f64) -> Path {
        let mut builder = Builder::with_capacity(10);
        builder.add_rounded_rect(rect, corner_width, corner_height);
        builder.build()
    }

    /// Returns a builder seeded with a copy of this path's commands.
    pub fn to_builder(&self) -> Builder {
        Builder::from_commands(self.commands.to_vec())
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

    /// Iterates over the commands in order.
    pub fn iter(&self) -> std::slice::Iter<PathCommand> {
        self.commands.iter()
    }

    /// Iterates over the path as a sequence of [`PathEvent`](crate::PathEvent)s.
    pub fn events(&self) -> Events {
        Events::new(&self.commands)
    }

    /// Iterates over the commands presented as [`PathElement`]s.
    pub fn elements(&self) -> impl Iterator<Item = PathElement> + '_ {
        self.commands.iter().map(PathCommand::element)
    }

    /// Invokes the visitor exactly once per command, in order.
    ///
    /// This is how renderers consume the geometry of a path. `CloseSubpath`
    /// commands are presented too, with no points.
    pub fn enumerate<F>(&self, mut visitor: F)
    where
        F: FnMut(&PathElement),
    {
        for element in self.elements() {
            visitor(&element);
        }
    }

    /// The smallest rectangle containing every endpoint and control point.
    ///
    /// Curves are not evaluated, so the rectangle is a conservative bound of the
    /// rendered shape. Returns `None` if the path has no point.
    pub fn bounding_box(&self) -> Option<Box2D> {
        let mut points = self.commands.iter().flat_map(|cmd| cmd.points());
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (Point::min(min, p), Point::max(max, p))
        });

        Some(Box2D { min, max })
    }

    /// The end point of the last command that has one.
    ///
    /// `CloseSubpath` is skipped: closing a sub-path does not move the current point
    /// back to the start of the sub-path. Returns the origin if the path has no point.
    pub fn current_point(&self) -> Point {
        current_point(&self.commands).unwrap_or_else(Point::origin)
    }

    /// Returns the rectangle if this path is exactly one closed axis-aligned rectangle.
    ///
    /// The path must be made of a `MoveTo`, three `LineTo` and a `CloseSubpath`, and
    /// the four points must have exactly two distinct x and two distinct y coordinates.
    /// The order of the points isn't checked.
    pub fn is_rectangle(&self) -> Option<Box2D> {
        let points = match *self.commands {
            [PathCommand::MoveTo(a), PathCommand::LineTo(b), PathCommand::LineTo(c), PathCommand::LineTo(d), PathCommand::CloseSubpath] => {
                [a, b, c, d]
            }
            _ => {
                return None;
            }
        };

        let mut xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let mut ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        for v in [&mut xs, &mut ys] {
            v.sort_by(|a, b| a.total_cmp(b));
            v.dedup();
            if v.len() != 2 {
                return None;
            }
        }

        Some(Box2D {
            min: point(xs[0], ys[0]),
            max: point(xs[1], ys[1]),
        })
    }

    /// Returns a new path with every point transformed.
    pub fn transformed<T: Transformation<f64>>(&self, transform: &T) -> Self {
        self.commands
            .iter()
            .map(|cmd| cmd.transformed(transform))
            .collect()
    }
}

pub(crate) fn current_point(commands: &[PathCommand]) -> Option<Point> {
    commands.iter().rev().find_map(PathCommand::end_point)
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<T: IntoIterator<Item = PathCommand>>(iter: T) -> Path {
        Path::from_commands(iter.into_iter().collect())
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = &'l PathCommand;
    type IntoIter = std::slice::Iter<'l, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "\"{}\"", self)
    }
}

#[cfg(test)]
use crate::commands::ElementKind;

#[test]
fn empty_path() {
    let path = Path::new();
    assert!(path.is_empty());
    assert_eq!(path.bounding_box(), None);
    assert_eq!(path.current_point(), point(0.0, 0.0));
    assert_eq!(path.is_rectangle(), None);
    assert_eq!(path, Path::builder().build());
}

#[test]
fn loose_bounding_box() {
    let mut builder = Path::builder();
    builder.move_to(point(-10.0, -3.0));
    builder.line_to(point(0.0, -12.0));
    builder.quadratic_bezier_to(point(3.0, 4.0), point(5.0, 3.0));
    builder.close();
    let path = builder.build();

    assert_eq!(
        path.bounding_box(),
        Some(Box2D {
            min: point(-10.0, -12.0),
            max: point(5.0, 4.0)
        }),
    );

    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.cubic_bezier_to(point(-1.0, 2.0), point(3.0, -4.0), point(1.0, -1.0));
    let path = builder.build();

    // Control points are included even though the curve doesn't reach them.
    assert_eq!(
        path.bounding_box(),
        Some(Box2D {
            min: point(-1.0, -4.0),
            max: point(3.0, 2.0)
        }),
    );

    let closes = Path::from_commands(vec![PathCommand::CloseSubpath]);
    assert_eq!(closes.bounding_box(), None);
}

#[test]
fn current_point_skips_close() {
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    builder.quadratic_bezier_to(point(10.0, 10.0), point(5.0, 10.0));
    let open = builder.snapshot();
    assert_eq!(open.current_point(), point(5.0, 10.0));

    builder.close();
    let closed = builder.build();
    // Closing does not move the current point back to (0, 0).
    assert_eq!(closed.current_point(), point(5.0, 10.0));
}

#[test]
fn rectangle_detection() {
    let r = rect(1.0, 2.0, 3.0, 4.0);
    assert_eq!(Path::rect(&r).is_rectangle(), Some(r));

    // Same rectangle, clockwise.
    let cw = Path::from_commands(vec![
        PathCommand::MoveTo(point(1.0, 2.0)),
        PathCommand::LineTo(point(1.0, 6.0)),
        PathCommand::LineTo(point(4.0, 6.0)),
        PathCommand::LineTo(point(4.0, 2.0)),
        PathCommand::CloseSubpath,
    ]);
    assert_eq!(cw.is_rectangle(), Some(r));

    // Not closed.
    let open = Path::from_commands(cw.commands()[..4].to_vec());
    assert_eq!(open.is_rectangle(), None);

    // Only the coordinates are looked at, crossing edges are accepted.
    let bowtie = Path::from_commands(vec![
        PathCommand::MoveTo(point(0.0, 0.0)),
        PathCommand::LineTo(point(1.0, 1.0)),
        PathCommand::LineTo(point(0.0, 1.0)),
        PathCommand::LineTo(point(1.0, 0.0)),
        PathCommand::CloseSubpath,
    ]);
    assert_eq!(bowtie.is_rectangle(), Some(rect(0.0, 0.0, 1.0, 1.0)));

    // Three distinct x coordinates.
    let skewed = Path::from_commands(vec![
        PathCommand::MoveTo(point(0.0, 0.0)),
        PathCommand::LineTo(point(2.0, 0.0)),
        PathCommand::LineTo(point(3.0, 1.0)),
        PathCommand::LineTo(point(0.0, 1.0)),
        PathCommand::CloseSubpath,
    ]);
    assert_eq!(skewed.is_rectangle(), None);

    // Flat.
    let flat = Path::from_commands(vec![
        PathCommand::MoveTo(point(0.0, 0.0)),
        PathCommand::LineTo(point(1.0, 0.0)),
        PathCommand::LineTo(point(2.0, 0.0)),
        PathCommand::LineTo(point(3.0, 0.0)),
        PathCommand::CloseSubpath,
    ]);
    assert_eq!(flat.is_rectangle(), None);
}

#[test]
fn enumerate_in_order() {
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.quadratic_bezier_to(point(2.0, 0.0), point(2.0, 1.0));
    builder.cubic_bezier_to(point(2.0, 2.0), point(1.0, 2.0), point(0.0, 2.0));
    builder.close();
    let path = builder.build();

    let mut visited = Vec::new();
    path.enumerate(|element| visited.push((element.kind, element.points.len())));

    assert_eq!(
        visited,
        vec![
            (ElementKind::MoveTo, 1),
            (ElementKind::LineTo, 1),
            (ElementKind::QuadCurveTo, 2),
            (ElementKind::CurveTo, 3),
            (ElementKind::CloseSubpath, 0),
        ]
    );
}

#[test]
fn transformed_path() {
    let path = Path::rect(&rect(0.0, 0.0, 1.0, 1.0));
    let transformed = path.transformed(&Transform::scale(2.0, 3.0));

    assert_eq!(transformed.len(), path.len());
    assert_eq!(transformed.is_rectangle(), Some(rect(0.0, 0.0, 2.0, 3.0)));
    assert_ne!(transformed, path);
}

#[test]
fn structural_equality_and_hash() {
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    let a = Path::ellipse(&rect(0.0, 0.0, 10.0, 5.0));
    let b = Path::ellipse(&rect(0.0, 0.0, 10.0, 5.0));
    let c = Path::ellipse(&rect(0.0, 0.0, 10.0, 6.0));
    assert_eq!(a, b);
    assert_ne!(a, c);

    let mut ha = std::collections::hash_map::DefaultHasher::new();
    let mut hb = std::collections::hash_map::DefaultHasher::new();
    a.hash(&mut ha);
    b.hash(&mut hb);
    assert_eq!(ha.finish(), hb.finish());

    let set: HashSet<u64> = [&a, &b, &c]
        .iter()
        .map(|p| {
            let mut h = std::collections::hash_map::DefaultHasher::new();
            p.hash(&mut h);
            h.finish()
        })
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn to_builder_copies() {
    let path = Path::rect(&rect(0.0, 0.0, 1.0, 1.0));
    let mut builder = path.to_builder();
    builder.add_rect(&rect(5.0, 5.0, 1.0, 1.0));
    let bigger = builder.build();

    assert_eq!(path.len(), 5);
    assert_eq!(bigger.len(), 10);
    assert_eq!(&bigger.commands()[..5], path.commands());
}
