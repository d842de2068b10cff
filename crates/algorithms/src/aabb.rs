//! Bounding rectangle computation for paths.
//!
//! [`Path::bounding_box`](crate::path::Path::bounding_box) includes control points and
//! is a conservative bound. The functions here evaluate the curves instead.

use crate::geom::{CubicBezierSegment, QuadraticBezierSegment};
use crate::math::{Box2D, Point};
use crate::path::{Path, PathEvent};

/// Computes the smallest axis-aligned rectangle that contains the path.
///
/// Returns `None` if the path has no point.
pub fn bounding_box(path: &Path) -> Option<Box2D> {
    events_bounding_box(path.events())
}

/// Same as [`bounding_box`], for any sequence of events.
pub fn events_bounding_box<Iter>(events: Iter) -> Option<Box2D>
where
    Iter: IntoIterator<Item = PathEvent>,
{
    let mut bounds: Option<(Point, Point)> = None;
    for evt in events {
        evt.min_max(&mut bounds);
    }

    bounds.map(|(min, max)| Box2D { min, max })
}

#[doc(hidden)]
pub trait TightBoundingBox {
    fn min_max(&self, bounds: &mut Option<(Point, Point)>);
}

fn include(bounds: &mut Option<(Point, Point)>, r: Box2D) {
    *bounds = Some(match *bounds {
        Some((min, max)) => (Point::min(min, r.min), Point::max(max, r.max)),
        None => (r.min, r.max),
    });
}

impl TightBoundingBox for PathEvent {
    fn min_max(&self, bounds: &mut Option<(Point, Point)>) {
        match *self {
            PathEvent::Begin { at } => {
                include(bounds, Box2D { min: at, max: at });
            }
            PathEvent::Line { to, .. } => {
                include(bounds, Box2D { min: to, max: to });
            }
            PathEvent::Quadratic { from, ctrl, to } => {
                include(bounds, QuadraticBezierSegment { from, ctrl, to }.bounding_box());
            }
            PathEvent::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let curve = CubicBezierSegment {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                };
                include(bounds, curve.bounding_box());
            }
            PathEvent::End { .. } => {}
        }
    }
}

#[cfg(test)]
use crate::math::{point, rect};
#[cfg(test)]
use crate::path::builder::PathBuilder;

#[test]
fn tight_bounding_box() {
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.quadratic_bezier_to(point(1.0, 2.0), point(2.0, 0.0));
    let path = builder.build();

    let r = bounding_box(&path).unwrap();
    assert_eq!(r.min, point(0.0, 0.0));
    assert!((r.max.x - 2.0).abs() < 1e-9);
    // The curve peaks at half the height of its control point.
    assert!((r.max.y - 1.0).abs() < 1e-9);

    let loose = path.bounding_box().unwrap();
    assert_eq!(loose.max.y, 2.0);
}

#[test]
fn ellipse_bounds() {
    let r = rect(-2.0, 1.0, 6.0, 4.0);
    let tight = bounding_box(&Path::ellipse(&r)).unwrap();
    assert!((tight.min - r.min).length() < 1e-6);
    assert!((tight.max - r.max).length() < 1e-6);
}

#[test]
fn empty_bounds() {
    assert_eq!(bounding_box(&Path::new()), None);

    let mut builder = Path::builder();
    builder.move_to(point(3.0, 4.0));
    let r = bounding_box(&builder.build()).unwrap();
    assert_eq!(r.min, point(3.0, 4.0));
    assert_eq!(r.max, point(3.0, 4.0));
}
