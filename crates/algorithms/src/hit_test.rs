//! Determine whether a point is inside a path.

use crate::geom::{Flattening, LineSegment};
use crate::math::{Point, Transform};
use crate::path::{FillRule, Path, PathEvent};

/// Returns whether the point is inside the path.
///
/// `transform` maps the path's coordinates to the point's coordinate space: the point
/// is brought back into the path's space through the inverse transformation before
/// testing. A transformation that can't be inverted contains nothing.
///
/// Sub-paths are implicitly closed and curves are flattened adaptively.
pub fn contains(point: Point, path: &Path, fill_rule: FillRule, transform: &Transform) -> bool {
    let point = match transform.inverse() {
        Some(inverse) => inverse.transform_point(point),
        None => {
            log::debug!("hit test with a singular transform {:?}", transform);
            return false;
        }
    };

    // Control points are included, so the loose bounds contain every curve.
    let bounds = match path.bounding_box() {
        Some(bounds) => bounds,
        None => return false,
    };
    if point.x < bounds.min.x
        || point.x > bounds.max.x
        || point.y < bounds.min.y
        || point.y > bounds.max.y
    {
        return false;
    }

    fill_rule.is_in(winding_number(point, path))
}

/// Computes the winding number of a position with respect to the path.
pub fn winding_number(point: Point, path: &Path) -> i32 {
    path_winding_number_at_position(&point, path.events(), &Flattening::ADAPTIVE)
}

/// Computes the winding number of a position with respect to a sequence of events.
///
/// Each sub-path contributes its closing edge, whether it was explicitly closed or not.
pub fn path_winding_number_at_position<Iter>(
    point: &Point,
    path: Iter,
    flattening: &Flattening,
) -> i32
where
    Iter: IntoIterator<Item = PathEvent>,
{
    // Accumulate the signed crossings of a horizontal ray going from the point
    // towards increasing x.
    let mut winding = 0;

    for evt in path {
        match evt {
            PathEvent::Begin { .. } => {}
            PathEvent::End { last, first, .. } => {
                test_segment(
                    *point,
                    &LineSegment {
                        from: last,
                        to: first,
                    },
                    &mut winding,
                );
            }
            _ => {
                let bounds = segment_range_y(&evt);
                if bounds.0 > point.y || bounds.1 < point.y {
                    continue;
                }
                evt.for_each_flattened(flattening, &mut |line| {
                    test_segment(*point, line, &mut winding);
                });
            }
        }
    }

    winding
}

// Conservative vertical range of an edge, including control points.
fn segment_range_y(evt: &PathEvent) -> (f64, f64) {
    let (mut min, mut max) = (evt.from().y, evt.from().y);
    let mut include = |y: f64| {
        min = min.min(y);
        max = max.max(y);
    };
    match *evt {
        PathEvent::Quadratic { ctrl, to, .. } => {
            include(ctrl.y);
            include(to.y);
        }
        PathEvent::Cubic {
            ctrl1, ctrl2, to, ..
        } => {
            include(ctrl1.y);
            include(ctrl2.y);
            include(to.y);
        }
        _ => include(evt.to().y),
    }

    (min, max)
}

fn test_segment(point: Point, segment: &LineSegment<f64>, winding: &mut i32) {
    let y0 = segment.from.y;
    let y1 = segment.to.y;

    let w = if y0 <= point.y && y1 > point.y {
        1
    } else if y0 > point.y && y1 <= point.y {
        -1
    } else {
        return;
    };

    if segment.solve_x_for_y(point.y) > point.x {
        *winding += w;
    }
}

#[cfg(test)]
use crate::math::{point, rect};
#[cfg(test)]
use crate::path::builder::PathBuilder;

#[test]
fn rectangle_with_hole() {
    let mut builder = Path::builder();
    builder.add_rect(&rect(0.0, 0.0, 1.0, 1.0));
    builder.move_to(point(0.25, 0.25));
    builder.line_to(point(0.25, 0.75));
    builder.line_to(point(0.75, 0.75));
    builder.line_to(point(0.75, 0.25));
    builder.close();
    let path = builder.build();
    let id = Transform::identity();

    for rule in [FillRule::EvenOdd, FillRule::NonZero] {
        assert!(!contains(point(-1.0, 0.5), &path, rule, &id));
        assert!(!contains(point(2.0, 0.5), &path, rule, &id));
        assert!(!contains(point(0.5, -0.5), &path, rule, &id));
        assert!(contains(point(0.1, 0.5), &path, rule, &id));
        assert!(contains(point(0.9, 0.5), &path, rule, &id));
        assert!(contains(point(0.5, 0.1), &path, rule, &id));
        // The hole winds the other way.
        assert!(!contains(point(0.5, 0.5), &path, rule, &id));
    }

    assert_eq!(winding_number(point(0.1, 0.5), &path), 1);
    assert_eq!(winding_number(point(0.5, 0.5), &path), 0);
}

#[test]
fn same_direction_hole() {
    let mut builder = Path::builder();
    builder.add_rect(&rect(0.0, 0.0, 4.0, 4.0));
    builder.add_rect(&rect(1.0, 1.0, 2.0, 2.0));
    let path = builder.build();
    let id = Transform::identity();

    assert_eq!(winding_number(point(2.0, 2.0), &path), 2);
    assert!(contains(point(2.0, 2.0), &path, FillRule::NonZero, &id));
    assert!(!contains(point(2.0, 2.0), &path, FillRule::EvenOdd, &id));
}

#[test]
fn implicitly_closed() {
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(4.0, 0.0));
    builder.line_to(point(4.0, 4.0));
    let triangle = builder.build();
    let id = Transform::identity();

    assert!(contains(point(3.0, 1.0), &triangle, FillRule::NonZero, &id));
    assert!(!contains(point(1.0, 3.0), &triangle, FillRule::NonZero, &id));
}

#[test]
fn curves_are_flattened() {
    let circle = Path::ellipse(&rect(-100.0, -100.0, 200.0, 200.0));
    let id = Transform::identity();

    assert!(contains(point(0.0, 0.0), &circle, FillRule::NonZero, &id));
    // Outside of the polygon joining the four curve endpoints.
    assert!(contains(point(60.0, 60.0), &circle, FillRule::NonZero, &id));
    assert!(contains(point(-60.0, -60.0), &circle, FillRule::EvenOdd, &id));
    assert!(!contains(point(80.0, 80.0), &circle, FillRule::NonZero, &id));
}

#[test]
fn transformed_point() {
    let path = Path::rect(&rect(0.0, 0.0, 1.0, 1.0));
    let t = Transform::scale(10.0, 10.0).then_translate(crate::math::vector(100.0, 0.0));

    assert!(contains(point(105.0, 5.0), &path, FillRule::NonZero, &t));
    assert!(!contains(point(0.5, 0.5), &path, FillRule::NonZero, &t));

    let singular = Transform::scale(0.0, 1.0);
    assert!(!contains(point(0.0, 0.5), &path, FillRule::NonZero, &singular));
}

#[test]
fn empty_path_contains_nothing() {
    let id = Transform::identity();
    assert!(!contains(point(0.0, 0.0), &Path::new(), FillRule::NonZero, &id));
}
