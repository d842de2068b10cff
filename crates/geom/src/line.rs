use crate::scalar::Scalar;
use crate::{Point, Vector};

#[cfg(test)]
use crate::point;

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the x coordinate of the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn x(&self, t: S) -> S {
        self.from.x * (S::ONE - t) + self.to.x * t
    }

    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    /// The parameter at which the segment crosses the horizontal line at `y`.
    ///
    /// Returns zero for horizontal segments.
    pub fn solve_t_for_y(&self, y: S) -> S {
        let dy = self.to.y - self.from.y;
        if dy == S::ZERO {
            return S::ZERO;
        }

        (y - self.from.y) / dy
    }

    pub fn solve_x_for_y(&self, y: S) -> S {
        self.x(self.solve_t_for_y(y))
    }

    /// Distance between a point and the infinite line supporting this segment.
    ///
    /// Returns `None` if the segment has no length.
    pub fn line_distance_to_point(&self, p: Point<S>) -> Option<S> {
        let v = self.to_vector();
        let length = v.length();
        if length <= S::EPSILON {
            return None;
        }

        Some(S::abs(v.cross(p - self.from)) / length)
    }

    /// The unit vector perpendicular to the segment, pointing to its left when
    /// the y axis points up.
    ///
    /// Returns `None` if the segment has no length.
    pub fn normal(&self) -> Option<Vector<S>> {
        let v = self.to_vector();
        let length = v.length();
        if length <= S::EPSILON {
            return None;
        }

        Some(Vector::new(-v.y, v.x) / length)
    }
}

#[test]
fn line_distance_to_point() {
    let l = LineSegment {
        from: point(0.0f64, 0.0),
        to: point(4.0, 0.0),
    };

    assert_eq!(l.line_distance_to_point(point(2.0, 3.0)), Some(3.0));
    assert_eq!(l.line_distance_to_point(point(10.0, -2.0)), Some(2.0));

    let degenerate = LineSegment {
        from: point(1.0f64, 1.0),
        to: point(1.0, 1.0),
    };
    assert_eq!(degenerate.line_distance_to_point(point(2.0, 3.0)), None);
}

#[test]
fn segment_normal() {
    let l = LineSegment {
        from: point(0.0f64, 0.0),
        to: point(10.0, 0.0),
    };
    assert_eq!(l.normal(), Some(Vector::new(0.0, 1.0)));
    let back = LineSegment {
        from: l.to,
        to: l.from,
    };
    assert_eq!(back.normal(), Some(Vector::new(0.0, -1.0)));

    let p = LineSegment {
        from: point(3.0f64, 3.0),
        to: point(3.0, 3.0),
    };
    assert_eq!(p.normal(), None);
}

#[test]
fn solve_x_for_y() {
    let l = LineSegment {
        from: point(0.0f64, 0.0),
        to: point(4.0, 8.0),
    };
    assert_eq!(l.solve_x_for_y(4.0), 2.0);
    assert_eq!(l.solve_t_for_y(2.0), 0.25);

    let horizontal = LineSegment {
        from: point(1.0f64, 3.0),
        to: point(5.0, 3.0),
    };
    assert_eq!(horizontal.solve_x_for_y(3.0), 1.0);
}
