use crate::flatten;
use crate::scalar::Scalar;
use crate::segment::{impl_segment, Segment};
use crate::{Box2D, LineSegment, Point};
use arrayvec::ArrayVec;

#[cfg(test)]
use crate::point;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * S::THREE * one_t2 * t
            + self.ctrl2.to_vector() * S::THREE * one_t * t2
            + self.to.to_vector() * t3
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.to
    }

    /// Split this curve into two sub-curves (de Casteljau).
    pub fn split(&self, t: S) -> (CubicBezierSegment<S>, CubicBezierSegment<S>) {
        let ctrl1a = self.from + (self.ctrl1 - self.from) * t;
        let ctrl2a = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl1aa = ctrl1a + (ctrl2a - ctrl1a) * t;
        let ctrl3a = self.ctrl2 + (self.to - self.ctrl2) * t;
        let ctrl2aa = ctrl2a + (ctrl3a - ctrl2a) * t;
        let ctrl1aaa = ctrl1aa + (ctrl2aa - ctrl1aa) * t;

        (
            CubicBezierSegment {
                from: self.from,
                ctrl1: ctrl1a,
                ctrl2: ctrl1aa,
                to: ctrl1aaa,
            },
            CubicBezierSegment {
                from: ctrl1aaa,
                ctrl1: ctrl2aa,
                ctrl2: ctrl3a,
                to: self.to,
            },
        )
    }

    #[inline]
    pub fn baseline(&self) -> LineSegment<S> {
        LineSegment {
            from: self.from,
            to: self.to,
        }
    }

    /// Maximum distance between the control points and the baseline.
    ///
    /// Falls back to the maximum distance between the control points and `from`
    /// when the baseline has no length.
    pub fn flatness(&self) -> S {
        let baseline = self.baseline();
        match (
            baseline.line_distance_to_point(self.ctrl1),
            baseline.line_distance_to_point(self.ctrl2),
        ) {
            (Some(d1), Some(d2)) => S::max(d1, d2),
            _ => S::max(
                (self.ctrl1 - self.from).length(),
                (self.ctrl2 - self.from).length(),
            ),
        }
    }

    /// Approximates the curve with a fixed number of line segments
    /// ([`CUBIC_STEPS`](flatten::CUBIC_STEPS)).
    pub fn for_each_sampled<F>(&self, callback: &mut F)
    where
        F: FnMut(&LineSegment<S>),
    {
        flatten::for_each_sampled(self, flatten::CUBIC_STEPS, callback);
    }

    /// Approximates the curve by recursive subdivision until each piece's flatness
    /// is below `tolerance`, or `max_depth` is reached.
    pub fn for_each_subdivided<F>(&self, tolerance: S, max_depth: u32, callback: &mut F)
    where
        F: FnMut(&LineSegment<S>),
    {
        flatten::for_each_subdivided(self, tolerance, max_depth, callback);
    }

    /// Returns the smallest rectangle that contains the curve.
    pub fn bounding_box(&self) -> Box2D<S> {
        let mut min = Point::min(self.from, self.to);
        let mut max = Point::max(self.from, self.to);

        let tx = local_extrema_t(self.from.x, self.ctrl1.x, self.ctrl2.x, self.to.x);
        let ty = local_extrema_t(self.from.y, self.ctrl1.y, self.ctrl2.y, self.to.y);
        for t in tx.iter().chain(ty.iter()) {
            let p = self.sample(*t);
            min = Point::min(min, p);
            max = Point::max(max, p);
        }

        Box2D { min, max }
    }
}

// Roots within ]0, 1[ of the derivative of a one-dimensional cubic bézier.
fn local_extrema_t<S: Scalar>(p0: S, p1: S, p2: S, p3: S) -> ArrayVec<S, 2> {
    let mut result = ArrayVec::new();

    // at² + bt + c = 0
    let a = S::THREE * (-p0 + S::THREE * p1 - S::THREE * p2 + p3);
    let b = S::SIX * (p0 - S::TWO * p1 + p2);
    let c = S::THREE * (p1 - p0);

    let mut push = |t: S| {
        if t > S::ZERO && t < S::ONE {
            result.push(t);
        }
    };

    if S::abs(a) <= S::EPSILON {
        if S::abs(b) > S::EPSILON {
            push(-c / b);
        }
        return result;
    }

    let discriminant = b * b - S::FOUR * a * c;
    if discriminant < S::ZERO {
        return result;
    }

    let sqrt_d = discriminant.sqrt();
    let t1 = (-b + sqrt_d) / (S::TWO * a);
    let t2 = (-b - sqrt_d) / (S::TWO * a);
    push(t1);
    if t2 != t1 {
        push(t2);
    }

    result
}

impl<S: Scalar> Segment for CubicBezierSegment<S> {
    impl_segment!(S);
}

#[test]
fn split_cubic_at_half() {
    let c = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 4.0),
        ctrl2: point(4.0, 4.0),
        to: point(4.0, 0.0),
    };
    let (a, b) = c.split(0.5);
    assert_eq!(a.from, c.from);
    assert_eq!(a.to, point(2.0, 3.0));
    assert_eq!(b.from, point(2.0, 3.0));
    assert_eq!(b.to, c.to);
    assert_eq!(a.to, c.sample(0.5));
}

#[test]
fn cubic_tight_bounding_box() {
    let c = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 4.0),
        ctrl2: point(4.0, 4.0),
        to: point(4.0, 0.0),
    };

    let tight = c.bounding_box();
    assert_eq!(tight.min, point(0.0, 0.0));
    assert!((tight.max.y - 3.0).abs() < 1e-9);
    assert_eq!(tight.max.x, 4.0);
}

#[test]
fn cubic_flatness() {
    let c = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(2.0, -3.0),
        to: point(3.0, 0.0),
    };
    assert_eq!(c.flatness(), 3.0);

    let loop_ = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(3.0, 4.0),
        ctrl2: point(0.0, 2.0),
        to: point(0.0, 0.0),
    };
    assert_eq!(loop_.flatness(), 5.0);
}
