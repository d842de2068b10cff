use crate::scalar::Scalar;
use crate::{LineSegment, Point};

/// Common APIs to curve segment types.
///
/// This is what the flattening algorithms of the [`flatten`](crate::flatten) module
/// operate on.
pub trait Segment: Copy + Sized {
    type Scalar: Scalar;

    /// Start of the curve.
    fn from(&self) -> Point<Self::Scalar>;

    /// End of the curve.
    fn to(&self) -> Point<Self::Scalar>;

    /// Sample the curve at t (expecting t between 0 and 1).
    fn sample(&self, t: Self::Scalar) -> Point<Self::Scalar>;

    /// Split this curve into two sub-curves.
    fn split(&self, t: Self::Scalar) -> (Self, Self);

    /// Maximum distance between the control points and the baseline.
    ///
    /// When the baseline has no length, the maximum distance between the control
    /// points and the start of the curve is used instead.
    fn flatness(&self) -> Self::Scalar;

    /// The straight line between the endpoints of the curve.
    fn baseline(&self) -> LineSegment<Self::Scalar> {
        LineSegment {
            from: self.from(),
            to: self.to(),
        }
    }
}

macro_rules! impl_segment {
    ($S:ty) => {
        type Scalar = $S;
        fn from(&self) -> Point<$S> {
            self.from()
        }
        fn to(&self) -> Point<$S> {
            self.to()
        }
        fn sample(&self, t: $S) -> Point<$S> {
            self.sample(t)
        }
        fn split(&self, t: $S) -> (Self, Self) {
            self.split(t)
        }
        fn flatness(&self) -> $S {
            self.flatness()
        }
    };
}

pub(crate) use impl_segment;
