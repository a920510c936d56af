use crate::math::{Point, Real};
use crate::shape::Segment;

/// Intersection between the infinite lines supporting two segments.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum LineIntersection {
    /// The lines are parallel (or one of them is degenerate): no single intersection point.
    Parallel,
    /// The lines cross at a point lying on both segments.
    Bounded(Point<Real>),
    /// The lines cross at a point outside of at least one of the segments.
    Unbounded(Point<Real>),
}

impl LineIntersection {
    /// The intersection point, whether or not it lies on both segments.
    #[inline]
    pub fn point(&self) -> Option<Point<Real>> {
        match self {
            LineIntersection::Parallel => None,
            LineIntersection::Bounded(pt) | LineIntersection::Unbounded(pt) => Some(*pt),
        }
    }

    /// Does the intersection point lie on both segments?
    #[inline]
    pub fn is_bounded(&self) -> bool {
        matches!(self, LineIntersection::Bounded(_))
    }
}

/// Computes the intersection between the lines supporting `seg1` and `seg2`.
///
/// The lines are considered parallel when the cross product of their directions has a
/// magnitude smaller than or equal to `epsilon`, or is not finite.
pub fn lines_intersection2d(seg1: &Segment, seg2: &Segment, epsilon: Real) -> LineIntersection {
    let a = seg1.scaled_direction();
    let b = -seg2.scaled_direction();
    let c = seg1.a - seg2.a;

    let denom = a.y * b.x - a.x * b.y;

    if denom.abs() <= epsilon || !denom.is_finite() {
        return LineIntersection::Parallel;
    }

    let s = (b.y * c.x - b.x * c.y) / denom;
    let pt = seg1.a + a * s;

    if s < 0.0 || s > 1.0 {
        return LineIntersection::Unbounded(pt);
    }

    let t = (a.x * c.y - a.y * c.x) / denom;

    if t < 0.0 || t > 1.0 {
        LineIntersection::Unbounded(pt)
    } else {
        LineIntersection::Bounded(pt)
    }
}
