//! Definition of the segment shape.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};

use approx::{AbsDiffEq, RelativeEq};

/// Relative tolerance under which two coordinates of a segment are considered equal.
#[cfg(feature = "f64")]
const NULL_MAX_RELATIVE: Real = 1.0e-12;
#[cfg(feature = "f32")]
const NULL_MAX_RELATIVE: Real = 1.0e-5;

/// A segment shape.
///
/// Cutter lines are segments directed from `a` to `b`. Once fitted to an outline, `a` lies on
/// its top border and `b` on its bottom border.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// Is this segment too short to define a direction?
    ///
    /// Both vertices are compared coordinate-wise, relatively to their magnitude, so a tiny
    /// segment far from the origin is null as well. A null segment carries no line, so nothing
    /// can be intersected with it.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.a.relative_eq(&self.b, DEFAULT_EPSILON, NULL_MAX_RELATIVE)
    }

    /// Do both vertices share exactly the same x coordinate?
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.a.x == self.b.x
    }

    /// This segment with both vertices rounded to the nearest integer coordinates.
    pub fn rounded(&self) -> Self {
        Segment::new(self.a.map(Real::round), self.b.map(Real::round))
    }

    /// This segment with its first vertex replaced by `a`.
    #[inline]
    pub fn with_a(self, a: Point<Real>) -> Self {
        Segment { a, ..self }
    }

    /// This segment with its second vertex replaced by `b`.
    #[inline]
    pub fn with_b(self, b: Point<Real>) -> Self {
        Segment { b, ..self }
    }
}

impl AbsDiffEq for Segment {
    type Epsilon = Real;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon) && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl RelativeEq for Segment {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.a.relative_eq(&other.a, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
    }
}
