//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};
use crate::shape::Segment;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

/// An Axis-Aligned Bounding Box (AABB), used as the outline of a page.
///
/// The outline is the rectangle bounding the usable area of a scanned page once it has been
/// deskewed and cropped. It is expressed in page coordinates, where the y axis grows
/// downward:
///
/// - **top**: `mins.y`
/// - **bottom**: `maxs.y`
/// - **left**: `mins.x`
/// - **right**: `maxs.x`
///
/// An outline is only [valid](Aabb::is_valid) when both its width and height are strictly
/// positive. Adaptation against an invalid outline leaves cutter lines untouched.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f64")] {
/// use pagesplit::bounding_volume::Aabb;
/// use pagesplit::math::{Point, Vector};
///
/// let outline = Aabb::from_origin_and_extents(Point::new(10.0, 20.0), Vector::new(200.0, 300.0));
///
/// assert_eq!(outline.left(), 10.0);
/// assert_eq!(outline.top(), 20.0);
/// assert_eq!(outline.right(), 210.0);
/// assert_eq!(outline.bottom(), 320.0);
/// assert!(outline.is_valid());
/// # }
/// ```
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The top-left corner: the point with minimum coordinates.
    pub mins: Point<Real>,
    /// The bottom-right corner: the point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its top-left corner and its dimensions.
    #[inline]
    pub fn from_origin_and_extents(origin: Point<Real>, extents: Vector<Real>) -> Aabb {
        Aabb::new(origin, origin + extents)
    }

    /// Creates an invalid AABB with inverted bounds.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Point::new(Real::MAX, Real::MAX),
            Point::new(-Real::MAX, -Real::MAX),
        )
    }

    /// The x coordinate of the left edge.
    #[inline]
    pub fn left(&self) -> Real {
        self.mins.x
    }

    /// The x coordinate of the right edge.
    #[inline]
    pub fn right(&self) -> Real {
        self.maxs.x
    }

    /// The y coordinate of the top edge.
    #[inline]
    pub fn top(&self) -> Real {
        self.mins.y
    }

    /// The y coordinate of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> Real {
        self.maxs.y
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The width of this `Aabb`.
    #[inline]
    pub fn width(&self) -> Real {
        self.maxs.x - self.mins.x
    }

    /// The height of this `Aabb`.
    #[inline]
    pub fn height(&self) -> Real {
        self.maxs.y - self.mins.y
    }

    /// Is this AABB non-empty, with finite, strictly positive width and height?
    #[inline]
    pub fn is_valid(&self) -> bool {
        let extents = self.extents();
        extents.x > 0.0 && extents.y > 0.0 && extents.x.is_finite() && extents.y.is_finite()
    }

    /// The top edge of this AABB, oriented from left to right.
    pub fn top_border(&self) -> Segment {
        Segment::new(
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
        )
    }

    /// The bottom edge of this AABB, oriented from left to right.
    pub fn bottom_border(&self) -> Segment {
        Segment::new(
            Point::new(self.left(), self.bottom()),
            Point::new(self.right(), self.bottom()),
        )
    }

    /// Snaps `x` to the horizontal span `[left, right]` of this AABB.
    ///
    /// Never panics, even if the AABB is inverted or `x` is NaN.
    #[inline]
    pub fn clamp_x(&self, x: Real) -> Real {
        if x < self.left() {
            self.left()
        } else if x > self.right() {
            self.right()
        } else {
            x
        }
    }

    /// Does `y` lie strictly between the top and bottom edges?
    #[inline]
    pub fn contains_y_strictly(&self, y: Real) -> bool {
        y > self.top() && y < self.bottom()
    }

    /// This AABB with every bound rounded to the nearest integer.
    pub fn rounded(&self) -> Self {
        Self::new(self.mins.map(Real::round), self.maxs.map(Real::round))
    }
}

impl AbsDiffEq for Aabb {
    type Epsilon = Real;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.mins.abs_diff_eq(&other.mins, epsilon) && self.maxs.abs_diff_eq(&other.maxs, epsilon)
    }
}

impl RelativeEq for Aabb {
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
        self.mins.relative_eq(&other.mins, epsilon, max_relative)
            && self.maxs.relative_eq(&other.maxs, epsilon, max_relative)
    }
}

impl UlpsEq for Aabb {
    #[inline]
    fn default_max_ulps() -> u32 {
        Real::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.mins.ulps_eq(&other.mins, epsilon, max_ulps)
            && self.maxs.ulps_eq(&other.maxs, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_boxes_are_invalid() {
        let flat = Aabb::new(Point::new(0.0, 10.0), Point::new(100.0, 10.0));
        let inverted = Aabb::new(Point::new(100.0, 0.0), Point::new(0.0, 100.0));
        let unbounded = Aabb::new(Point::new(0.0, 0.0), Point::new(Real::INFINITY, 10.0));

        assert!(!flat.is_valid());
        assert!(!inverted.is_valid());
        assert!(!unbounded.is_valid());
        assert!(!Aabb::new_invalid().is_valid());
    }

    #[test]
    fn borders_run_left_to_right() {
        let aabb = Aabb::new(Point::new(1.0, 2.0), Point::new(11.0, 22.0));

        assert_eq!(
            aabb.top_border(),
            Segment::new(Point::new(1.0, 2.0), Point::new(11.0, 2.0))
        );
        assert_eq!(
            aabb.bottom_border(),
            Segment::new(Point::new(1.0, 22.0), Point::new(11.0, 22.0))
        );
    }

    #[test]
    fn clamp_x_snaps_to_edges() {
        let aabb = Aabb::new(Point::new(10.0, 0.0), Point::new(20.0, 5.0));

        assert_eq!(aabb.clamp_x(5.0), 10.0);
        assert_eq!(aabb.clamp_x(15.0), 15.0);
        assert_eq!(aabb.clamp_x(25.0), 20.0);
    }

    #[test]
    fn vertical_span_excludes_borders() {
        let aabb = Aabb::new(Point::new(0.0, 0.0), Point::new(10.0, 100.0));

        assert!(aabb.contains_y_strictly(50.0));
        assert!(!aabb.contains_y_strictly(0.0));
        assert!(!aabb.contains_y_strictly(100.0));
        assert!(!aabb.contains_y_strictly(-1.0));
    }

    #[test]
    fn rounded_snaps_every_bound() {
        let aabb = Aabb::new(Point::new(0.4, 1.6), Point::new(99.5, 200.2));
        assert_eq!(
            aabb.rounded(),
            Aabb::new(Point::new(0.0, 2.0), Point::new(100.0, 200.0))
        );
    }

    #[test]
    fn fuzzy_equality() {
        let a = Aabb::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        let b = Aabb::new(Point::new(0.0, 0.0), Point::new(100.0 + Real::EPSILON * 10.0, 100.0));

        assert_relative_eq!(a, b);
        assert!(!relative_eq!(
            a,
            Aabb::new(Point::new(1.0, 0.0), Point::new(101.0, 100.0))
        ));
    }
}
