/*!
pagesplit
========

**pagesplit** keeps the split definition of a scanned page valid while the
page outline changes. A page is either left uncut, cut on both sides, or split
into two pages by a single cutter line. Whenever the outline is recomputed
(after deskewing or re-cropping), the cutters are re-fitted to the new
rectangle and the layout falls back to an uncut page when its cutters no
longer describe a real cut.

```
# #[cfg(feature = "f64")] {
use pagesplit::adaptation::adapt_page_layout;
use pagesplit::bounding_volume::Aabb;
use pagesplit::layout::{LayoutType, PageLayout};
use pagesplit::math::Point;
use pagesplit::shape::Segment;

let outline = Aabb::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
let gutter = Segment::new(Point::new(50.0, 0.0), Point::new(50.0, 100.0));
let layout = PageLayout::two_pages(outline, gutter);

let wider = Aabb::new(Point::new(0.0, 0.0), Point::new(200.0, 100.0));
let adapted = adapt_page_layout(&layout, &wider);
assert_eq!(adapted.layout_type(), LayoutType::TwoPages);
assert_eq!(adapted.cutter_line(0), Some(gutter));
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod adaptation;
pub mod bounding_volume;
pub mod layout;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type, in page coordinates (y grows downward).
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;
}
