//! Various unsorted geometrical and logical operators.

pub use self::lines_intersection::{lines_intersection2d, LineIntersection};

mod lines_intersection;
