//! Shapes supported by pagesplit.

pub use self::segment::Segment;

mod segment;
