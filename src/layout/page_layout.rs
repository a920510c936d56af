use crate::bounding_volume::Aabb;
use crate::shape::Segment;
use arrayvec::ArrayVec;
use core::fmt;
use core::str::FromStr;

/// Error raised when a page layout cannot be built from untyped data.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum PageLayoutError {
    /// The number of cutter lines does not match the layout type.
    #[error("a {layout_type} layout needs {expected} cutter line(s), found {found}.")]
    CutterCountMismatch {
        /// The requested layout type.
        layout_type: LayoutType,
        /// The number of cutter lines this layout type carries.
        expected: usize,
        /// The number of cutter lines that were provided.
        found: usize,
    },
    /// The layout type name was not recognized.
    #[error("unknown page layout type `{0}`.")]
    UnknownLayoutType(String),
}

/// The classification of a page layout, without its geometry.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutType {
    /// A single page, nothing cut off.
    SinglePageUncut,
    /// A single page with a cutter line on each side.
    SinglePageCut,
    /// Two pages separated by a single cutter line.
    TwoPages,
}

impl LayoutType {
    /// The number of cutter lines a layout of this type carries.
    pub fn num_cutters(self) -> usize {
        match self {
            LayoutType::SinglePageUncut => 0,
            LayoutType::SinglePageCut => 2,
            LayoutType::TwoPages => 1,
        }
    }

    /// The number of logical pages a layout of this type produces.
    pub fn num_sub_pages(self) -> usize {
        match self {
            LayoutType::SinglePageUncut | LayoutType::SinglePageCut => 1,
            LayoutType::TwoPages => 2,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            LayoutType::SinglePageUncut => "single-uncut",
            LayoutType::SinglePageCut => "single-cut",
            LayoutType::TwoPages => "two-pages",
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LayoutType {
    type Err = PageLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            LayoutType::SinglePageUncut,
            LayoutType::SinglePageCut,
            LayoutType::TwoPages,
        ]
        .into_iter()
        .find(|ty| ty.as_str() == s)
        .ok_or_else(|| PageLayoutError::UnknownLayoutType(s.to_owned()))
    }
}

/// How a scanned page is split into logical pages.
///
/// The number of cutter lines is fixed by the variant, so a layout can never carry a cutter
/// count that contradicts its type.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f64")] {
/// use pagesplit::bounding_volume::Aabb;
/// use pagesplit::layout::{LayoutType, PageLayout};
/// use pagesplit::math::Point;
/// use pagesplit::shape::Segment;
///
/// let outline = Aabb::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
/// let cutter = Segment::new(Point::new(50.0, 0.0), Point::new(50.0, 100.0));
///
/// let layout = PageLayout::from_cutters(LayoutType::TwoPages, outline, &[cutter]).unwrap();
/// assert_eq!(layout, PageLayout::two_pages(outline, cutter));
/// assert_eq!(layout.num_sub_pages(), 2);
///
/// assert!(PageLayout::from_cutters(LayoutType::SinglePageCut, outline, &[cutter]).is_err());
/// # }
/// ```
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PageLayout {
    /// A single page covering the whole outline.
    SinglePageUncut {
        /// The uncut outline of the page.
        outline: Aabb,
    },
    /// A single page trimmed by two cutter lines.
    SinglePageCut {
        /// The uncut outline of the page.
        outline: Aabb,
        /// The two cutter lines.
        cutters: [Segment; 2],
    },
    /// Two pages separated by a single cutter line.
    TwoPages {
        /// The uncut outline of both pages.
        outline: Aabb,
        /// The line separating both pages.
        cutter: Segment,
    },
}

impl PageLayout {
    /// A single page layout covering `outline`.
    #[inline]
    pub fn single_page_uncut(outline: Aabb) -> Self {
        PageLayout::SinglePageUncut { outline }
    }

    /// A single page layout of `outline` trimmed by `cutter1` and `cutter2`.
    #[inline]
    pub fn single_page_cut(outline: Aabb, cutter1: Segment, cutter2: Segment) -> Self {
        PageLayout::SinglePageCut {
            outline,
            cutters: [cutter1, cutter2],
        }
    }

    /// A two pages layout of `outline` split along `cutter`.
    #[inline]
    pub fn two_pages(outline: Aabb, cutter: Segment) -> Self {
        PageLayout::TwoPages { outline, cutter }
    }

    /// Builds a layout of the given type from an untyped list of cutter lines.
    ///
    /// Fails if `cutters` does not hold exactly [`LayoutType::num_cutters`] lines.
    pub fn from_cutters(
        layout_type: LayoutType,
        outline: Aabb,
        cutters: &[Segment],
    ) -> Result<Self, PageLayoutError> {
        match (layout_type, cutters) {
            (LayoutType::SinglePageUncut, []) => Ok(Self::single_page_uncut(outline)),
            (LayoutType::SinglePageCut, [cutter1, cutter2]) => {
                Ok(Self::single_page_cut(outline, *cutter1, *cutter2))
            }
            (LayoutType::TwoPages, [cutter]) => Ok(Self::two_pages(outline, *cutter)),
            _ => Err(PageLayoutError::CutterCountMismatch {
                layout_type,
                expected: layout_type.num_cutters(),
                found: cutters.len(),
            }),
        }
    }

    /// The uncut outline of this layout.
    #[inline]
    pub fn outline(&self) -> &Aabb {
        match self {
            PageLayout::SinglePageUncut { outline }
            | PageLayout::SinglePageCut { outline, .. }
            | PageLayout::TwoPages { outline, .. } => outline,
        }
    }

    /// The type of this layout.
    #[inline]
    pub fn layout_type(&self) -> LayoutType {
        match self {
            PageLayout::SinglePageUncut { .. } => LayoutType::SinglePageUncut,
            PageLayout::SinglePageCut { .. } => LayoutType::SinglePageCut,
            PageLayout::TwoPages { .. } => LayoutType::TwoPages,
        }
    }

    /// The cutter lines of this layout, in storage order.
    pub fn cutter_lines(&self) -> ArrayVec<Segment, 2> {
        match self {
            PageLayout::SinglePageUncut { .. } => ArrayVec::new(),
            PageLayout::SinglePageCut { cutters, .. } => ArrayVec::from(*cutters),
            PageLayout::TwoPages { cutter, .. } => [*cutter].into_iter().collect(),
        }
    }

    /// The `i`-th cutter line, if this layout has one.
    #[inline]
    pub fn cutter_line(&self, i: usize) -> Option<Segment> {
        self.cutter_lines().get(i).copied()
    }

    /// The number of logical pages this layout produces.
    #[inline]
    pub fn num_sub_pages(&self) -> usize {
        self.layout_type().num_sub_pages()
    }

    /// This layout with the same cutter lines but a different outline.
    pub fn with_outline(&self, outline: Aabb) -> Self {
        match *self {
            PageLayout::SinglePageUncut { .. } => Self::single_page_uncut(outline),
            PageLayout::SinglePageCut { cutters, .. } => {
                Self::single_page_cut(outline, cutters[0], cutters[1])
            }
            PageLayout::TwoPages { cutter, .. } => Self::two_pages(outline, cutter),
        }
    }

    /// The uncut single page layout with the same outline as `self`.
    #[inline]
    pub fn downgraded(&self) -> Self {
        Self::single_page_uncut(*self.outline())
    }
}
