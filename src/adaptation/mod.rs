//! Adaptation of page layouts to a recomputed page outline.
//!
//! When the outline of a page changes (after deskewing or re-cropping), the cutter lines of its
//! layout must be re-fitted so that they:
//! - span the new outline from its top border to its bottom border,
//! - stay within its horizontal bounds,
//! - do not cross each other inside the page.
//!
//! A layout whose cutters end up on the page border, or crossing or collapsed onto each other,
//! no longer describes a real cut and falls back to [`PageLayout::SinglePageUncut`].
//!
//! All the functions of this module are pure: they never fail and never modify their inputs.
//!
//! [`PageLayout::SinglePageUncut`]: crate::layout::PageLayout::SinglePageUncut

pub use self::cutter::{
    adapt_cutter, adapt_cutter_with_tolerances, adapt_cutters, adapt_cutters_with_tolerances,
};
pub use self::layout_type::{correct_layout_type, correct_layout_type_with_tolerances};
pub use self::page_layout_adapter::{adapt_page_layout, adapt_page_layout_with_tolerances};
pub use self::tolerances::AdaptationTolerances;

mod cutter;
mod layout_type;
mod page_layout_adapter;
mod tolerances;
