use crate::adaptation::cutter::adapt_cutters_in_place;
use crate::adaptation::{
    adapt_cutter_with_tolerances, correct_layout_type_with_tolerances, AdaptationTolerances,
};
use crate::bounding_volume::Aabb;
use crate::layout::PageLayout;

/// Re-fits `previous` to a recomputed page outline.
///
/// See [`adapt_page_layout_with_tolerances`] for details.
pub fn adapt_page_layout(previous: &PageLayout, new_outline: &Aabb) -> PageLayout {
    adapt_page_layout_with_tolerances(previous, new_outline, &AdaptationTolerances::default())
}

/// Re-fits `previous` to a recomputed page outline.
///
/// If the outline of `previous` is already (approximately) equal to `new_outline`, `previous`
/// is returned as is. Otherwise, its cutter lines are adapted to `new_outline` with
/// [`adapt_cutters_with_tolerances`](crate::adaptation::adapt_cutters_with_tolerances) or
/// [`adapt_cutter_with_tolerances`], and the resulting layout goes through
/// [`correct_layout_type_with_tolerances`]. An uncut layout simply takes the new outline.
pub fn adapt_page_layout_with_tolerances(
    previous: &PageLayout,
    new_outline: &Aabb,
    tolerances: &AdaptationTolerances,
) -> PageLayout {
    if relative_eq!(*previous.outline(), *new_outline) {
        return *previous;
    }

    match *previous {
        PageLayout::SinglePageCut { mut cutters, .. } => {
            adapt_cutters_in_place(&mut cutters, new_outline, tolerances);
            let adapted = PageLayout::SinglePageCut {
                outline: *new_outline,
                cutters,
            };
            correct_layout_type_with_tolerances(&adapted, tolerances)
        }
        PageLayout::TwoPages { cutter, .. } => {
            let cutter = adapt_cutter_with_tolerances(&cutter, new_outline, tolerances);
            let adapted = PageLayout::two_pages(*new_outline, cutter);
            correct_layout_type_with_tolerances(&adapted, tolerances)
        }
        PageLayout::SinglePageUncut { .. } => PageLayout::single_page_uncut(*new_outline),
    }
}
