use crate::adaptation::AdaptationTolerances;
use crate::bounding_volume::Aabb;
use crate::layout::{LayoutType, PageLayout};
use crate::shape::Segment;
use crate::utils::lines_intersection2d;

/// Downgrades `layout` to a single uncut page if its cutter lines are degenerate.
///
/// See [`correct_layout_type_with_tolerances`] for details.
pub fn correct_layout_type(layout: &PageLayout) -> PageLayout {
    correct_layout_type_with_tolerances(layout, &AdaptationTolerances::default())
}

/// Downgrades `layout` to a single uncut page if its cutter lines are degenerate.
///
/// The checks are performed on the outline and the cutter lines rounded to integer
/// coordinates. A layout is downgraded when:
/// - it has two cutter lines, both vertical and lying on the left or right edge of the outline.
/// - it has two cutter lines crossing strictly between the top and bottom of the outline.
/// - it has two parallel cutter lines starting at the same point.
/// - it has a single cutter line, vertical and lying on the left or right edge of the outline.
///
/// The result is either `layout` itself or a [`PageLayout::SinglePageUncut`] with the same
/// outline: a layout type is never upgraded.
pub fn correct_layout_type_with_tolerances(
    layout: &PageLayout,
    tolerances: &AdaptationTolerances,
) -> PageLayout {
    let outline = layout.outline().rounded();

    let degenerate = match layout {
        PageLayout::SinglePageUncut { .. } => false,
        PageLayout::SinglePageCut {
            cutters: [cutter1, cutter2],
            ..
        } => {
            let cutter1 = cutter1.rounded();
            let cutter2 = cutter2.rounded();

            let both_on_border = lies_on_vertical_border(&cutter1, &outline)
                && lies_on_vertical_border(&cutter2, &outline);

            let crossing = lines_intersection2d(&cutter1, &cutter2, tolerances.parallel_epsilon);
            let collapsed = match crossing.point() {
                Some(pt) => outline.contains_y_strictly(pt.y),
                None => cutter1.a == cutter2.a,
            };

            both_on_border || collapsed
        }
        PageLayout::TwoPages { cutter, .. } => lies_on_vertical_border(&cutter.rounded(), &outline),
    };

    if degenerate {
        log::debug!(
            "Downgrading degenerate {} layout to {}.",
            layout.layout_type(),
            LayoutType::SinglePageUncut
        );
        layout.downgraded()
    } else {
        *layout
    }
}

fn lies_on_vertical_border(cutter: &Segment, outline: &Aabb) -> bool {
    cutter.is_vertical() && (cutter.a.x == outline.left() || cutter.a.x == outline.right())
}
