use crate::adaptation::AdaptationTolerances;
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Segment;
use crate::utils::lines_intersection2d;
use ordered_float::OrderedFloat;

/// Fits a cutter line to the top and bottom borders of `rect`.
///
/// See [`adapt_cutter_with_tolerances`] for details.
pub fn adapt_cutter(cutter: &Segment, rect: &Aabb) -> Segment {
    adapt_cutter_with_tolerances(cutter, rect, &AdaptationTolerances::default())
}

/// Fits a cutter line to the top and bottom borders of `rect`.
///
/// The line supporting `cutter` is intersected with both horizontal borders of `rect`, and each
/// intersection is snapped horizontally into `[rect.left(), rect.right()]`. The result runs from
/// the top border to the bottom border.
///
/// The cutter is returned unchanged if `rect` is invalid, if `cutter` is null, or if its line
/// never reaches one of the borders (i.e. it is horizontal).
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f64")] {
/// use pagesplit::adaptation::{adapt_cutter_with_tolerances, AdaptationTolerances};
/// use pagesplit::bounding_volume::Aabb;
/// use pagesplit::math::Point;
/// use pagesplit::shape::Segment;
///
/// let rect = Aabb::new(Point::new(0.0, 0.0), Point::new(100.0, 200.0));
/// let cutter = Segment::new(Point::new(40.0, 50.0), Point::new(60.0, 150.0));
///
/// let adapted = adapt_cutter_with_tolerances(&cutter, &rect, &AdaptationTolerances::default());
/// assert_eq!(adapted, Segment::new(Point::new(30.0, 0.0), Point::new(70.0, 200.0)));
/// # }
/// ```
pub fn adapt_cutter_with_tolerances(
    cutter: &Segment,
    rect: &Aabb,
    tolerances: &AdaptationTolerances,
) -> Segment {
    if !rect.is_valid() || cutter.is_null() {
        return *cutter;
    }

    let top = lines_intersection2d(&rect.top_border(), cutter, tolerances.parallel_epsilon);
    let bottom = lines_intersection2d(&rect.bottom_border(), cutter, tolerances.parallel_epsilon);

    match (top.point(), bottom.point()) {
        (Some(top), Some(bottom)) => Segment::new(
            Point::new(rect.clamp_x(top.x), top.y),
            Point::new(rect.clamp_x(bottom.x), bottom.y),
        ),
        _ => {
            log::debug!("Cutter {cutter:?} does not reach the borders of {rect:?}; left as is.");
            *cutter
        }
    }
}

/// Fits several cutter lines to `rect` and resolves their crossings.
///
/// See [`adapt_cutters_with_tolerances`] for details.
pub fn adapt_cutters(cutters: &[Segment], rect: &Aabb) -> Vec<Segment> {
    adapt_cutters_with_tolerances(cutters, rect, &AdaptationTolerances::default())
}

/// Fits several cutter lines to `rect` and resolves their crossings.
///
/// Each cutter is first fitted independently with [`adapt_cutter_with_tolerances`]. The
/// results are then sorted by the x coordinate of their first point, so the output order may
/// differ from the input order.
///
/// Two neighboring cutters crossing strictly between the top and bottom of `rect` are both
/// truncated at the crossing abscissa so that they meet on a border instead:
/// - on the bottom border if the crossing lies in the bottom half of `rect` (a crossing exactly
///   at mid-height counts as bottom half). Their second points are moved.
/// - on the top border otherwise. Their first points are moved.
pub fn adapt_cutters_with_tolerances(
    cutters: &[Segment],
    rect: &Aabb,
    tolerances: &AdaptationTolerances,
) -> Vec<Segment> {
    let mut adapted = cutters.to_vec();
    adapt_cutters_in_place(&mut adapted, rect, tolerances);
    adapted
}

pub(crate) fn adapt_cutters_in_place(
    cutters: &mut [Segment],
    rect: &Aabb,
    tolerances: &AdaptationTolerances,
) {
    for cutter in cutters.iter_mut() {
        *cutter = adapt_cutter_with_tolerances(cutter, rect, tolerances);
    }

    cutters.sort_by_key(|cutter| OrderedFloat(cutter.a.x));

    let top = rect.top();
    let bottom = rect.bottom();
    let half_height: Real = (bottom - top) / 2.0;

    for i in 1..cutters.len() {
        let left = cutters[i - 1];
        let right = cutters[i];

        let Some(crossing) =
            lines_intersection2d(&left, &right, tolerances.parallel_epsilon).point()
        else {
            continue;
        };

        if !rect.contains_y_strictly(crossing.y) {
            continue;
        }

        if bottom - crossing.y <= half_height {
            let meeting_point = Point::new(crossing.x, bottom);
            cutters[i - 1] = left.with_b(meeting_point);
            cutters[i] = right.with_b(meeting_point);
        } else {
            let meeting_point = Point::new(crossing.x, top);
            cutters[i - 1] = left.with_a(meeting_point);
            cutters[i] = right.with_a(meeting_point);
        }

        log::debug!(
            "Cutters {left:?} and {right:?} crossed at {crossing:?}; truncated to meet at x = {}.",
            crossing.x
        );
    }
}
