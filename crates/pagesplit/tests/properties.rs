use pagesplit::adaptation::{adapt_cutter, adapt_cutters, adapt_page_layout, correct_layout_type};
use pagesplit::bounding_volume::Aabb;
use pagesplit::layout::{LayoutType, PageLayout};
use pagesplit::math::{Point, Real, Vector};
use pagesplit::shape::Segment;
use pagesplit::utils::lines_intersection2d;

fn rand_real(rng: &mut oorandom::Rand32, min: Real, max: Real) -> Real {
    min + Real::from(rng.rand_float()) * (max - min)
}

fn random_outline(rng: &mut oorandom::Rand32) -> Aabb {
    let origin = Point::new(rand_real(rng, -50.0, 50.0), rand_real(rng, -50.0, 50.0));
    let extents = Vector::new(rand_real(rng, 10.0, 500.0), rand_real(rng, 10.0, 500.0));
    Aabb::from_origin_and_extents(origin, extents)
}

/// A cutter that is neither null nor horizontal.
fn random_cutter(rng: &mut oorandom::Rand32) -> Segment {
    let a = Point::new(rand_real(rng, -100.0, 600.0), rand_real(rng, -100.0, 600.0));
    let dy = rand_real(rng, 1.0, 300.0);
    let dx = rand_real(rng, -300.0, 300.0);
    Segment::new(a, a + Vector::new(dx, dy))
}

fn random_layout(rng: &mut oorandom::Rand32) -> PageLayout {
    let outline = random_outline(rng);
    match rng.rand_range(0..3) {
        0 => PageLayout::single_page_uncut(outline),
        1 => PageLayout::two_pages(outline, random_cutter(rng)),
        _ => PageLayout::single_page_cut(outline, random_cutter(rng), random_cutter(rng)),
    }
}

#[test]
fn adapted_cutters_span_the_outline() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let outline = random_outline(&mut rng);
        let cutter = random_cutter(&mut rng);
        let adapted = adapt_cutter(&cutter, &outline);

        assert_eq!(adapted.a.y, outline.top(), "{cutter:?} in {outline:?}");
        assert_eq!(adapted.b.y, outline.bottom(), "{cutter:?} in {outline:?}");
        for pt in [adapted.a, adapted.b] {
            assert!(
                pt.x >= outline.left() && pt.x <= outline.right(),
                "{cutter:?} adapted to {adapted:?} leaves {outline:?}"
            );
        }
    }
}

#[test]
fn adapted_cutter_pairs_do_not_cross_inside_the_outline() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..1000 {
        let outline = random_outline(&mut rng);
        let cutters = [random_cutter(&mut rng), random_cutter(&mut rng)];
        let adapted = adapt_cutters(&cutters, &outline);

        assert_eq!(adapted.len(), 2);
        assert!(adapted[0].a.x <= adapted[1].a.x);

        if let Some(crossing) = lines_intersection2d(&adapted[0], &adapted[1], 0.0).point() {
            let tolerance = outline.height() * 1.0e-6;
            assert!(
                crossing.y <= outline.top() + tolerance
                    || crossing.y >= outline.bottom() - tolerance,
                "{cutters:?} adapted to {adapted:?} still cross at {crossing:?} in {outline:?}"
            );
        }
    }
}

#[test]
fn layout_types_are_only_ever_downgraded() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..1000 {
        let layout = random_layout(&mut rng);
        let corrected = correct_layout_type(&layout);
        assert!(corrected == layout || corrected == layout.downgraded());

        let new_outline = random_outline(&mut rng);
        let adapted = adapt_page_layout(&layout, &new_outline);
        assert_eq!(adapted.outline(), &new_outline);
        assert!(
            adapted.layout_type() == layout.layout_type()
                || adapted.layout_type() == LayoutType::SinglePageUncut,
            "{layout:?} adapted to {adapted:?}"
        );
    }
}

#[test]
fn adaptation_to_the_current_outline_is_the_identity() {
    let mut rng = oorandom::Rand32::new(99);

    for _ in 0..200 {
        let layout = random_layout(&mut rng);
        assert_eq!(adapt_page_layout(&layout, layout.outline()), layout);
    }
}

#[test]
fn degenerate_inputs_fall_back_to_the_input_cutter() {
    let mut rng = oorandom::Rand32::new(3);

    for _ in 0..200 {
        let outline = random_outline(&mut rng);
        let cutter = random_cutter(&mut rng);
        let null = Segment::new(cutter.a, cutter.a);
        let flat = Aabb::new(outline.mins, Point::new(outline.right(), outline.top()));

        assert_eq!(adapt_cutter(&null, &outline), null);
        assert_eq!(adapt_cutter(&cutter, &flat), cutter);
        assert_eq!(adapt_cutter(&cutter, &Aabb::new_invalid()), cutter);
    }
}
