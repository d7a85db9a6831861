use eqsnap::{axes_overlap, GlyphBox};

#[test]
fn box_overlaps_itself() {
    let b = GlyphBox::new(5, 5, 20, 30);
    assert!(b.overlaps(&b));
}

#[test]
fn disjoint_boxes_do_not_overlap() {
    let a = GlyphBox::new(0, 0, 10, 10);
    let b = GlyphBox::new(50, 50, 10, 10);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn overlap_on_one_axis_only_is_not_overlap() {
    // Same vertical band, far apart horizontally.
    let a = GlyphBox::new(0, 10, 10, 10);
    let b = GlyphBox::new(40, 10, 10, 10);
    assert!(!a.overlaps(&b));

    // Same horizontal band, far apart vertically.
    let c = GlyphBox::new(10, 0, 10, 10);
    let d = GlyphBox::new(10, 40, 10, 10);
    assert!(!c.overlaps(&d));
}

#[test]
fn touching_endpoints_count_as_overlap() {
    assert!(axes_overlap(0, 10, 10, 5));
    assert!(axes_overlap(10, 5, 0, 10));

    // Boxes sharing exactly one corner pixel overlap on both axes.
    let a = GlyphBox::new(0, 0, 10, 10);
    let b = GlyphBox::new(10, 10, 5, 5);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn contained_box_overlaps() {
    let outer = GlyphBox::new(0, 0, 100, 100);
    let inner = GlyphBox::new(20, 20, 10, 10);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn axes_overlap_is_symmetric() {
    let cases = [(0u32, 10u32, 5u32, 10u32), (3, 2, 4, 8), (0, 1, 2, 3)];
    for (c1, d1, c2, d2) in cases {
        assert_eq!(axes_overlap(c1, d1, c2, d2), axes_overlap(c2, d2, c1, d1));
    }
}
