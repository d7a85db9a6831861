mod common;

use eqsnap::segmentation::{crop_padded, GlyphSegmenter, GLYPH_SIZE};
use eqsnap::{GlyphBox, SolveError};

use common::expression_image;

#[test]
fn three_separated_blobs_give_three_ordered_glyphs() {
    let img = expression_image(
        100,
        100,
        &[(10, 10, 8, 10), (25, 10, 8, 10), (40, 10, 8, 10)],
    );

    let segmenter = GlyphSegmenter::new();
    let batch = segmenter.segment(&img).unwrap();

    assert_eq!(batch.images.len(), 3);
    assert_eq!(batch.boxes.len(), 3);
    assert_eq!(batch.dropped, 0);

    // Left-to-right order, each box near its blob (contour borders may sit
    // one pixel outside the ink).
    let expected_x = [10u32, 25, 40];
    for (bbox, &x) in batch.boxes.iter().zip(&expected_x) {
        assert!(
            bbox.x.abs_diff(x) <= 1,
            "box {:?} not near expected x {}",
            bbox,
            x
        );
    }
    for pair in batch.boxes.windows(2) {
        assert!(pair[0].x < pair[1].x);
    }

    for glyph in &batch.images {
        assert_eq!(glyph.dimensions(), (GLYPH_SIZE, GLYPH_SIZE));
    }
}

#[test]
fn blank_image_yields_no_glyphs() {
    let img = expression_image(80, 80, &[]);
    let batch = GlyphSegmenter::new().segment(&img).unwrap();
    assert!(batch.images.is_empty());
    assert_eq!(batch.dropped, 0);
}

#[test]
fn blob_near_the_edge_is_clamped_not_rejected() {
    // Padding (10 px) around this blob would reach past the top-left corner.
    let img = expression_image(100, 100, &[(4, 4, 8, 10), (40, 10, 8, 10)]);
    let batch = GlyphSegmenter::new().segment(&img).unwrap();

    assert_eq!(batch.images.len(), 2);
    assert_eq!(batch.dropped, 0);
    for glyph in &batch.images {
        assert_eq!(glyph.dimensions(), (GLYPH_SIZE, GLYPH_SIZE));
    }
}

#[test]
fn nested_proposals_collapse_to_the_larger_region() {
    // A ring-shaped glyph (like "0") produces a second, nested contour from
    // the white island inside it. Dedup must keep the outer glyph box only,
    // so the ring plus one solid blob read as two glyphs.
    let img = {
        use image::{DynamicImage, Rgb, RgbImage};
        let buf = RgbImage::from_fn(100, 100, |x, y| {
            let in_ring_outer = x >= 10 && x < 24 && y >= 10 && y < 26;
            let in_ring_hole = x >= 15 && x < 19 && y >= 16 && y < 20;
            let in_blob = x >= 50 && x < 58 && y >= 10 && y < 20;
            if (in_ring_outer && !in_ring_hole) || in_blob {
                Rgb([0u8, 0u8, 0u8])
            } else {
                Rgb([255u8, 255u8, 255u8])
            }
        });
        DynamicImage::ImageRgb8(buf)
    };

    let batch = GlyphSegmenter::new().segment(&img).unwrap();
    assert_eq!(batch.images.len(), 2);
    assert!(batch.boxes[0].x < batch.boxes[1].x);
    // The survivor on the left is the full ring, not its interior island.
    assert!(batch.boxes[0].width >= 14);
}

#[test]
fn malformed_region_is_rejected_before_cropping() {
    let img = expression_image(50, 50, &[]);
    let bad = GlyphBox::new(10, 10, 0, 5);
    let err = crop_padded(&img, &bad, 10).unwrap_err();
    assert!(matches!(err, SolveError::MalformedRegion { .. }));
}

#[test]
fn region_outside_the_image_is_rejected() {
    let img = expression_image(50, 50, &[]);
    let outside = GlyphBox::new(60, 10, 5, 5);
    let err = crop_padded(&img, &outside, 10).unwrap_err();
    assert!(matches!(err, SolveError::CropOutOfBounds { .. }));
}

#[test]
fn crop_is_clamped_to_image_extents() {
    let img = expression_image(50, 50, &[]);
    let near_corner = GlyphBox::new(2, 2, 5, 5);
    let cropped = crop_padded(&img, &near_corner, 10).unwrap();
    // Clamped at the top-left corner, full padding on the other sides.
    assert_eq!(cropped.width(), 17);
    assert_eq!(cropped.height(), 17);
}
