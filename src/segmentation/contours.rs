use image::GrayImage;
use imageproc::contours::find_contours;

use crate::models::GlyphBox;

/// Find candidate glyph regions in a binary image.
///
/// Runs border-following contour detection and takes the bounding box of each
/// contour's points. The outer border of a light page produces one box
/// spanning (almost) the whole frame; glyph holes produce one box each. No
/// ordering is guaranteed here, the caller sorts into reading order.
pub fn find_glyph_boxes(binary: &GrayImage) -> Vec<GlyphBox> {
    find_contours::<i32>(binary)
        .iter()
        .filter_map(|contour| {
            let mut min_x = i32::MAX;
            let mut min_y = i32::MAX;
            let mut max_x = i32::MIN;
            let mut max_y = i32::MIN;

            for point in &contour.points {
                min_x = min_x.min(point.x);
                min_y = min_y.min(point.y);
                max_x = max_x.max(point.x);
                max_y = max_y.max(point.y);
            }

            if contour.points.is_empty() {
                return None;
            }

            Some(GlyphBox::new(
                min_x as u32,
                min_y as u32,
                (max_x - min_x + 1) as u32,
                (max_y - min_y + 1) as u32,
            ))
        })
        .collect()
}
