pub mod boxes;
pub mod contours;
pub mod preprocessing;
pub mod steps;

use image::{imageops::FilterType, DynamicImage, RgbImage};
use tracing::{debug, warn};

use crate::error::SolveError;
use crate::models::GlyphBox;

/// Grayscale threshold separating page from ink.
pub const BINARY_THRESHOLD: u8 = 100;
/// Margin added on every side of a glyph box before cropping.
pub const CROP_PADDING: u32 = 10;
/// Side length of the square classifier input.
pub const GLYPH_SIZE: u32 = 150;

/// Ordered batch of normalized glyph images ready for classification.
pub struct GlyphBatch {
    /// One image per surviving glyph, left-to-right, all `GLYPH_SIZE` square.
    pub images: Vec<RgbImage>,
    /// The deduplicated source box of each image, same order.
    pub boxes: Vec<GlyphBox>,
    /// Glyphs dropped because their crop degenerated to zero area.
    pub dropped: usize,
}

/// Glyph segmentation orchestrator
///
/// Binarizes the source image, detects candidate regions, orders and
/// deduplicates them, and produces fixed-size crops for the classifier.
pub struct GlyphSegmenter {
    pub threshold: u8,
    pub padding: u32,
    pub glyph_size: u32,
}

impl GlyphSegmenter {
    pub fn new() -> Self {
        Self {
            threshold: BINARY_THRESHOLD,
            padding: CROP_PADDING,
            glyph_size: GLYPH_SIZE,
        }
    }

    /// Detect candidate boxes in reading order, with the full-frame box
    /// dropped and overlaps resolved.
    ///
    /// The first box after sorting is assumed to be the page frame produced
    /// by the outer contour; this is a structural assumption of the contour
    /// step, not verified here.
    pub fn detect_boxes(&self, img: &DynamicImage) -> Vec<GlyphBox> {
        let gray = preprocessing::to_grayscale(img);
        let binary = preprocessing::binarize(&gray, self.threshold);

        let mut candidates = contours::find_glyph_boxes(&binary);
        boxes::sort_reading_order(&mut candidates);
        debug!(candidates = candidates.len(), "contour detection done");

        if !candidates.is_empty() {
            candidates.remove(0);
        }

        let kept = boxes::remove_overlapping_boxes(candidates);
        debug!(kept = kept.len(), "overlap resolution done");
        kept
    }

    /// Run the full segmentation: detect, crop, and normalize.
    ///
    /// A glyph whose crop degenerates to zero area is dropped from the batch
    /// and counted rather than failing the call.
    pub fn segment(&self, img: &DynamicImage) -> Result<GlyphBatch, SolveError> {
        let glyph_boxes = self.detect_boxes(img);

        let mut images = Vec::with_capacity(glyph_boxes.len());
        let mut kept_boxes = Vec::with_capacity(glyph_boxes.len());
        let mut dropped = 0;

        for bbox in glyph_boxes {
            let cropped = crop_padded(img, &bbox, self.padding)?;
            if cropped.width() == 0 || cropped.height() == 0 {
                warn!(
                    x = bbox.x,
                    y = bbox.y,
                    "dropping glyph with degenerate crop"
                );
                dropped += 1;
                continue;
            }

            let normalized = cropped
                .resize_exact(self.glyph_size, self.glyph_size, FilterType::Triangle)
                .to_rgb8();
            images.push(normalized);
            kept_boxes.push(bbox);
        }

        Ok(GlyphBatch { images, boxes: kept_boxes, dropped })
    }
}

impl Default for GlyphSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Crop `padding` pixels of context around a glyph box, clamped to the image
/// extents so boxes near an edge yield a smaller margin instead of failing.
pub fn crop_padded(
    img: &DynamicImage,
    bbox: &GlyphBox,
    padding: u32,
) -> Result<DynamicImage, SolveError> {
    if bbox.width == 0 || bbox.height == 0 {
        return Err(SolveError::MalformedRegion {
            x: bbox.x,
            y: bbox.y,
            width: bbox.width,
            height: bbox.height,
        });
    }
    if bbox.x >= img.width() || bbox.y >= img.height() {
        return Err(SolveError::CropOutOfBounds {
            x: bbox.x,
            y: bbox.y,
            image_width: img.width(),
            image_height: img.height(),
        });
    }

    let x = bbox.x.saturating_sub(padding);
    let y = bbox.y.saturating_sub(padding);
    let max_x = (bbox.x + bbox.width + padding).min(img.width());
    let max_y = (bbox.y + bbox.height + padding).min(img.height());

    Ok(img.crop_imm(x, y, max_x - x, max_y - y))
}
