use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use image::imageops::FilterType;
use tracing::warn;

use crate::pipeline::{MetadataValue, PipelineContext, PipelineData, PipelineStep};
use crate::recognition::{argmax, Artifacts};
use crate::segmentation::{boxes, contours, crop_padded, preprocessing};

/// Convert to grayscale and apply the fixed binary threshold
pub struct BinarizeStep {
    pub threshold: u8,
}

impl PipelineStep for BinarizeStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();
        for item in data {
            let gray = preprocessing::to_grayscale(&item.image);
            let binary = preprocessing::binarize(&gray, self.threshold);
            let new_item = PipelineData {
                image: image::DynamicImage::ImageLuma8(binary),
                original: item.original.clone(),
                bbox: item.bbox,
                metadata: item.metadata.clone(),
            };
            result.push(new_item);
        }
        Ok(result)
    }

    fn name(&self) -> &str {
        "Binarize"
    }
}

/// Detect glyph regions in the binary frame - splits one image into many.
///
/// Candidates are sorted into reading order, the leading full-frame box is
/// dropped, overlaps are resolved toward the larger box, and each survivor is
/// cropped from the original frame with padding.
pub struct GlyphDetectionStep {
    pub padding: u32,
}

impl PipelineStep for GlyphDetectionStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();

        for item in data {
            let binary = item.image.to_luma8();
            let mut candidates = contours::find_glyph_boxes(&binary);
            boxes::sort_reading_order(&mut candidates);

            // First box after sorting is assumed to frame the whole image.
            if !candidates.is_empty() {
                candidates.remove(0);
            }

            for (idx, bbox) in boxes::remove_overlapping_boxes(candidates)
                .into_iter()
                .enumerate()
            {
                let cropped = crop_padded(&item.original, &bbox, self.padding)?;
                let mut glyph_item =
                    PipelineData::from_region(cropped, item.original.clone(), bbox);
                glyph_item
                    .metadata
                    .insert("glyph_index".to_string(), MetadataValue::Int(idx as i32));
                result.push(glyph_item);
            }
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Glyph Detection"
    }
}

/// Resize every glyph to the square classifier input size.
///
/// A glyph whose crop degenerated to zero area is dropped from the batch
/// rather than failing the run.
pub struct NormalizeStep {
    pub size: u32,
}

impl PipelineStep for NormalizeStep {
    fn process(&self, data: Vec<PipelineData>, _context: &PipelineContext) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();

        for item in data {
            if item.image.width() == 0 || item.image.height() == 0 {
                warn!(bbox = ?item.bbox, "dropping glyph with degenerate crop");
                continue;
            }

            let resized = item.image.resize_exact(self.size, self.size, FilterType::Triangle);
            let mut new_item = item.clone();
            new_item.image = resized;
            result.push(new_item);
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Normalize"
    }
}

/// Classify glyphs and attach the recognized token to each item.
pub struct ClassifyStep {
    pub artifacts_dir: PathBuf,
    // Lazy-initialized artifacts, loaded once on first use so repeated
    // pipeline runs in the same process reuse the loaded model.
    artifacts: Mutex<Option<Arc<Artifacts>>>,
}

impl ClassifyStep {
    pub fn new(artifacts_dir: PathBuf) -> Self {
        Self {
            artifacts_dir,
            artifacts: Mutex::new(None),
        }
    }
}

impl PipelineStep for ClassifyStep {
    fn process(&self, data: Vec<PipelineData>, context: &PipelineContext) -> Result<Vec<PipelineData>> {
        if data.is_empty() {
            return Ok(data);
        }

        // Clone the Arc to release the mutex lock before inference.
        let artifacts = {
            let mut guard = self.artifacts.lock().unwrap();
            if guard.is_none() {
                if context.verbose {
                    println!("Loading recognition artifacts...");
                }
                *guard = Some(Arc::new(Artifacts::load(&self.artifacts_dir)?));
            }
            guard.as_ref().unwrap().clone()
        };

        let batch: Vec<image::RgbImage> =
            data.iter().map(|item| item.image.to_rgb8()).collect();
        let predictions = artifacts.classifier.predict(&batch)?;

        let mut result = Vec::new();
        for (item, probs) in data.into_iter().zip(predictions) {
            let id = argmax(&probs)
                .ok_or_else(|| anyhow::anyhow!("classifier returned an empty probability vector"))?;
            let token = artifacts
                .labels
                .symbol_of(id)
                .ok_or(crate::error::SolveError::UnknownClassId { id })?
                .to_string();

            let mut new_item = item.clone();
            new_item
                .metadata
                .insert("token".to_string(), MetadataValue::String(token));
            result.push(new_item);
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Glyph Classification"
    }
}
