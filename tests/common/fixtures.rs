#![allow(dead_code)]

use std::sync::Arc;

use image::{DynamicImage, Rgb, RgbImage};

use eqsnap::recognition::Classifier;
use eqsnap::{Artifacts, LabelMap, SolveError};

/// Creates a white image with filled black rectangles at the given
/// `(x, y, width, height)` spots, one per glyph.
pub fn expression_image(width: u32, height: u32, blobs: &[(u32, u32, u32, u32)]) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |px, py| {
        let inked = blobs.iter().any(|&(x, y, w, h)| {
            px >= x && px < x + w && py >= y && py < y + h
        });
        if inked {
            Rgb([0u8, 0u8, 0u8])
        } else {
            Rgb([255u8, 255u8, 255u8])
        }
    });
    DynamicImage::ImageRgb8(img)
}

/// Label map matching the classifier's training dictionary: digits 0-9 map
/// to ids 0-9, then the four operators.
pub fn test_label_map() -> LabelMap {
    let mut pairs: Vec<(String, usize)> =
        (0..10).map(|d| (d.to_string(), d)).collect();
    pairs.push(("+".to_string(), 10));
    pairs.push(("-".to_string(), 11));
    pairs.push(("*".to_string(), 12));
    pairs.push(("/".to_string(), 13));
    LabelMap::from_pairs(pairs).expect("test label map has unique ids")
}

/// Classifier stub returning a fixed sequence of class ids as one-hot
/// probability vectors, regardless of pixel content.
pub struct StubClassifier {
    pub ids: Vec<usize>,
    pub classes: usize,
}

impl Classifier for StubClassifier {
    fn predict(&self, batch: &[RgbImage]) -> Result<Vec<Vec<f32>>, SolveError> {
        assert_eq!(
            batch.len(),
            self.ids.len(),
            "stub classifier got an unexpected batch size"
        );
        Ok(self
            .ids
            .iter()
            .map(|&id| {
                let mut probs = vec![0.0; self.classes];
                probs[id] = 1.0;
                probs
            })
            .collect())
    }
}

/// Artifacts with the test label map and a stub classifier predicting `ids`.
pub fn stub_artifacts(ids: Vec<usize>) -> Artifacts {
    let labels = test_label_map();
    let classes = labels.len();
    Artifacts::from_parts(labels, Arc::new(StubClassifier { ids, classes }))
}
