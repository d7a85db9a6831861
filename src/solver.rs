use image::DynamicImage;
use tracing::debug;

use crate::equation;
use crate::error::SolveError;
use crate::models::Solution;
use crate::recognition::{argmax, Artifacts};
use crate::segmentation::GlyphSegmenter;

/// End-to-end expression solver: segment glyphs, classify them, rebuild the
/// token sequence, and evaluate it.
pub struct Solver {
    segmenter: GlyphSegmenter,
    artifacts: Artifacts,
}

impl Solver {
    pub fn new(artifacts: Artifacts) -> Self {
        Self {
            segmenter: GlyphSegmenter::new(),
            artifacts,
        }
    }

    pub fn with_segmenter(mut self, segmenter: GlyphSegmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Solve the expression in `img`.
    ///
    /// Segmentation, classification, and label-mapping failures abort the
    /// call; an expression that matches no supported shape comes back as
    /// `Solution::Unresolved`.
    pub fn solve(&self, img: &DynamicImage) -> Result<Solution, SolveError> {
        let batch = self.segmenter.segment(img)?;
        debug!(
            glyphs = batch.images.len(),
            dropped = batch.dropped,
            "segmentation done"
        );

        // Zero glyphs means zero tokens, which matches no grammar shape.
        if batch.images.is_empty() {
            return Ok(Solution::Unresolved);
        }

        let predictions = self.artifacts.classifier.predict(&batch.images)?;
        if predictions.len() != batch.images.len() {
            return Err(SolveError::BatchMismatch {
                expected: batch.images.len(),
                got: predictions.len(),
            });
        }

        let ids: Vec<usize> = predictions
            .iter()
            .map(|probs| {
                argmax(probs).ok_or_else(|| {
                    SolveError::Classifier("empty probability vector".to_string())
                })
            })
            .collect::<Result<_, _>>()?;

        let tokens = self.artifacts.labels.symbols_for(&ids)?;
        debug!(?tokens, "glyphs classified");

        let equation_tokens = equation::reassemble(tokens);
        equation::solve(&equation_tokens)
    }
}
