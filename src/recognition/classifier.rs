use std::path::Path;

use image::RgbImage;
use rten::Model;
use rten_tensor::prelude::*;
use rten_tensor::NdTensor;

use crate::error::SolveError;

/// Glyph classifier contract: one class-probability vector per input image.
///
/// Every image in a batch has identical dimensions (the segmenter guarantees
/// this); implementations may rely on it.
pub trait Classifier: Send + Sync {
    fn predict(&self, batch: &[RgbImage]) -> Result<Vec<Vec<f32>>, SolveError>;
}

/// Index of the largest probability, ties resolved to the first.
pub fn argmax(probabilities: &[f32]) -> Option<usize> {
    probabilities
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(index, _)| index)
}

/// CNN classifier backed by an rten model.
pub struct RtenClassifier {
    model: Model,
}

impl RtenClassifier {
    pub fn load(path: &Path) -> Result<Self, SolveError> {
        let model = Model::load_file(path)
            .map_err(|e| SolveError::ClassifierLoad(e.to_string()))?;
        Ok(Self { model })
    }

    /// Pack a glyph batch into an NCHW float tensor with pixel values in
    /// [0, 1].
    fn batch_to_tensor(batch: &[RgbImage]) -> NdTensor<f32, 4> {
        let (width, height) = batch[0].dimensions();
        let mut tensor =
            NdTensor::zeros([batch.len(), 3, height as usize, width as usize]);

        for (n, img) in batch.iter().enumerate() {
            for (x, y, pixel) in img.enumerate_pixels() {
                for c in 0..3 {
                    tensor[[n, c, y as usize, x as usize]] =
                        pixel.0[c] as f32 / 255.0;
                }
            }
        }

        tensor
    }
}

impl Classifier for RtenClassifier {
    fn predict(&self, batch: &[RgbImage]) -> Result<Vec<Vec<f32>>, SolveError> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let input = Self::batch_to_tensor(batch);
        let output = self
            .model
            .run_one(input.view().into(), None)
            .map_err(|e| SolveError::Classifier(e.to_string()))?;
        let probabilities: NdTensor<f32, 2> = output
            .try_into()
            .map_err(|_| SolveError::Classifier("unexpected output shape".to_string()))?;

        let [rows, classes] = probabilities.shape();
        if rows != batch.len() {
            return Err(SolveError::BatchMismatch { expected: batch.len(), got: rows });
        }

        Ok((0..rows)
            .map(|row| (0..classes).map(|c| probabilities[[row, c]]).collect())
            .collect())
    }
}
