pub mod classifier;
pub mod labels;

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

pub use classifier::{argmax, Classifier, RtenClassifier};
pub use labels::LabelMap;

use crate::error::SolveError;

/// File name of the symbol-to-id dictionary inside the artifacts directory.
pub const CLASS_DICTIONARY_FILE: &str = "class_dictionary.json";
/// File name of the serialized classifier model.
pub const MODEL_FILE: &str = "cnn.rten";

/// Immutable recognition artifacts, loaded once and passed explicitly to the
/// solver instead of living in hidden process globals.
pub struct Artifacts {
    pub labels: LabelMap,
    pub classifier: Arc<dyn Classifier>,
}

impl std::fmt::Debug for Artifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artifacts")
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

impl Artifacts {
    /// Load the label dictionary and classifier model from `dir`.
    pub fn load(dir: &Path) -> Result<Self, SolveError> {
        let dict_path = dir.join(CLASS_DICTIONARY_FILE);
        let file = File::open(&dict_path).map_err(|source| SolveError::ArtifactIo {
            path: dict_path.display().to_string(),
            source,
        })?;
        let labels = LabelMap::from_reader(file, &dict_path.display().to_string())?;
        debug!(classes = labels.len(), "label dictionary loaded");

        let model_path = dir.join(MODEL_FILE);
        let classifier = RtenClassifier::load(&model_path)?;
        debug!(path = %model_path.display(), "classifier model loaded");

        Ok(Self {
            labels,
            classifier: Arc::new(classifier),
        })
    }

    /// Assemble artifacts from already-loaded parts (used by tests to inject
    /// a stub classifier).
    pub fn from_parts(labels: LabelMap, classifier: Arc<dyn Classifier>) -> Self {
        Self { labels, classifier }
    }
}
