pub mod equation;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod recognition;
pub mod segmentation;
pub mod solver;

pub use error::SolveError;
pub use models::{axes_overlap, GlyphBox, Solution};
pub use pipeline::{
    DebugConfig, MetadataValue, Pipeline, PipelineContext, PipelineData, PipelineStep,
};
pub use recognition::{Artifacts, Classifier, LabelMap};
pub use segmentation::{GlyphBatch, GlyphSegmenter};
pub use solver::Solver;
