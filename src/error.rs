use thiserror::Error;

/// Errors raised by the glyph-segmentation and evaluation pipeline.
///
/// An expression that matches no supported grammar shape is *not* an error;
/// that case is reported as [`crate::models::Solution::Unresolved`].
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("malformed region proposal at ({x}, {y}): {width}x{height}")]
    MalformedRegion { x: u32, y: u32, width: u32, height: u32 },

    #[error(
        "region at ({x}, {y}) lies outside the {image_width}x{image_height} source image"
    )]
    CropOutOfBounds { x: u32, y: u32, image_width: u32, image_height: u32 },

    #[error("token {token:?} is not a number")]
    InvalidToken { token: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("class dictionary maps more than one symbol to id {id}")]
    DuplicateClassId { id: usize },

    #[error("classifier predicted id {id} which has no symbol in the class dictionary")]
    UnknownClassId { id: usize },

    #[error("classifier returned {got} predictions for a batch of {expected} glyphs")]
    BatchMismatch { expected: usize, got: usize },

    #[error("failed to load classifier model: {0}")]
    ClassifierLoad(String),

    #[error("classifier inference failed: {0}")]
    Classifier(String),

    #[error("failed to read artifact {path}")]
    ArtifactIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse class dictionary {path}")]
    ArtifactFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
