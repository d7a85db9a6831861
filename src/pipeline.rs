use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use image::DynamicImage;

use crate::models::GlyphBox;

/// Data that flows through the pipeline. Each item is one image region
/// (initially the whole frame, after glyph detection one glyph) with
/// associated metadata.
#[derive(Clone)]
pub struct PipelineData {
    /// The working image for this item.
    pub image: DynamicImage,

    /// The original frame, shared across items via Arc.
    pub original: Arc<DynamicImage>,

    /// Where this item came from in the original frame (None = full frame).
    pub bbox: Option<GlyphBox>,

    /// Per-item metadata, e.g. the recognized token.
    pub metadata: HashMap<String, MetadataValue>,
}

#[derive(Debug, Clone)]
pub enum MetadataValue {
    Float(f32),
    String(String),
    Int(i32),
}

impl PipelineData {
    /// Create PipelineData for a full frame.
    pub fn from_image(image: DynamicImage) -> Self {
        let original = Arc::new(image.clone());
        Self {
            image,
            original,
            bbox: None,
            metadata: HashMap::new(),
        }
    }

    /// Create PipelineData for a region of the frame.
    pub fn from_region(image: DynamicImage, original: Arc<DynamicImage>, bbox: GlyphBox) -> Self {
        Self {
            image,
            original,
            bbox: Some(bbox),
            metadata: HashMap::new(),
        }
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.metadata.get(key) {
            Some(MetadataValue::String(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.metadata.get(key) {
            Some(MetadataValue::Int(v)) => Some(*v),
            _ => None,
        }
    }
}

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: std::path::PathBuf,
}

/// Context available to all pipeline steps
#[derive(Clone)]
pub struct PipelineContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
}

/// Trait that all pipeline steps must implement
pub trait PipelineStep: Send + Sync {
    /// Process data and return transformed data.
    /// Steps can split data (1 → many), filter (many → fewer), or transform (many → many)
    fn process(&self, data: Vec<PipelineData>, context: &PipelineContext) -> Result<Vec<PipelineData>>;

    /// Human-readable name for this step (used in verbose output)
    fn name(&self) -> &str;
}

/// Composable pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
    context: PipelineContext,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext {
                verbose: false,
                debug: None,
            },
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory.
    /// The directory must be empty or non-existent.
    pub fn with_debug(mut self, output_dir: std::path::PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.context.debug = Some(DebugConfig { output_dir });
        Ok(self)
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Run the pipeline sequentially on an input image
    pub fn run(&self, input: DynamicImage) -> Result<Vec<PipelineData>> {
        if let Some(debug_config) = &self.context.debug {
            let input_dir = debug_config.output_dir.join("00_input");
            std::fs::create_dir_all(&input_dir)?;
            input
                .save(input_dir.join("01.png"))
                .map_err(|e| anyhow::anyhow!("Failed to save debug input: {}", e))?;
        }

        let mut data = vec![PipelineData::from_image(input)];

        for (step_idx, step) in self.steps.iter().enumerate() {
            if self.context.verbose {
                println!("Running step: {} (processing {} items)", step.name(), data.len());
            }

            let step_name = step.name();
            data = step.process(data, &self.context)?;

            if let Some(debug_config) = &self.context.debug {
                let step_dir_name = format!(
                    "{:02}_{}",
                    step_idx + 1,
                    step_name.to_lowercase().replace(' ', "_")
                );
                let step_dir = debug_config.output_dir.join(&step_dir_name);
                std::fs::create_dir_all(&step_dir)?;

                for (idx, item) in data.iter().enumerate() {
                    let output_path = step_dir.join(format!("{:02}.png", idx + 1));
                    item.image
                        .save(&output_path)
                        .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;
                }

                if self.context.verbose {
                    println!("  Debug: saved {} images to {}/", data.len(), step_dir_name);
                }
            }

            if self.context.verbose {
                println!("  → {} items", data.len());
            }
        }

        Ok(data)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
