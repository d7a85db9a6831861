use clap::Parser;
use image::ImageReader;
use std::path::PathBuf;
use std::sync::Arc;

use eqsnap::segmentation::steps::*;
use eqsnap::segmentation::{BINARY_THRESHOLD, CROP_PADDING, GLYPH_SIZE};
use eqsnap::{equation, Pipeline, Solution};

#[derive(Parser)]
#[command(name = "eqsnap")]
#[command(about = "Solve a handwritten arithmetic expression from an image")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Directory holding class_dictionary.json and cnn.rten
    #[arg(long, value_name = "DIR", default_value = "artifacts")]
    artifacts: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save debug outputs to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Skip classification and only report detected glyph boxes
    #[arg(long)]
    boxes_only: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();

    if args.verbose {
        println!("Loading image: {:?}", args.image_path);
    }

    let img = ImageReader::open(&args.image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    if args.verbose {
        println!("Image loaded: {}x{}\n", img.width(), img.height());
    }

    let mut pipeline = Pipeline::new()
        .with_verbose(args.verbose)
        .add_step(Arc::new(BinarizeStep {
            threshold: BINARY_THRESHOLD,
        }))
        .add_step(Arc::new(GlyphDetectionStep {
            padding: CROP_PADDING,
        }))
        .add_step(Arc::new(NormalizeStep { size: GLYPH_SIZE }));

    if !args.boxes_only {
        pipeline = pipeline.add_step(Arc::new(ClassifyStep::new(args.artifacts.clone())));
    }

    if let Some(debug_dir) = args.debug_out {
        pipeline = pipeline.with_debug(debug_dir)?;
    }

    let items = pipeline.run(img)?;

    if args.boxes_only {
        println!("Detected {} glyph boxes:", items.len());
        for item in &items {
            if let Some(bbox) = &item.bbox {
                println!(
                    "  ({}, {}) {}x{}",
                    bbox.x, bbox.y, bbox.width, bbox.height
                );
            }
        }
        return Ok(());
    }

    let tokens: Vec<String> = items
        .iter()
        .filter_map(|item| item.get_string("token").map(str::to_string))
        .collect();

    if args.verbose {
        println!("\nRecognized tokens: {:?}", tokens);
    }

    let equation_tokens = equation::reassemble(tokens);
    match equation::solve(&equation_tokens)? {
        Solution::Value(value) => println!("{}", value),
        Solution::Unresolved => {
            println!("Expression not recognized: {:?}", equation_tokens)
        }
    }

    Ok(())
}
