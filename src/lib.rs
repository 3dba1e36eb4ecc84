//! # Tonescan
//!
//! A Rust crate for classifying photographs into warm/cool and
//! dull/bright tone categories from pixel-level color statistics.
//!
//! Classification works by:
//! - Decoding the image and deriving its hue, saturation, and value grids
//! - Masking warm, cool, and dull pixel regions with fixed thresholds
//! - Reducing each mask to a percentage of image area
//! - Mapping the percentages to one of four category labels
//!
//! ## Example
//!
//! ```rust,no_run
//! use tonescan::classify_image;
//! use std::path::Path;
//!
//! let result = classify_image(Path::new("photo.jpg"))?;
//! println!("{} ({:.1}% warm)", result.category, result.warm_pct);
//! # Ok::<(), tonescan::ToneError>(())
//! ```

use std::path::Path;

pub mod analysis;
pub mod batch;
pub mod color;
pub mod config;
pub mod constants;
pub mod decode;
pub mod error;
pub mod store;
pub mod telemetry;

pub use analysis::{classify, Category, RegionThresholds, ToneAnalyzer, ToneResult};
pub use batch::{BatchRunner, CleanupMode};
pub use config::ToneConfig;
pub use error::{Result, ToneError};
pub use store::ImageStore;
pub use telemetry::{NullTelemetry, Telemetry, TracingTelemetry};

/// Classify a single image file into a tone category.
///
/// This is the main entry point for the upload-driven single-shot path.
/// It decodes the image, runs the full analysis pipeline with reference
/// thresholds, and returns the label together with the three region
/// percentages. The file is not deleted; cleanup belongs to the caller.
///
/// # Errors
///
/// Returns `ToneError` if:
/// - The path cannot be read or decoded as a color image
/// - The image has zero area
pub fn classify_image(image_path: &Path) -> Result<ToneResult> {
    let pixels = decode::load_pixels(image_path)?;
    ToneAnalyzer::new().analyze(&pixels)
}
