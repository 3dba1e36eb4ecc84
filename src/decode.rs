//! Image decoding into a [`PixelGrid`]
//!
//! Single entry point for turning a file path into pixel data. All
//! supported formats (JPEG, PNG, GIF) go through the `image` crate and
//! are normalized to 8-bit RGB; GIF decodes to its first frame.

use crate::color::PixelGrid;
use crate::error::{Result, ToneError};
use image::ImageReader;
use std::path::Path;

/// Decode the image at `path` into an owned RGB pixel grid.
///
/// # Errors
///
/// Returns [`ToneError::Decode`] if the file cannot be opened, is not a
/// valid image, or its format is unsupported. A failure never yields a
/// partial or zero-filled grid.
pub fn load_pixels(path: &Path) -> Result<PixelGrid> {
    let reader = ImageReader::open(path)
        .map_err(|e| ToneError::decode(format!("Failed to open image file: {}", path.display()), e))?
        .with_guessed_format()
        .map_err(|e| ToneError::decode(format!("Failed to probe image format: {}", path.display()), e))?;

    let img = reader
        .decode()
        .map_err(|e| ToneError::decode(format!("Failed to decode image: {}", path.display()), e))?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let data = rgb
        .pixels()
        .map(|p| [p.0[0], p.0[1], p.0[2]])
        .collect();

    Ok(PixelGrid::new(width, height, data))
}
