//! Error types for the tonescan library

use thiserror::Error;

/// Result type alias for tonescan operations
pub type Result<T> = std::result::Result<T, ToneError>;

/// Error types for tone classification operations
#[derive(Error, Debug)]
pub enum ToneError {
    /// Image file could not be opened or decoded into a 3-channel image
    #[error("Failed to decode image: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Channel grids passed to a mask operation disagree on dimensions
    #[error("Channel dimension mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// Image has zero area, no statistics can be computed
    #[error("Image has no pixels")]
    EmptyImage,

    /// Directory listing or file deletion failed
    #[error("Image directory error: {message}")]
    Directory {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ToneError {
    /// Create a decode error with context
    pub fn decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a directory error with context
    pub fn directory<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Directory {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error indicates a recoverable per-item condition.
    ///
    /// Batch mode may skip an item that fails to decode; dimension
    /// mismatches are programming errors and directory failures abort
    /// the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ToneError::Decode { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ToneError::Decode { .. } => {
                "Could not read the image. Please check the file format and try again.".to_string()
            }
            ToneError::EmptyImage => {
                "The image has no pixels to analyze. Please upload a non-empty image.".to_string()
            }
            ToneError::Directory { .. } => {
                "Could not access the image directory. Please try again.".to_string()
            }
            ToneError::DimensionMismatch { .. } => {
                "Tone classification failed due to an internal error.".to_string()
            }
        }
    }
}
