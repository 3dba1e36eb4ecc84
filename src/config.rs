//! Configuration for the classification pipeline.
//!
//! All tunable parameters live here: the working directory, the region
//! thresholds, and the batch cleanup policy. Configuration can be loaded
//! from JSON files or constructed programmatically:
//!
//! ```no_run
//! use tonescan::ToneConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ToneConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use the reference defaults
//! let config = ToneConfig::default_reference();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::analysis::RegionThresholds;
use crate::batch::CleanupMode;
use crate::constants::thresholds;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete pipeline configuration.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneConfig {
    /// Working directory holding the images to classify
    pub images_dir: PathBuf,

    /// Region masking thresholds
    pub thresholds: ThresholdConfig,

    /// When batch runs clear the working directory
    pub cleanup: CleanupChoice,
}

/// Region threshold parameters for configuration files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThresholdConfig {
    /// Warm pixels have hue below this (half-degree scale)
    pub warm_hue_max: u8,

    /// Cool pixels have hue strictly above this
    pub cool_hue_min: u8,

    /// Dull pixels have saturation below this
    pub dull_saturation_max: u8,

    /// Dull pixels have value below this
    pub dull_value_max: u8,
}

impl From<ThresholdConfig> for RegionThresholds {
    fn from(config: ThresholdConfig) -> Self {
        RegionThresholds {
            warm_hue_max: config.warm_hue_max,
            cool_hue_min: config.cool_hue_min,
            cool_hue_max: thresholds::COOL_HUE_MAX,
            dull_saturation_max: config.dull_saturation_max,
            dull_value_max: config.dull_value_max,
        }
    }
}

/// Cleanup policy names for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanupChoice {
    AfterEachImage,
    AfterBatch,
    Keep,
}

impl From<CleanupChoice> for CleanupMode {
    fn from(choice: CleanupChoice) -> Self {
        match choice {
            CleanupChoice::AfterEachImage => CleanupMode::AfterEachImage,
            CleanupChoice::AfterBatch => CleanupMode::AfterBatch,
            CleanupChoice::Keep => CleanupMode::Keep,
        }
    }
}

impl ToneConfig {
    /// Create the reference configuration: the historical thresholds and
    /// the wipe-as-you-go cleanup policy
    pub fn default_reference() -> Self {
        Self {
            images_dir: PathBuf::from("images"),
            thresholds: ThresholdConfig {
                warm_hue_max: thresholds::WARM_HUE_MAX,
                cool_hue_min: thresholds::COOL_HUE_MIN,
                dull_saturation_max: thresholds::DULL_SATURATION_MAX,
                dull_value_max: thresholds::DULL_VALUE_MAX,
            },
            cleanup: CleanupChoice::AfterEachImage,
        }
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
