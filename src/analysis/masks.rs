//! Threshold-based region masking
//!
//! Turns channel grids into boolean region masks:
//! - Warm: hue below the warm bound
//! - Cool: hue strictly above the cool bound (the band [60, 90] is a
//!   deliberate neutral gap belonging to neither region)
//! - Dull: saturation and value both below their bounds
//!
//! Pure functions of the input grids; nothing here touches the filesystem.

use crate::color::{ChannelGrid, Mask};
use crate::constants::thresholds;
use crate::error::{Result, ToneError};

/// Numeric bounds applied when building region masks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionThresholds {
    /// Warm pixels have hue strictly below this
    pub warm_hue_max: u8,
    /// Cool pixels have hue strictly above this
    pub cool_hue_min: u8,
    /// Cool pixels have hue at most this (inert for native 8-bit hue)
    pub cool_hue_max: u8,
    /// Dull pixels have saturation strictly below this
    pub dull_saturation_max: u8,
    /// Dull pixels have value strictly below this
    pub dull_value_max: u8,
}

impl Default for RegionThresholds {
    fn default() -> Self {
        Self {
            warm_hue_max: thresholds::WARM_HUE_MAX,
            cool_hue_min: thresholds::COOL_HUE_MIN,
            cool_hue_max: thresholds::COOL_HUE_MAX,
            dull_saturation_max: thresholds::DULL_SATURATION_MAX,
            dull_value_max: thresholds::DULL_VALUE_MAX,
        }
    }
}

impl RegionThresholds {
    /// Build warm and cool masks from a hue grid
    pub fn warm_cool_masks(&self, hue: &ChannelGrid) -> (Mask, Mask) {
        let warm = hue.values().map(|h| h < self.warm_hue_max).collect();
        let cool = hue
            .values()
            .map(|h| h > self.cool_hue_min && h <= self.cool_hue_max)
            .collect();
        (
            Mask::new(hue.width(), hue.height(), warm),
            Mask::new(hue.width(), hue.height(), cool),
        )
    }

    /// Build the dull mask from saturation and value grids.
    ///
    /// # Errors
    ///
    /// Returns [`ToneError::DimensionMismatch`] if the two grids disagree
    /// on dimensions. The grids of one image always match; a mismatch
    /// means the caller mixed channels from different images.
    pub fn dull_mask(&self, saturation: &ChannelGrid, value: &ChannelGrid) -> Result<Mask> {
        if !saturation.same_dimensions(value) {
            return Err(ToneError::DimensionMismatch {
                expected_width: saturation.width(),
                expected_height: saturation.height(),
                actual_width: value.width(),
                actual_height: value.height(),
            });
        }

        let dull = saturation
            .values()
            .zip(value.values())
            .map(|(s, v)| s < self.dull_saturation_max && v < self.dull_value_max)
            .collect();
        Ok(Mask::new(saturation.width(), saturation.height(), dull))
    }
}
