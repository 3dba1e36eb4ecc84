//! Category decision logic and the full analysis pipeline
//!
//! The decision table combines two booleans: warm vs cool (strict
//! majority of warm over cool pixels) and dull vs bright (dull coverage
//! above 50%). Equal warm and cool percentages fall on the Cool side;
//! an earlier revision of the reference behavior returned a separate
//! "Neutral" label for that case, and the Cool-side collapse is kept
//! for compatibility.

use crate::analysis::masks::RegionThresholds;
use crate::analysis::stats::coverage;
use crate::color::{HsvChannels, PixelGrid};
use crate::constants::thresholds::DULL_PERCENT_THRESHOLD;
use crate::error::Result;
use crate::telemetry::{Telemetry, TracingTelemetry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four tone categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    WarmAndDull,
    WarmAndBright,
    CoolAndDull,
    CoolAndBright,
}

impl Category {
    /// The display label for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::WarmAndDull => "Warm and Dull",
            Category::WarmAndBright => "Warm and Bright",
            Category::CoolAndDull => "Cool and Dull",
            Category::CoolAndBright => "Cool and Bright",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification result with the numeric breakdown behind the label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneResult {
    pub category: Category,
    /// Percentage of pixels in the warm hue region
    pub warm_pct: f32,
    /// Percentage of pixels in the cool hue region
    pub cool_pct: f32,
    /// Percentage of low-saturation low-value pixels
    pub dull_pct: f32,
}

/// Map the three aggregated percentages to a category.
///
/// Pure function: identical inputs always yield the same label.
pub fn classify(warm_pct: f32, cool_pct: f32, dull_pct: f32) -> Category {
    let is_warm = warm_pct > cool_pct;
    let is_dull = dull_pct > DULL_PERCENT_THRESHOLD;
    match (is_warm, is_dull) {
        (true, true) => Category::WarmAndDull,
        (true, false) => Category::WarmAndBright,
        (false, true) => Category::CoolAndDull,
        (false, false) => Category::CoolAndBright,
    }
}

/// Tone analyzer running the full pipeline on decoded pixel grids
pub struct ToneAnalyzer<T: Telemetry = TracingTelemetry> {
    thresholds: RegionThresholds,
    telemetry: T,
}

impl Default for ToneAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneAnalyzer {
    /// Create an analyzer with reference thresholds and tracing telemetry
    pub fn new() -> Self {
        Self {
            thresholds: RegionThresholds::default(),
            telemetry: TracingTelemetry,
        }
    }
}

impl<T: Telemetry> ToneAnalyzer<T> {
    /// Create an analyzer with custom thresholds and telemetry sink
    pub fn with_params(thresholds: RegionThresholds, telemetry: T) -> Self {
        Self {
            thresholds,
            telemetry,
        }
    }

    /// Access the injected telemetry sink
    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    /// Classify one decoded image.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ToneError::EmptyImage`] for a zero-area grid.
    /// A failure never yields a partial result.
    pub fn analyze(&self, pixels: &PixelGrid) -> Result<ToneResult> {
        let channels = HsvChannels::from_pixels(pixels);

        let (warm_mask, cool_mask) = self.thresholds.warm_cool_masks(&channels.hue);
        let dull_mask = self
            .thresholds
            .dull_mask(&channels.saturation, &channels.value)?;

        let warm_pct = coverage(&warm_mask)?;
        let cool_pct = coverage(&cool_mask)?;
        let dull_pct = coverage(&dull_mask)?;
        self.telemetry.percentages(warm_pct, cool_pct, dull_pct);

        Ok(ToneResult {
            category: classify(warm_pct, cool_pct, dull_pct),
            warm_pct,
            cool_pct,
            dull_pct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::NullTelemetry;

    #[test]
    fn test_decision_table() {
        assert_eq!(classify(60.0, 20.0, 80.0), Category::WarmAndDull);
        assert_eq!(classify(60.0, 20.0, 20.0), Category::WarmAndBright);
        assert_eq!(classify(20.0, 60.0, 80.0), Category::CoolAndDull);
        assert_eq!(classify(20.0, 60.0, 20.0), Category::CoolAndBright);
    }

    #[test]
    fn test_tie_resolves_to_cool_side() {
        assert_eq!(classify(40.0, 40.0, 80.0), Category::CoolAndDull);
        assert_eq!(classify(40.0, 40.0, 20.0), Category::CoolAndBright);
        assert_eq!(classify(0.0, 0.0, 0.0), Category::CoolAndBright);
    }

    #[test]
    fn test_dull_threshold_is_strict() {
        // Exactly 50% dull is still Bright
        assert_eq!(classify(60.0, 20.0, 50.0), Category::WarmAndBright);
        assert_eq!(classify(60.0, 20.0, 50.1), Category::WarmAndDull);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::WarmAndDull.to_string(), "Warm and Dull");
        assert_eq!(Category::WarmAndBright.to_string(), "Warm and Bright");
        assert_eq!(Category::CoolAndDull.to_string(), "Cool and Dull");
        assert_eq!(Category::CoolAndBright.to_string(), "Cool and Bright");
    }

    #[test]
    fn test_analyze_saturated_red() {
        let analyzer = ToneAnalyzer::with_params(RegionThresholds::default(), NullTelemetry);
        let pixels = PixelGrid::new(8, 8, vec![[255, 0, 0]; 64]);
        let result = analyzer.analyze(&pixels).unwrap();
        assert_eq!(result.warm_pct, 100.0);
        assert_eq!(result.cool_pct, 0.0);
        assert_eq!(result.dull_pct, 0.0);
        assert_eq!(result.category, Category::WarmAndBright);
    }

    #[test]
    fn test_analyze_dark_desaturated_blue() {
        // RGB (40, 45, 50): hue 105 half-degrees (210° true angle),
        // saturation 51, value 50. Cool, and dull on both bounds.
        let analyzer = ToneAnalyzer::with_params(RegionThresholds::default(), NullTelemetry);
        let pixels = PixelGrid::new(8, 8, vec![[40, 45, 50]; 64]);
        let result = analyzer.analyze(&pixels).unwrap();
        assert_eq!(result.warm_pct, 0.0);
        assert_eq!(result.cool_pct, 100.0);
        assert_eq!(result.dull_pct, 100.0);
        assert_eq!(result.category, Category::CoolAndDull);
    }

    #[test]
    fn test_analyze_neutral_band_ties_to_cool() {
        // Hue 75 (150° true angle, a spring green) ties 0% warm to 0% cool
        let analyzer = ToneAnalyzer::with_params(RegionThresholds::default(), NullTelemetry);
        let pixels = PixelGrid::new(4, 4, vec![[0, 255, 128]; 16]);
        let result = analyzer.analyze(&pixels).unwrap();
        assert_eq!(result.warm_pct, 0.0);
        assert_eq!(result.cool_pct, 0.0);
        assert!(matches!(
            result.category,
            Category::CoolAndDull | Category::CoolAndBright
        ));
    }

    #[test]
    fn test_analyze_percentages_bounded() {
        let analyzer = ToneAnalyzer::with_params(RegionThresholds::default(), NullTelemetry);
        let pixels = PixelGrid::new(
            4,
            2,
            vec![
                [255, 0, 0],
                [0, 0, 255],
                [0, 255, 128],
                [128, 128, 128],
                [10, 20, 30],
                [200, 180, 20],
                [0, 128, 255],
                [255, 255, 255],
            ],
        );
        let result = analyzer.analyze(&pixels).unwrap();
        assert!(result.warm_pct >= 0.0 && result.warm_pct <= 100.0);
        assert!(result.cool_pct >= 0.0 && result.cool_pct <= 100.0);
        assert!(result.dull_pct >= 0.0 && result.dull_pct <= 100.0);
        assert!(result.warm_pct + result.cool_pct <= 100.0);
    }

    #[test]
    fn test_analyze_empty_grid() {
        let analyzer = ToneAnalyzer::with_params(RegionThresholds::default(), NullTelemetry);
        let pixels = PixelGrid::new(0, 0, vec![]);
        assert!(analyzer.analyze(&pixels).is_err());
    }

    #[test]
    fn test_warm_fraction_monotonicity() {
        // Replacing neutral pixels with warm ones never lowers warm_pct
        let analyzer = ToneAnalyzer::with_params(RegionThresholds::default(), NullTelemetry);
        let mut previous = 0.0;
        for warm_count in 0..=16 {
            let mut data = vec![[0u8, 255, 128]; 16];
            for pixel in data.iter_mut().take(warm_count) {
                *pixel = [255, 0, 0];
            }
            let result = analyzer.analyze(&PixelGrid::new(4, 4, data)).unwrap();
            assert!(result.warm_pct >= previous);
            previous = result.warm_pct;
        }
    }
}
