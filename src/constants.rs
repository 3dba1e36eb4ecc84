//! Threshold constants and reference values for tone classification
//!
//! Hue uses the half-degree byte convention common to 8-bit HSV pipelines:
//! stored hue is half the true angle, so the domain is [0, 179].

/// Region thresholds applied to the HSV channel grids
pub mod thresholds {
    /// Pixels with hue below this are warm
    pub const WARM_HUE_MAX: u8 = 60;

    /// Pixels with hue strictly above this (and at most [`COOL_HUE_MAX`]) are cool
    pub const COOL_HUE_MIN: u8 = 90;

    /// Upper bound of the cool band. Native hue never exceeds 179, so the
    /// bound is inert; it exists so the cool band reads as (90, 180].
    pub const COOL_HUE_MAX: u8 = 180;

    /// Dull pixels have saturation below this
    pub const DULL_SATURATION_MAX: u8 = 80;

    /// Dull pixels have value below this
    pub const DULL_VALUE_MAX: u8 = 100;

    /// An image is Dull when more than this percentage of its area is dull
    pub const DULL_PERCENT_THRESHOLD: f32 = 50.0;
}

/// File extensions the image store will list, matched case-insensitively
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Hue channel domain limits (half-degree convention)
pub mod hue {
    /// Exclusive upper bound of the stored hue domain
    pub const MODULUS: u16 = 180;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warm_and_cool_bands_disjoint() {
        // Hue in [60, 90] is a deliberate neutral band in neither region
        assert!(thresholds::WARM_HUE_MAX <= thresholds::COOL_HUE_MIN);
    }

    #[test]
    fn test_cool_upper_bound_covers_hue_domain() {
        assert!(u16::from(thresholds::COOL_HUE_MAX) >= hue::MODULUS);
    }

    #[test]
    fn test_allowed_extensions_lowercase() {
        for ext in ALLOWED_EXTENSIONS {
            assert_eq!(ext, ext.to_lowercase());
        }
    }
}
