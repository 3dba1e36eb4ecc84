//! HSV channel derivation from a decoded pixel grid
//!
//! Hue, saturation, and value are quantized to the 8-bit byte convention:
//! stored hue is half the true angle (domain [0, 179]), saturation and
//! value are scaled to [0, 255]. All three channels are derived in a
//! single pass over the pixels.

use crate::color::grid::{ChannelGrid, PixelGrid};
use crate::constants::hue::MODULUS;
use palette::{FromColor, Hsv, Srgb};

/// The three perceptual channel grids of one image
#[derive(Debug, Clone)]
pub struct HsvChannels {
    /// Hue on the half-degree scale [0, 179]
    pub hue: ChannelGrid,
    /// Saturation on [0, 255]
    pub saturation: ChannelGrid,
    /// Value (brightness) on [0, 255]
    pub value: ChannelGrid,
}

impl HsvChannels {
    /// Derive hue, saturation, and value grids from a pixel grid
    pub fn from_pixels(pixels: &PixelGrid) -> Self {
        let mut hue = Vec::with_capacity(pixels.len());
        let mut saturation = Vec::with_capacity(pixels.len());
        let mut value = Vec::with_capacity(pixels.len());

        for &[r, g, b] in pixels.pixels() {
            let (h, s, v) = quantize_hsv(r, g, b);
            hue.push(h);
            saturation.push(s);
            value.push(v);
        }

        Self {
            hue: ChannelGrid::new(pixels.width(), pixels.height(), hue),
            saturation: ChannelGrid::new(pixels.width(), pixels.height(), saturation),
            value: ChannelGrid::new(pixels.width(), pixels.height(), value),
        }
    }
}

/// Convert one RGB sample to quantized HSV bytes
fn quantize_hsv(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let srgb = Srgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    );
    let hsv = Hsv::from_color(srgb);

    // Half-degree hue; rounding at 359.x wraps back to 0
    let angle = hsv.hue.into_positive_degrees();
    let h = ((angle / 2.0).round() as u16 % MODULUS) as u8;
    let s = (hsv.saturation * 255.0).round() as u8;
    let v = (hsv.value * 255.0).round() as u8;
    (h, s, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_primaries() {
        // Red 0°, green 120°, blue 240° on the half-degree scale
        assert_eq!(quantize_hsv(255, 0, 0), (0, 255, 255));
        assert_eq!(quantize_hsv(0, 255, 0), (60, 255, 255));
        assert_eq!(quantize_hsv(0, 0, 255), (120, 255, 255));
    }

    #[test]
    fn test_quantize_grays() {
        // Achromatic pixels carry zero saturation and hue 0
        assert_eq!(quantize_hsv(0, 0, 0), (0, 0, 0));
        assert_eq!(quantize_hsv(255, 255, 255), (0, 0, 255));
        let (h, s, v) = quantize_hsv(128, 128, 128);
        assert_eq!((h, s), (0, 0));
        assert_eq!(v, 128);
    }

    #[test]
    fn test_hue_stays_below_modulus() {
        // Near-red from the magenta side must wrap, not reach 180
        let (h, _, _) = quantize_hsv(255, 0, 1);
        assert!(h < 180);
    }

    #[test]
    fn test_channels_share_dimensions() {
        let pixels = PixelGrid::new(3, 2, vec![[10, 200, 40]; 6]);
        let channels = HsvChannels::from_pixels(&pixels);
        assert!(channels.hue.same_dimensions(&channels.saturation));
        assert!(channels.hue.same_dimensions(&channels.value));
        assert_eq!(channels.hue.width(), 3);
        assert_eq!(channels.hue.height(), 2);
    }
}
