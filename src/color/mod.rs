//! Pixel data model and color space transformation

pub mod grid;
pub mod hsv;

pub use grid::{ChannelGrid, Mask, PixelGrid};
pub use hsv::HsvChannels;
