//! Injected telemetry sink
//!
//! Components report progress through a capability passed in by the
//! caller rather than a process-wide logger. The default sink forwards
//! to `tracing`; tests use [`NullTelemetry`].

use crate::analysis::classify::Category;
use crate::error::ToneError;

/// Sink for classification progress events
pub trait Telemetry {
    /// An image is about to be classified
    fn classifying(&self, name: &str) {
        let _ = name;
    }

    /// The three computed region percentages for an image
    fn percentages(&self, warm_pct: f32, cool_pct: f32, dull_pct: f32) {
        let _ = (warm_pct, cool_pct, dull_pct);
    }

    /// The final label for an image
    fn labeled(&self, name: &str, category: Category) {
        let _ = (name, category);
    }

    /// A batch item failed and will be skipped
    fn item_failed(&self, name: &str, error: &ToneError) {
        let _ = (name, error);
    }

    /// All files in the working directory were removed
    fn directory_cleared(&self) {}
}

/// Telemetry sink that emits `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetry;

impl Telemetry for TracingTelemetry {
    fn classifying(&self, name: &str) {
        tracing::info!(image = name, "classifying image");
    }

    fn percentages(&self, warm_pct: f32, cool_pct: f32, dull_pct: f32) {
        tracing::info!(warm_pct, cool_pct, dull_pct, "region percentages");
    }

    fn labeled(&self, name: &str, category: Category) {
        tracing::info!(image = name, label = %category, "image classified");
    }

    fn item_failed(&self, name: &str, error: &ToneError) {
        tracing::warn!(image = name, %error, "skipping image");
    }

    fn directory_cleared(&self) {
        tracing::info!("all files in the image directory have been deleted");
    }
}

/// Telemetry sink that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTelemetry;

impl Telemetry for NullTelemetry {}
