//! Batch classification over the image directory
//!
//! Snapshots the store listing once, then classifies each entry in turn.
//! Deletion timing is an explicit policy chosen by the caller instead of
//! a side effect buried in the classify path. The historical behavior of
//! the system wiped the whole directory after every single image, which
//! deletes not-yet-processed snapshot entries; [`CleanupMode::AfterEachImage`]
//! reproduces that, and the read failures it causes on later entries are
//! reported through telemetry and skipped.

use crate::analysis::{ToneAnalyzer, ToneResult};
use crate::error::Result;
use crate::store::ImageStore;
use crate::telemetry::Telemetry;

/// When the batch runner clears the working directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupMode {
    /// Wipe the directory after every classification, reproducing the
    /// historical wipe-as-you-go behavior
    AfterEachImage,
    /// Wipe the directory once, after the whole snapshot is processed
    #[default]
    AfterBatch,
    /// Never delete; the caller owns cleanup
    Keep,
}

/// Outcome for one snapshot entry
#[derive(Debug)]
pub struct BatchItem {
    pub name: String,
    pub outcome: Result<ToneResult>,
}

/// Runs classification over every image in a store's directory
pub struct BatchRunner<T: Telemetry> {
    store: ImageStore,
    analyzer: ToneAnalyzer<T>,
    cleanup: CleanupMode,
}

impl<T: Telemetry> BatchRunner<T> {
    pub fn new(store: ImageStore, analyzer: ToneAnalyzer<T>, cleanup: CleanupMode) -> Self {
        Self {
            store,
            analyzer,
            cleanup,
        }
    }

    /// Classify every image in the directory snapshot.
    ///
    /// The listing is taken once up front; a listing failure aborts the
    /// run. Per-item decode failures (including reads of files removed
    /// by an earlier `AfterEachImage` wipe) are recorded in the returned
    /// items and reported through telemetry, they never abort the batch.
    ///
    /// # Errors
    ///
    /// Returns an error only for the initial listing or a failed cleanup
    /// sweep.
    pub fn run(&self) -> Result<Vec<BatchItem>> {
        let names = self.store.list()?;
        let mut items = Vec::with_capacity(names.len());

        for name in names {
            self.analyzer.telemetry().classifying(&name);
            let outcome = self
                .store
                .read(&name)
                .and_then(|pixels| self.analyzer.analyze(&pixels));

            match &outcome {
                Ok(result) => self.analyzer.telemetry().labeled(&name, result.category),
                Err(error) => self.analyzer.telemetry().item_failed(&name, error),
            }
            items.push(BatchItem { name, outcome });

            if self.cleanup == CleanupMode::AfterEachImage {
                self.store.delete_all()?;
                self.analyzer.telemetry().directory_cleared();
            }
        }

        if self.cleanup == CleanupMode::AfterBatch {
            self.store.delete_all()?;
            self.analyzer.telemetry().directory_cleared();
        }
        Ok(items)
    }
}
