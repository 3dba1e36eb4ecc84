//! Mask statistics
//!
//! Reduces a region mask to the percentage of image area it covers.
//! Every percentage is recomputed from scratch per image; there is no
//! caching across classifications.

use crate::color::Mask;
use crate::error::{Result, ToneError};

/// Percentage of mask cells where the region predicate held, in [0, 100].
///
/// # Errors
///
/// Returns [`ToneError::EmptyImage`] for a zero-area mask.
pub fn coverage(mask: &Mask) -> Result<f32> {
    if mask.is_empty() {
        return Err(ToneError::EmptyImage);
    }
    Ok(100.0 * mask.count_set() as f32 / mask.len() as f32)
}
