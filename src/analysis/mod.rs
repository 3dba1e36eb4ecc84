//! Region masking, mask statistics, and category decision logic

pub mod classify;
pub mod masks;
pub mod stats;

pub use classify::{classify, Category, ToneAnalyzer, ToneResult};
pub use masks::RegionThresholds;
pub use stats::coverage;
