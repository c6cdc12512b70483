//! Seemode overlap resolution
//!
//! Consolidates the duplicate detections that several inference passes
//! (tiles, scales) report for the same object into one set per class.

pub mod error;
pub mod policy;
pub mod resolution;
pub mod utils;

// Re-export commonly used types
pub use error::OverlapError;
pub use policy::{LargestArea, MaxConfidence};
pub use resolution::{
    ClassStats, OverlapConfig, OverlapMode, OverlapResolver, ResolutionStats, resolve_overlaps,
};
pub use seemode_core::{BBox, DetectionRecord, DetectionsByClass};

// Error handling
pub type Result<T> = std::result::Result<T, OverlapError>;

/// Core traits for overlap resolution
pub mod traits {
    use super::*;

    /// Which record of an overlapping pair survives
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Winner {
        First,
        Second,
    }

    /// Tie-break rule applied to a pair whose IoSA exceeds the threshold
    pub trait MergePolicy {
        fn name(&self) -> &'static str;
        fn select(&self, first: &DetectionRecord, second: &DetectionRecord) -> Winner;
    }
}
