//! Pair resolution policies

pub mod max;
pub mod merge;

pub use max::MaxConfidence;
pub use merge::LargestArea;

use crate::resolution::OverlapMode;
use crate::traits::MergePolicy;

/// Policy implementing the given mode
pub fn for_mode(mode: OverlapMode) -> &'static dyn MergePolicy {
    match mode {
        OverlapMode::Max => &MaxConfidence,
        OverlapMode::Merge => &LargestArea,
    }
}
