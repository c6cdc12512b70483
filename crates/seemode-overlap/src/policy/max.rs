//! Keep the more confident detection of an overlapping pair

use crate::traits::{MergePolicy, Winner};
use seemode_core::DetectionRecord;

/// "max" mode: highest confidence wins.
///
/// On equal confidence the second record wins unless the first one is
/// labelled "high".
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxConfidence;

impl MergePolicy for MaxConfidence {
    fn name(&self) -> &'static str {
        "max"
    }

    fn select(&self, first: &DetectionRecord, second: &DetectionRecord) -> Winner {
        let tie = first.confidence == second.confidence;

        if first.confidence > second.confidence || (tie && first.is_high_confidence()) {
            Winner::First
        } else {
            Winner::Second
        }
    }
}
