//! Keep the larger detection of an overlapping pair

use crate::traits::{MergePolicy, Winner};
use seemode_core::{DetectionRecord, area_compare};

/// "merge" mode: the larger box wins, carrying its own confidence and label.
/// Equal areas go to the second record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestArea;

impl MergePolicy for LargestArea {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn select(&self, first: &DetectionRecord, second: &DetectionRecord) -> Winner {
        if area_compare(&first.bbox, &second.bbox) {
            Winner::First
        } else {
            Winner::Second
        }
    }
}
