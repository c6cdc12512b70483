//! Pairwise merge loop shared by every resolution policy
//!
//! Each pass scans index pairs `(i1, i2)`, `i1 < i2`, in lexicographic order
//! and stops at the first pair whose IoSA exceeds the threshold. The policy's
//! winner is written to `i1`, `i2` is removed, and the scan restarts on the
//! shorter list. When several disjoint pairs overlap at once the result can
//! depend on record order; callers rely on that order staying exactly as is.

use crate::traits::{MergePolicy, Winner};
use log::debug;
use seemode_core::DetectionRecord;

/// First pair in lexicographic index order whose IoSA exceeds `threshold`
pub fn first_overlapping_pair(
    records: &[DetectionRecord],
    threshold: f64,
) -> Option<(usize, usize)> {
    let len = records.len();

    (0..len)
        .flat_map(|i1| (i1 + 1..len).map(move |i2| (i1, i2)))
        .find(|&(i1, i2)| records[i1].bbox.overlaps(&records[i2].bbox, threshold))
}

/// Collapse overlapping pairs in place until none is left.
///
/// Returns the number of merges performed; the list shrinks by one per merge.
pub fn merge_overlapping<P>(records: &mut Vec<DetectionRecord>, threshold: f64, policy: &P) -> usize
where
    P: MergePolicy + ?Sized,
{
    let mut merges = 0;

    while records.len() > 1 {
        let Some((i1, i2)) = first_overlapping_pair(records, threshold) else {
            break;
        };

        // Shift-remove keeps the relative order of the remaining records
        let second = records.remove(i2);
        let winner = policy.select(&records[i1], &second);

        debug!(
            "{}: merging #{} {:?} (conf {:.3}) with #{} {:?} (conf {:.3}), keeping {:?}",
            policy.name(),
            i1,
            records[i1].bbox.to_array(),
            records[i1].confidence,
            i2,
            second.bbox.to_array(),
            second.confidence,
            winner
        );

        if winner == Winner::Second {
            records[i1] = second;
        }
        merges += 1;
    }

    merges
}
