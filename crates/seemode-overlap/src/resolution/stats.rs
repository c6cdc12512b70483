//! Resolution statistics

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Counts for a single class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassStats {
    pub input_count: usize,
    pub output_count: usize,
    pub merges: usize,
}

/// Per-class report of one resolution call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolutionStats {
    pub classes: IndexMap<String, ClassStats>,
}

impl ResolutionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, class_name: &str, stats: ClassStats) {
        self.classes.insert(class_name.to_string(), stats);
    }

    pub fn total_input(&self) -> usize {
        self.classes.values().map(|s| s.input_count).sum()
    }

    pub fn total_output(&self) -> usize {
        self.classes.values().map(|s| s.output_count).sum()
    }

    pub fn total_merges(&self) -> usize {
        self.classes.values().map(|s| s.merges).sum()
    }
}
