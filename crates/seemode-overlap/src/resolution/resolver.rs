//! Multi-pass overlap resolver

use super::config::{OverlapConfig, OverlapMode};
use super::stats::{ClassStats, ResolutionStats};
use crate::Result;
use crate::policy;
use crate::utils::merge_overlapping;
use log::{debug, info};
use seemode_core::{DetectionRecord, DetectionsByClass};

/// Resolves overlapping detections class by class
#[derive(Debug, Clone)]
pub struct OverlapResolver {
    config: OverlapConfig,
}

impl OverlapResolver {
    /// Create a resolver, rejecting an out-of-range threshold
    pub fn new(config: OverlapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &OverlapConfig {
        &self.config
    }

    /// Resolve every class independently
    pub fn resolve(&self, detections: &DetectionsByClass) -> DetectionsByClass {
        self.resolve_with_stats(detections).0
    }

    /// Resolve every class and report how many merges each one needed
    pub fn resolve_with_stats(
        &self,
        detections: &DetectionsByClass,
    ) -> (DetectionsByClass, ResolutionStats) {
        let mut resolved = DetectionsByClass::new();
        let mut stats = ResolutionStats::new();

        for (class_name, records) in detections {
            let (survivors, merges) = self.resolve_class(records);

            debug!(
                "{}: {} -> {} detections ({} merges)",
                class_name,
                records.len(),
                survivors.len(),
                merges
            );

            stats.record(
                class_name,
                ClassStats {
                    input_count: records.len(),
                    output_count: survivors.len(),
                    merges,
                },
            );
            resolved.insert(class_name.clone(), survivors);
        }

        info!(
            "Resolved {} classes with mode '{}' (IoSA > {}): {} -> {} detections",
            stats.classes.len(),
            self.config.mode,
            self.config.iosa_threshold,
            stats.total_input(),
            stats.total_output()
        );

        (resolved, stats)
    }

    /// Resolve one class's detections, returning survivors and merge count
    pub fn resolve_class(&self, records: &[DetectionRecord]) -> (Vec<DetectionRecord>, usize) {
        let mut working = records.to_vec();
        let merges = merge_overlapping(
            &mut working,
            self.config.iosa_threshold,
            policy::for_mode(self.config.mode),
        );
        (working, merges)
    }
}

/// Resolve overlaps with a mode given by name ("max" or "merge").
///
/// The mode is checked before any class is touched, so an invalid mode
/// produces no output at all.
pub fn resolve_overlaps(
    detections: &DetectionsByClass,
    mode: &str,
    iosa_threshold: f64,
) -> Result<DetectionsByClass> {
    let mode: OverlapMode = mode.parse()?;
    let resolver = OverlapResolver::new(OverlapConfig {
        mode,
        iosa_threshold,
    })?;

    Ok(resolver.resolve(detections))
}
