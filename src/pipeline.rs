//! Detection file resolution using seemode-overlap

use anyhow::{Context, Result};
use log::info;
use seemode_core::detections::{load_detections, save_detections};
use seemode_overlap::{OverlapConfig, OverlapMode, OverlapResolver, ResolutionStats};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Resolved inputs for one run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub config: OverlapConfig,
    pub stats: bool,
}

/// Summary written alongside the log when statistics are requested
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    config: &'a OverlapConfig,
    stats: &'a ResolutionStats,
}

/// Start from the config file (or defaults) and apply command-line overrides
pub fn build_config(
    config_path: Option<&Path>,
    mode: Option<&str>,
    threshold: Option<f64>,
) -> Result<OverlapConfig> {
    let mut config = match config_path {
        Some(path) => OverlapConfig::from_json_file(path)?,
        None => OverlapConfig::default(),
    };

    if let Some(mode) = mode {
        config.mode = mode.parse::<OverlapMode>()?;
    }
    if let Some(threshold) = threshold {
        config.iosa_threshold = threshold;
    }

    config.validate()?;
    Ok(config)
}

/// Load, resolve and write one detections file
pub fn run(options: &RunOptions) -> Result<()> {
    let detections = load_detections(&options.input)?;

    let resolver = OverlapResolver::new(options.config.clone())?;
    let (resolved, stats) = resolver.resolve_with_stats(&detections);

    if options.stats {
        for (class_name, class_stats) in &stats.classes {
            info!(
                "  - {}: {} -> {} ({} merges)",
                class_name, class_stats.input_count, class_stats.output_count, class_stats.merges
            );
        }
        let report = RunReport {
            config: resolver.config(),
            stats: &stats,
        };
        info!(
            "Report: {}",
            serde_json::to_string(&report).context("Failed to serialize report")?
        );
    }

    match &options.output {
        Some(path) => {
            save_detections(&resolved, path)?;
            info!("Consolidated detections saved: {:?}", path);
        }
        None => {
            let json = serde_json::to_string_pretty(&resolved)
                .context("Failed to serialize detections")?;
            println!("{}", json);
        }
    }

    Ok(())
}
