use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use super::record::DetectionsByClass;

/// Parse a class-name -> detections mapping from JSON text
pub fn parse_detections(json: &str) -> Result<DetectionsByClass> {
    serde_json::from_str(json).context("Failed to parse detections JSON")
}

/// Load detections from a JSON file
pub fn load_detections<P: AsRef<Path>>(path: P) -> Result<DetectionsByClass> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to open detections file: {:?}", path))?;

    let detections = parse_detections(&json)
        .with_context(|| format!("Invalid detections file: {:?}", path))?;

    info!(
        "Loaded {} detections across {} classes from {:?}",
        detections.values().map(Vec::len).sum::<usize>(),
        detections.len(),
        path
    );
    Ok(detections)
}

/// Write detections to a JSON file, pretty-printed
pub fn save_detections<P: AsRef<Path>>(detections: &DetectionsByClass, path: P) -> Result<()> {
    let path = path.as_ref();
    let json =
        serde_json::to_string_pretty(detections).context("Failed to serialize detections")?;

    fs::write(path, json).with_context(|| format!("Failed to write detections to: {:?}", path))?;

    Ok(())
}
