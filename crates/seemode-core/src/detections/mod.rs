//! Detection records grouped by class

pub mod data;
pub mod record;

pub use data::{load_detections, parse_detections, save_detections};
pub use record::{DetectionRecord, DetectionsByClass, HIGH_CONFIDENCE_CLASS};
