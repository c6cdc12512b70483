//! Seemode core data model
//!
//! Box geometry and the per-class detection records exchanged with the
//! upstream detector.

pub mod detections;
pub mod geometry;

pub use detections::{DetectionRecord, DetectionsByClass, HIGH_CONFIDENCE_CLASS};
pub use geometry::{BBox, area_compare, iosa};
