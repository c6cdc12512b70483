//! Detection records and their wire shape
//!
//! On the wire a record is `{"bbox": [x1, y1, x2, y2, confidence],
//! "confidence_class": "high"}`. In memory the box and the confidence are
//! kept apart.

use crate::geometry::BBox;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Confidence-class label that wins confidence ties in "max" resolution
pub const HIGH_CONFIDENCE_CLASS: &str = "high";

/// Detections keyed by class name, in the order the classes were supplied
pub type DetectionsByClass = IndexMap<String, Vec<DetectionRecord>>;

/// A single detection produced by one inference pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDetection", into = "RawDetection")]
pub struct DetectionRecord {
    pub bbox: BBox,
    pub confidence: f64,
    pub confidence_class: Option<String>,
}

impl DetectionRecord {
    /// Create an unlabelled detection
    pub fn new(bbox: BBox, confidence: f64) -> Self {
        Self {
            bbox,
            confidence,
            confidence_class: None,
        }
    }

    /// Set the confidence-class label
    pub fn with_class(mut self, confidence_class: impl Into<String>) -> Self {
        self.confidence_class = Some(confidence_class.into());
        self
    }

    pub fn is_high_confidence(&self) -> bool {
        self.confidence_class.as_deref() == Some(HIGH_CONFIDENCE_CLASS)
    }

    /// Box corners followed by the confidence
    pub fn to_array(&self) -> [f64; 5] {
        let [x1, y1, x2, y2] = self.bbox.to_array();
        [x1, y1, x2, y2, self.confidence]
    }
}

#[derive(Serialize, Deserialize)]
struct RawDetection {
    bbox: Vec<f64>,
    #[serde(default)]
    confidence_class: Option<String>,
}

impl TryFrom<RawDetection> for DetectionRecord {
    type Error = String;

    fn try_from(raw: RawDetection) -> Result<Self, Self::Error> {
        // Values past the confidence are ignored
        match raw.bbox.as_slice() {
            &[x1, y1, x2, y2, confidence, ..] => Ok(Self {
                bbox: BBox::new(x1, y1, x2, y2),
                confidence,
                confidence_class: raw.confidence_class,
            }),
            short => Err(format!(
                "bbox needs at least 5 values (x1, y1, x2, y2, confidence), got {}",
                short.len()
            )),
        }
    }
}

impl From<DetectionRecord> for RawDetection {
    fn from(record: DetectionRecord) -> Self {
        Self {
            bbox: record.to_array().to_vec(),
            confidence_class: record.confidence_class,
        }
    }
}
