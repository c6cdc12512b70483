//! Resolution configuration

use crate::error::OverlapError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How an overlapping pair is collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapMode {
    /// Keep the detection with the highest confidence
    Max,
    /// Keep the detection with the largest box
    Merge,
}

impl OverlapMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlapMode::Max => "max",
            OverlapMode::Merge => "merge",
        }
    }
}

impl FromStr for OverlapMode {
    type Err = OverlapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "max" => Ok(OverlapMode::Max),
            "merge" => Ok(OverlapMode::Merge),
            other => Err(OverlapError::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OverlapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overlap resolution configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapConfig {
    pub mode: OverlapMode,
    /// Pairs with IoSA strictly above this value are merged
    pub iosa_threshold: f64,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            mode: OverlapMode::Max,
            iosa_threshold: 0.5,
        }
    }
}

impl OverlapConfig {
    /// Keep the most confident detection of each overlapping pair
    pub fn max(iosa_threshold: f64) -> Self {
        Self {
            mode: OverlapMode::Max,
            iosa_threshold,
        }
    }

    /// Keep the largest detection of each overlapping pair
    pub fn merge(iosa_threshold: f64) -> Self {
        Self {
            mode: OverlapMode::Merge,
            iosa_threshold,
        }
    }

    /// Threshold must lie in (0, 1]
    pub fn validate(&self) -> crate::Result<()> {
        if self.iosa_threshold > 0.0 && self.iosa_threshold <= 1.0 {
            Ok(())
        } else {
            Err(OverlapError::InvalidThreshold {
                threshold: self.iosa_threshold,
            })
        }
    }

    /// Load configuration from a JSON file; missing fields keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        config.validate()?;

        Ok(config)
    }
}
