//! Error types for overlap resolution

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlapError {
    #[error("Invalid mode '{mode}' for multi pass overlap postprocessing, choose from \"max\" or \"merge\"")]
    InvalidMode { mode: String },

    #[error("IoSA threshold {threshold} is out of range (0.0, 1.0]")]
    InvalidThreshold { threshold: f64 },
}
