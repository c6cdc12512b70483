//! Per-class overlap resolution

pub mod config;
pub mod resolver;
pub mod stats;

pub use config::{OverlapConfig, OverlapMode};
pub use resolver::{OverlapResolver, resolve_overlaps};
pub use stats::{ClassStats, ResolutionStats};
