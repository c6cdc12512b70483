//! Utility modules

pub mod pairwise;

pub use pairwise::{first_overlapping_pair, merge_overlapping};
