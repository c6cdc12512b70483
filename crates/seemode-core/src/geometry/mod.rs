//! Axis-aligned box geometry

pub mod bbox;

pub use bbox::{AREA_EPS, BBox, area_compare, iosa};
