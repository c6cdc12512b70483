//! Bounding box geometry and overlap metrics
//!
//! Boxes are stored as corner coordinates `(x1, y1, x2, y2)`. Corner ordering
//! is assumed, not validated: a malformed box simply yields odd areas.

use serde::{Deserialize, Serialize};

/// Padding added to each box area before dividing by it.
pub const AREA_EPS: f64 = 1e-7;

/// Axis-aligned bounding box in corner form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BBox {
    /// Create a new bounding box from its corners
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Calculate area of the bounding box
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Area of the overlapping region, zero for disjoint boxes
    pub fn intersection(&self, other: &BBox) -> f64 {
        let w = (self.x2.min(other.x2) - self.x1.max(other.x1)).max(0.0);
        let h = (self.y2.min(other.y2) - self.y1.max(other.y1)).max(0.0);
        w * h
    }

    /// Intersection over the area of the smaller box (IoSA).
    ///
    /// Unlike IoU this reaches 1.0 whenever one box fully contains the other,
    /// which is what flags a duplicate found at a different scale. The divisor
    /// is `other`'s area only when `self` is strictly larger.
    pub fn iosa(&self, other: &BBox) -> f64 {
        let inter = self.intersection(other);
        let self_area = self.area() + AREA_EPS;
        let other_area = other.area() + AREA_EPS;

        let smaller_area = if self_area > other_area {
            other_area
        } else {
            self_area
        };

        inter / smaller_area
    }

    /// Check if the IoSA with another box exceeds `threshold`
    pub fn overlaps(&self, other: &BBox, threshold: f64) -> bool {
        self.iosa(other) > threshold
    }

    /// True iff this box is strictly larger than `other`
    pub fn is_larger_than(&self, other: &BBox) -> bool {
        self.area() > other.area()
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

impl From<[f64; 4]> for BBox {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

/// Free-function form of [`BBox::iosa`]
pub fn iosa(a: &BBox, b: &BBox) -> f64 {
    a.iosa(b)
}

/// True iff `a`'s area strictly exceeds `b`'s; ties favor `b`
pub fn area_compare(a: &BBox, b: &BBox) -> bool {
    a.is_larger_than(b)
}
