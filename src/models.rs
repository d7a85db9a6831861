use serde::{Deserialize, Serialize};

/// Returns true if the closed intervals `[coord1, coord1 + delta1]` and
/// `[coord2, coord2 + delta2]` intersect. Touching endpoints count as overlap.
pub fn axes_overlap(coord1: u32, delta1: u32, coord2: u32, delta2: u32) -> bool {
    if coord1 <= coord2 + delta2 && coord1 >= coord2 {
        return true;
    }
    if coord1 + delta1 <= coord2 + delta2 && coord1 + delta1 >= coord2 {
        return true;
    }
    if coord2 <= coord1 + delta1 && coord2 >= coord1 {
        return true;
    }
    if coord2 + delta2 <= coord1 + delta1 && coord2 + delta2 >= coord1 {
        return true;
    }

    false
}

/// Axis-aligned bounding box of one candidate glyph region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl GlyphBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// True iff the two boxes intersect on both axes (2D bounding-box test).
    pub fn overlaps(&self, other: &GlyphBox) -> bool {
        axes_overlap(self.x, self.width, other.x, other.width)
            && axes_overlap(self.y, self.height, other.y, other.height)
    }

    /// Sort key giving left-to-right reading order, with the remaining fields
    /// as tie-breakers so the ordering is total.
    pub fn reading_order_key(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }
}

/// Outcome of evaluating a reconstructed expression.
///
/// `Unresolved` is a legitimate terminal result, not an error: the token
/// sequence matched none of the supported expression shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Solution {
    Value(f64),
    Unresolved,
}

impl Solution {
    pub fn value(&self) -> Option<f64> {
        match self {
            Solution::Value(v) => Some(*v),
            Solution::Unresolved => None,
        }
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solution::Value(v) => write!(f, "{}", v),
            Solution::Unresolved => write!(f, "unresolved"),
        }
    }
}
