use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box with its minimum corner at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "degenerate box {width}x{height}");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box for an entity anchored at `(anchor_x, anchor_y)`: the minimum
    /// corner sits half an extent left of and below the anchor.
    pub fn from_anchor(anchor_x: f32, anchor_y: f32, width: f32, height: f32) -> Self {
        Self::new(anchor_x - width / 2.0, anchor_y - height / 2.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap on both axes. Boxes that only share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.top()
            && self.top() > other.y
    }
}
