use std::fmt;

/// Which sides of a part receive an edge-banding strip.
/// Sides are named in the part's own (unrotated) orientation.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub struct EdgeBanding {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeBanding {
    pub const NONE: EdgeBanding = EdgeBanding {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }

    /// Remaps the banding flags after the part has been rotated 90 degrees:
    /// left ends up on top, top on the right, right on the bottom and bottom on the left.
    /// This is a fixed cycle, not an involution: applying it twice yields the 180 degree remap.
    pub fn rotated(self) -> Self {
        EdgeBanding {
            top: self.left,
            right: self.top,
            bottom: self.right,
            left: self.bottom,
        }
    }
}

/// One side of a placed part, as reported in the edge-banding summary.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Top => write!(f, "top"),
            Side::Bottom => write!(f, "bottom"),
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A single physical part to be cut from stock.
/// Catalog entries with a quantity are expanded into one `Part` per unit at import time.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    /// Unique within a [`CutPlanInstance`](crate::entities::CutPlanInstance), consecutive from 0
    pub id: usize,
    /// Name of the catalog entry this part was expanded from
    pub name: String,
    /// Horizontal dimension in the natural orientation
    pub width: f32,
    /// Vertical dimension in the natural orientation
    pub length: f32,
    /// Whether the part may be placed rotated by 90 degrees
    pub rotation_allowed: bool,
    /// Whether the part must follow the stock's grain direction
    pub grain_locked: bool,
    pub edge_banding: EdgeBanding,
}

impl Part {
    pub fn area(&self) -> f32 {
        self.width * self.length
    }

    pub fn longest_dim(&self) -> f32 {
        f32::max(self.width, self.length)
    }
}
