use std::fmt;

/// Which edge of the packed area a remnant was harvested from.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum RemnantSide {
    /// The band below the lowest shelf, spanning the full usable width
    Bottom,
    /// The strip right of the furthest shelf cursor, spanning the occupied height
    Right,
}

impl fmt::Display for RemnantSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemnantSide::Bottom => write!(f, "bottom"),
            RemnantSide::Right => write!(f, "right"),
        }
    }
}

/// A rectangular leftover area of a packed sheet, candidate for reuse.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Remnant {
    pub width: f32,
    pub length: f32,
    /// 1-based number of the sheet this remnant was harvested from
    pub sheet: usize,
    pub side: RemnantSide,
}

impl Remnant {
    pub fn area(&self) -> f32 {
        self.width * self.length
    }

    pub fn longest_dim(&self) -> f32 {
        f32::max(self.width, self.length)
    }
}
