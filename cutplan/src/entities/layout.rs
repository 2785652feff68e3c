use std::fmt;

use crate::entities::RemnantSide;

/// A part placed at a fixed position inside a [`Layout`].
/// Carries the post-rotation dimensions; the source [`Part`](crate::entities::Part) is never modified.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct PlacedPart {
    /// Id of the part instance in the [`CutPlanInstance`](crate::entities::CutPlanInstance)
    pub part_id: usize,
    /// x-coordinate of the top-left corner, in area coordinates
    pub x: f32,
    /// y-coordinate of the top-left corner, in area coordinates
    pub y: f32,
    /// Horizontal extent as placed
    pub width: f32,
    /// Vertical extent as placed
    pub height: f32,
    pub rotated: bool,
}

impl PlacedPart {
    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    /// True if the interiors of both rectangles intersect. Edge-touching is not an overlap.
    pub fn overlaps(&self, other: &PlacedPart) -> bool {
        self.x < other.x_max()
            && other.x < self.x_max()
            && self.y < other.y_max()
            && other.y < self.y_max()
    }
}

/// Identifies the physical area a [`Layout`] was packed onto.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum LayoutSource {
    /// A full stock sheet, numbered from 1
    Sheet(usize),
    /// A leftover area harvested from an already packed sheet
    Remnant { sheet: usize, side: RemnantSide },
}

impl fmt::Display for LayoutSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutSource::Sheet(n) => write!(f, "Sheet {n}"),
            LayoutSource::Remnant { sheet, side } => write!(f, "Sheet {sheet} {side}"),
        }
    }
}

/// A guillotine cut line at `position` on the perpendicular axis.
/// `segments` are the `[start, end]` intervals along the line's own axis,
/// kept sorted, disjoint and merged at all times.
#[derive(Clone, Debug, PartialEq)]
pub struct CutLine {
    pub position: f32,
    pub segments: Vec<(f32, f32)>,
}

/// One packed area: a full stock sheet or a reused remnant.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub source: LayoutSource,
    /// Full width of the packed area (differs from the stock width for remnants)
    pub area_width: f32,
    /// Full height of the packed area
    pub area_height: f32,
    pub placed_parts: Vec<PlacedPart>,
    pub vertical_cuts: Vec<CutLine>,
    pub horizontal_cuts: Vec<CutLine>,
    /// Rightmost shelf cursor reached, including the trailing kerf
    pub max_x: f32,
    /// Bottom of the lowest shelf opened
    pub max_y: f32,
    pub is_remnant: bool,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.placed_parts.is_empty()
    }

    /// Total area covered by placed parts.
    pub fn placed_area(&self) -> f32 {
        self.placed_parts.iter().map(|p| p.width * p.height).sum()
    }

    /// Number of distinct cut line positions, both axes combined.
    pub fn cut_count(&self) -> usize {
        self.vertical_cuts.len() + self.horizontal_cuts.len()
    }
}
