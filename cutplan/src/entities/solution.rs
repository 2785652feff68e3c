use std::fmt;

use crate::entities::{Layout, Part, Remnant, Side};

/// Axis of a cut in the flattened cutting plan.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum CutDirection {
    Vertical,
    Horizontal,
}

impl fmt::Display for CutDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutDirection::Vertical => write!(f, "vertical"),
            CutDirection::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// One step of the flattened guillotine cutting plan.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct PlanStep {
    pub direction: CutDirection,
    pub position: f32,
}

/// Edge-banding requirement of a single part, post rotation remap.
#[derive(Clone, Debug, PartialEq)]
pub struct PartBanding {
    pub part_id: usize,
    /// Banded sides in placement orientation
    pub sides: Vec<Side>,
    /// Total strip length required for this part
    pub length: f32,
}

/// Complete result of a packing run.
/// Parts that could not be placed remain in `unplaced_parts`; together with the
/// placements in `layouts` they always account for every part of the instance.
#[derive(Clone, Debug, PartialEq)]
pub struct CutPlanSolution {
    pub layouts: Vec<Layout>,
    /// All harvested remnants, including those below the reuse threshold and those later packed
    pub remnants: Vec<Remnant>,
    pub unplaced_parts: Vec<Part>,
    /// Number of full sheets with at least one placement (remnant layouts excluded)
    pub sheets_used: usize,
    pub available_sheets: usize,
    /// Lower bound on the number of sheets, by area alone
    pub min_estimated_sheets: usize,
    pub material_usage_pct: f32,
    pub waste_pct: f32,
    /// Number of cutting plan steps
    pub total_cuts: usize,
    pub cutting_plan: Vec<PlanStep>,
    pub edge_banding_by_part: Vec<PartBanding>,
    pub edge_banding_total_length: f32,
}

impl CutPlanSolution {
    pub fn placed_qty(&self) -> usize {
        self.layouts.iter().map(|l| l.placed_parts.len()).sum()
    }
}
