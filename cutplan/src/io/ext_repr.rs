use serde::{Deserialize, Serialize};

fn default_qty() -> u64 {
    1
}

fn default_true() -> bool {
    true
}

/// External representation of a full problem instance.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtInstance {
    /// Optional name of the cutting job
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub stock: ExtStock,
    /// The part catalog, in order. Entries are expanded to `quantity` unit parts on import.
    pub parts: Vec<ExtPartEntry>,
}

/// External representation of the [`Stock`](crate::entities::Stock) descriptor.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtStock {
    pub width: f32,
    pub length: f32,
    /// Number of sheets available
    #[serde(default = "default_qty")]
    pub quantity: u64,
    /// Material consumed by the cutting tool between adjacent parts
    #[serde(default)]
    pub kerf: f32,
    /// Margin reserved on all four sides of every sheet
    #[serde(default)]
    pub edge_offset: f32,
    #[serde(default)]
    pub grain_enabled: bool,
}

/// External representation of one part catalog entry.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPartEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub width: f32,
    pub length: f32,
    #[serde(default = "default_qty")]
    pub quantity: u64,
    #[serde(default = "default_true")]
    pub rotation_allowed: bool,
    #[serde(default)]
    pub grain_locked: bool,
    #[serde(default)]
    pub edge_banding: ExtEdgeBanding,
}

/// External representation of the banded sides of a part.
#[derive(Serialize, Deserialize, Clone, Copy, Default)]
pub struct ExtEdgeBanding {
    #[serde(default)]
    pub top: bool,
    #[serde(default)]
    pub bottom: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
}

/// External representation of a full [`CutPlanSolution`](crate::entities::CutPlanSolution).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSolution {
    pub sheets_used: u64,
    pub available_sheets: u64,
    /// Lower bound on the number of sheets, by area alone
    pub min_estimated_sheets: u64,
    pub material_usage_pct: f32,
    pub waste_pct: f32,
    pub total_cuts: u64,
    /// Number of parts that could not be placed
    pub unplaced_parts: u64,
    pub edge_banding_total_length: f32,
    pub edge_banding_by_part: Vec<ExtPartBanding>,
    pub layouts: Vec<ExtLayout>,
    pub remnants: Vec<ExtRemnant>,
    pub cutting_plan: Vec<ExtPlanStep>,
}

/// External representation of a [`Layout`](crate::entities::Layout).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtLayout {
    /// The area this layout was packed onto, e.g. "Sheet 2" or "Sheet 2 bottom"
    pub source: String,
    pub is_remnant: bool,
    pub area_width: f32,
    pub area_height: f32,
    pub parts: Vec<ExtPlacedPart>,
    pub vertical_cuts: Vec<ExtCutLine>,
    pub horizontal_cuts: Vec<ExtCutLine>,
}

/// External representation of a [`PlacedPart`](crate::entities::PlacedPart).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPlacedPart {
    pub part_id: u64,
    pub name: String,
    /// Top-left corner, in area coordinates
    pub x: f32,
    pub y: f32,
    /// Extent as placed, after rotation
    pub width: f32,
    pub height: f32,
    pub rotated: bool,
}

/// External representation of a [`CutLine`](crate::entities::CutLine).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtCutLine {
    pub position: f32,
    /// Disjoint, merged `[start, end]` intervals along the line
    pub segments: Vec<(f32, f32)>,
}

/// External representation of a [`Remnant`](crate::entities::Remnant).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtRemnant {
    pub width: f32,
    pub length: f32,
    pub area: f32,
    /// Where the remnant sits, e.g. "Sheet 1 bottom"
    pub location: String,
}

/// One step of the flattened cutting plan.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPlanStep {
    /// "vertical" or "horizontal"
    pub direction: String,
    pub position: f32,
    /// Always "guillotine"; every cut runs the full extent of its panel
    #[serde(rename = "type")]
    pub cut_type: String,
}

/// Edge-banding summary of one part.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPartBanding {
    pub part_id: u64,
    pub name: String,
    /// Banded sides in placement orientation
    pub sides: Vec<String>,
    pub length: f32,
}
