use serde::{Deserialize, Serialize};

/// Options for drawing layouts to SVG
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct SvgDrawOptions {
    /// Draw the merged guillotine cut segments on top of the layout
    #[serde(default = "default_true")]
    pub draw_cuts: bool,
    /// Highlight the banded edges of placed parts
    #[serde(default = "default_true")]
    pub draw_banding: bool,
    /// Multiplier on the default stroke width
    #[serde(default = "default_stroke_multiplier")]
    pub stroke_width_multiplier: f32,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            draw_cuts: true,
            draw_banding: true,
            stroke_width_multiplier: 1.0,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_stroke_multiplier() -> f32 {
    1.0
}

pub const SHEET_FILL: &str = "#e9ecef";
pub const SHEET_STROKE: &str = "#adb5bd";
pub const PART_FILL: &str = "#3498db";
pub const BANDING_STROKE: &str = "#f1c40f";
pub const CUT_STROKE: &str = "#8b4513";
