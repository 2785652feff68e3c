use serde::{Deserialize, Serialize};

/// Governs whether leftover areas of used sheets may be reused for parts
/// that could not be placed on any full sheet.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RemnantPolicy {
    /// Remnants are reported but never packed.
    None,
    /// Any unplaced part is a candidate for any remnant.
    Any,
    /// Only parts of roughly matching size are candidates: part area at most
    /// 0.8x the remnant area and part longest dimension at most the remnant's.
    SimilarOnly,
}

/// Configuration for a packing run.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct CutPlanConfig {
    pub remnant_policy: RemnantPolicy,
    /// If enabled (and the stock carries a grain direction), grain-locked parts are never rotated.
    pub respect_grain: bool,
    /// Remnants with an area below this threshold are reported but never reused.
    pub min_remnant_area: f32,
}

impl Default for CutPlanConfig {
    fn default() -> Self {
        Self {
            remnant_policy: RemnantPolicy::SimilarOnly,
            respect_grain: true,
            min_remnant_area: 100.0,
        }
    }
}
