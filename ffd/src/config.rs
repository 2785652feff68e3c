use serde::{Deserialize, Serialize};

use cutplan::config::CutPlanConfig;

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the FFD reference implementation
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct FFDConfig {
    /// Configuration of the layout engine
    pub cut_config: CutPlanConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for FFDConfig {
    fn default() -> Self {
        Self {
            cut_config: CutPlanConfig::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
