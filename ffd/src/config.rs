use gridforge::autopack::SortConfig;
use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the FFD harness
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct FFDConfig {
    /// Overrides the sort configuration stored in the save payload.
    /// If undefined, the payload's own configuration is used.
    pub sort_override: Option<SortConfig>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for FFDConfig {
    fn default() -> Self {
        Self {
            sort_override: None,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
