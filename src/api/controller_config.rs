use serde::{Deserialize, Serialize};

use crate::core::DateStyle;
use crate::error::{GraphError, GraphResult};

/// Public controller bootstrap configuration.
///
/// This type is serializable so host applications can persist/load
/// interaction setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphControllerConfig {
    /// Horizontal gap between a bar's rendered edge and its tooltip.
    #[serde(default = "default_tooltip_margin_px")]
    pub tooltip_margin_px: f64,
    #[serde(default)]
    pub date_style: DateStyle,
    /// Scroll every region to its trailing edge on attach.
    #[serde(default = "default_scroll_to_end_on_attach")]
    pub scroll_to_end_on_attach: bool,
    /// Enables click-to-navigate on bar groups.
    #[serde(default = "default_navigation_enabled")]
    pub navigation_enabled: bool,
}

impl Default for GraphControllerConfig {
    fn default() -> Self {
        Self {
            tooltip_margin_px: default_tooltip_margin_px(),
            date_style: DateStyle::default(),
            scroll_to_end_on_attach: default_scroll_to_end_on_attach(),
            navigation_enabled: default_navigation_enabled(),
        }
    }
}

impl GraphControllerConfig {
    pub(super) fn validate(self) -> GraphResult<Self> {
        if !self.tooltip_margin_px.is_finite() {
            return Err(GraphError::InvalidConfig(
                "tooltip margin must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_tooltip_margin_px() -> f64 {
    10.0
}

fn default_scroll_to_end_on_attach() -> bool {
    true
}

fn default_navigation_enabled() -> bool {
    true
}
