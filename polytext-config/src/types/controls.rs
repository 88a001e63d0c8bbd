//! Settings shared by the list/combo and multi-string editor controls.

use serde::{Deserialize, Serialize};

/// Control behaviour settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSettings {
    /// Height budget for one item/row in millipoints; 0 means no constraint
    #[serde(default)]
    pub max_item_height_mp: u32,

    /// Smallest size a fitted run may be shown at; `None` lets fitting shrink freely
    #[serde(default)]
    pub min_point_size_mp: Option<u32>,

    /// Whether the highlighted row is drawn
    #[serde(default = "crate::defaults::show_highlight")]
    pub show_highlight: bool,

    /// Capacity of the font metrics cache
    #[serde(default = "crate::defaults::metrics_cache_size")]
    pub metrics_cache_size: usize,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            max_item_height_mp: 0,
            min_point_size_mp: None,
            show_highlight: crate::defaults::show_highlight(),
            metrics_cache_size: crate::defaults::metrics_cache_size(),
        }
    }
}
