//! Split tree geometry settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Pixels reserved for the bar between the two panes (valid range: 0-20).
    pub bar_size: f64,
    /// Initial ratio when the new pane is pane0, i.e. docked top/left (valid range: 0.05-0.95).
    pub leading_ratio: f64,
    /// Initial ratio when the new pane is pane1, i.e. docked bottom/right (valid range: 0.05-0.95).
    pub trailing_ratio: f64,
    /// Extra pixels on each side of a bar that still grab it (valid range: 0-20).
    pub bar_hit_slop: f64,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            bar_size: 4.0,
            leading_ratio: 0.4,
            trailing_ratio: 0.6,
            bar_hit_slop: 6.0,
        }
    }
}
