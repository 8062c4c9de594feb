//! Drop-target (anchor) detection settings.

use serde::{Deserialize, Serialize};

/// Geometry of the regions tested while dragging a panel over a frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Depth of the tab-bar band in pixels (valid range: 0-64).
    pub title_bar_height: f64,
    /// Depth of each split band as a fraction of the frame (valid range: 0.05-0.5).
    pub edge_band: f64,
    /// Size of the ghost preview as a fraction of the frame (valid range: 0.1-0.9).
    pub preview_band: f64,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            title_bar_height: 18.0,
            edge_band: 0.25,
            preview_band: 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_config_defaults() {
        let config = AnchorConfig::default();
        assert!((config.title_bar_height - 18.0).abs() < f64::EPSILON);
        assert!((config.edge_band - 0.25).abs() < f64::EPSILON);
        assert!((config.preview_band - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn anchor_config_partial_toml() {
        let config: AnchorConfig = toml::from_str("title_bar_height = 24.0").unwrap();
        assert!((config.title_bar_height - 24.0).abs() < f64::EPSILON);
        assert!((config.edge_band - 0.25).abs() < f64::EPSILON);
    }
}
