//! Floating frame settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingConfig {
    /// Width used when no panel specifies one (valid range: 50-4096).
    pub default_width: f64,
    /// Height used when no panel specifies one (valid range: 50-4096).
    pub default_height: f64,
    /// Offset applied when a moved panel floats near its old position (valid range: 0-200).
    pub move_offset: f64,
    /// Smallest width a floating frame can be resized to (valid range: 10-1000).
    pub min_width: f64,
    /// Smallest height a floating frame can be resized to (valid range: 10-1000).
    pub min_height: f64,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            default_width: 400.0,
            default_height: 300.0,
            move_offset: 20.0,
            min_width: 50.0,
            min_height: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floating_config_defaults() {
        let config = FloatingConfig::default();
        assert!((config.default_width - 400.0).abs() < f64::EPSILON);
        assert!((config.default_height - 300.0).abs() < f64::EPSILON);
        assert!((config.move_offset - 20.0).abs() < f64::EPSILON);
        assert!((config.min_width - 50.0).abs() < f64::EPSILON);
    }
}
