//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = DockConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_title_bar_too_tall() {
    let mut config = DockConfig::default();
    config.anchor.title_bar_height = 100.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("anchor.title_bar_height"));
}

#[test]
fn catches_edge_band_over_half() {
    let mut config = DockConfig::default();
    config.anchor.edge_band = 0.6;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("anchor.edge_band"));
}

#[test]
fn catches_nan_ratio() {
    let mut config = DockConfig::default();
    config.splitter.leading_ratio = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splitter.leading_ratio"));
}

#[test]
fn catches_tiny_floating_size() {
    let mut config = DockConfig::default();
    config.floating.default_width = 10.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("floating.default_width"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = DockConfig::default();
    config.anchor.preview_band = 0.0;
    config.splitter.bar_size = 50.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("anchor.preview_band"));
    assert!(err.contains("splitter.bar_size"));
    assert!(err.contains("; "));
}

#[test]
fn error_message_format() {
    let mut config = DockConfig::default();
    config.floating.move_offset = 500.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("floating.move_offset = 500 is out of range [0, 200]"));
}
