//! Full configuration validation.
//!
//! Each section has its own validator; all errors are collected into a
//! single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::DockConfig;
use dockyard_common::ConfigError;

use helpers::validate_range_f64;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DockConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_anchor(&mut errors, config);
    validate_splitter(&mut errors, config);
    validate_floating(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_anchor(errors: &mut Vec<String>, config: &DockConfig) {
    let anchor = &config.anchor;
    validate_range_f64(errors, "anchor.title_bar_height", anchor.title_bar_height, 0.0, 64.0);
    validate_range_f64(errors, "anchor.edge_band", anchor.edge_band, 0.05, 0.5);
    validate_range_f64(errors, "anchor.preview_band", anchor.preview_band, 0.1, 0.9);
}

fn validate_splitter(errors: &mut Vec<String>, config: &DockConfig) {
    let splitter = &config.splitter;
    validate_range_f64(errors, "splitter.bar_size", splitter.bar_size, 0.0, 20.0);
    validate_range_f64(errors, "splitter.leading_ratio", splitter.leading_ratio, 0.05, 0.95);
    validate_range_f64(
        errors,
        "splitter.trailing_ratio",
        splitter.trailing_ratio,
        0.05,
        0.95,
    );
    validate_range_f64(errors, "splitter.bar_hit_slop", splitter.bar_hit_slop, 0.0, 20.0);
}

fn validate_floating(errors: &mut Vec<String>, config: &DockConfig) {
    let floating = &config.floating;
    validate_range_f64(errors, "floating.default_width", floating.default_width, 50.0, 4096.0);
    validate_range_f64(
        errors,
        "floating.default_height",
        floating.default_height,
        50.0,
        4096.0,
    );
    validate_range_f64(errors, "floating.move_offset", floating.move_offset, 0.0, 200.0);
    validate_range_f64(errors, "floating.min_width", floating.min_width, 10.0, 1000.0);
    validate_range_f64(errors, "floating.min_height", floating.min_height, 10.0, 1000.0);
}
