//! Write DockConfig to TOML on disk.
//!
//! Writes go to a `.tmp` file first and are renamed into place so a
//! crash mid-write never leaves a truncated config behind.

use std::path::Path;

use dockyard_common::ConfigError;

use crate::schema::DockConfig;
use crate::toml_loader::default_config_path;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Write config to the platform default path.
pub fn save_config(config: &DockConfig) -> Result<(), ConfigError> {
    let path = default_config_path()?;
    save_config_to_path(config, &path)
}

/// Write config to a specific path, creating parent directories.
pub fn save_config_to_path(config: &DockConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;
    write_atomic(path, &toml_str).map_err(ConfigError::ParseError)?;
    tracing::debug!(path = %path.display(), "config saved to disk");
    Ok(())
}

/// Atomic write helper shared with the layout store.
///
/// Errors are returned as display strings so each caller can wrap them
/// in its own error type.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create directory {}: {e}", parent.display()))?;
    }

    let tmp_path = path.with_extension("tmp");
    std::fs::write(&tmp_path, contents)
        .map_err(|e| format!("failed to write {}: {e}", tmp_path.display()))?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Cross-device rename.
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        std::fs::write(path, contents)
            .map_err(|e2| format!("failed to write {}: {e2}", path.display()))?;
        let _ = std::fs::remove_file(&tmp_path);
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
