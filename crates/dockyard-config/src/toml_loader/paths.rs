//! Config path resolution and default file creation.

use crate::schema::DockConfig;
use dockyard_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// Platform config directory for dockyard, e.g. `~/.config/dockyard`.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("dockyard"))
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(default_config_dir()?.join("config.toml"))
}

/// Resolve where the saved layout lives: the configured file, or
/// `layout.json` beside the config file.
pub fn layout_path(config: &DockConfig) -> Result<PathBuf, ConfigError> {
    match &config.persistence.layout_file {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(default_config_dir()?.join("layout.json")),
    }
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
