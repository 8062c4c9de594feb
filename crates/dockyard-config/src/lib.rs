//! dockyard configuration system.
//!
//! TOML-based configuration for the docking engine with validation.
//! All config sections use sensible defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dockyard_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{DockConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{layout_path, load_from_path};
pub use toml_writer::{save_config, save_config_to_path, write_atomic};

use dockyard_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<DockConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &DockConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
