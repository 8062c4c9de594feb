//! Persistence and logging settings.

use serde::{Deserialize, Serialize};

/// Where saved layouts live and whether to restore them at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Layout file path. `None` uses `layout.json` beside the config file.
    pub layout_file: Option<String>,
    pub restore_on_start: bool,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            layout_file: None,
            restore_on_start: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The `tracing` filter directive for this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "dockyard=trace",
            LogLevel::Debug => "dockyard=debug",
            LogLevel::Info => "dockyard=info",
            LogLevel::Warn => "dockyard=warn",
            LogLevel::Error => "dockyard=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_defaults() {
        let config = PersistenceConfig::default();
        assert!(config.layout_file.is_none());
        assert!(config.restore_on_start);
    }

    #[test]
    fn log_level_directive() {
        assert_eq!(LogLevel::default().directive(), "dockyard=info");
        assert_eq!(LogLevel::Debug.directive(), "dockyard=debug");
    }

    #[test]
    fn logging_from_toml() {
        let config: LoggingConfig = toml::from_str(r#"level = "warn""#).unwrap();
        assert_eq!(config.level, LogLevel::Warn);
    }
}
