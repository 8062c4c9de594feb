use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reading, writing, or restoring a saved layout.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout parse error: {0}")]
    Parse(String),

    #[error("layout serialize error: {0}")]
    Serialize(String),

    #[error("layout io error at {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("layout has no center frame")]
    MissingCenter,

    #[error("layout has more than one center frame")]
    DuplicateCenter,

    #[error("unsupported layout version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Debug, thiserror::Error)]
pub enum DockError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
