//! Configuration schema types for dockyard.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod anchor;
mod floating;
mod splitter;
mod system;

pub use anchor::*;
pub use floating::*;
pub use splitter::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DockConfig {
    pub anchor: AnchorConfig,
    pub splitter: SplitterConfig,
    pub floating: FloatingConfig,
    pub persistence: PersistenceConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
