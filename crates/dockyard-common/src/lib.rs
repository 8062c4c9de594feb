pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, DockError, LayoutError};
pub use events::{DockEvent, EventKind, EventQueue};
pub use types::{DockLocation, Edge, FrameId, PanelId, Rect, SplitterId, Vec2};

pub type Result<T> = std::result::Result<T, DockError>;
