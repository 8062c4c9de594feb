//! Docking layout engine.
//!
//! A [`Docker`] owns a binary split tree of [`Splitter`]s whose leaves are
//! tabbed [`Frame`]s, plus a flat set of floating frames. Panels are placed
//! alone (carving a new split) or grouped (joining an existing frame as a
//! tab), moved by drag sessions driven through anchor hit-testing, and the
//! whole arrangement can be saved to and restored from a [`LayoutSnapshot`].

pub mod anchor;
pub mod commands;
pub mod docker;
pub mod frame;
pub mod ghost;
pub mod layout;
pub mod panel;
pub mod registry;
pub mod snapshot;
pub mod splitter;
pub mod store;
pub mod tree;

pub use anchor::Anchor;
pub use commands::DockCommand;
pub use docker::{DragSource, Docker};
pub use frame::Frame;
pub use ghost::Ghost;
pub use layout::SplitterBar;
pub use panel::{Panel, Scrollable};
pub use registry::{PanelRegistry, CENTER_PANEL_TYPE};
pub use snapshot::{LayoutSnapshot, LAYOUT_VERSION};
pub use splitter::Splitter;
pub use store::{load_layout_from_path, save_layout_to_path};
pub use tree::{NodeId, Orientation};
