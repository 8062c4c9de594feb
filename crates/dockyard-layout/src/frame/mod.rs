//! Frames: tab containers that act as the leaves of the split tree.

mod drop;
mod sizing;
mod tabs;
mod types;

pub use types::*;
