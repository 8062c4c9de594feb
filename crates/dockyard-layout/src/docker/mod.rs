//! The Docker owns the split tree and performs every structural change.

mod drag;
mod insert;
mod layout_compute;
mod movement;
mod persistence;
mod remove;
mod traversal;
mod types;
mod validate;

pub use drag::DragSource;
pub use types::*;
