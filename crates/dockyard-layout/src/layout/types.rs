//! Layout output types.

use dockyard_common::{Rect, SplitterId};

use crate::tree::Orientation;

/// The draggable bar between the two panes of a splitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitterBar {
    pub splitter: SplitterId,
    /// Horizontal splitters have a vertical bar.
    pub orientation: Orientation,
    /// The bar itself.
    pub rect: Rect,
    /// The splitter's whole rect.
    pub bounds: Rect,
}
