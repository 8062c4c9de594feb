use dockyard_common::{DockLocation, FrameId, Rect};

/// A drop target found under the pointer during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Frame the drop applies to.
    pub frame: FrameId,
    /// Preview rectangle for the ghost.
    pub rect: Rect,
    /// `Stacked` for tab-bar anchors, otherwise the split edge.
    pub location: DockLocation,
    /// Join as a tab rather than carve a split.
    pub merge: bool,
    /// The candidate is the frame being dragged.
    pub same_frame: bool,
}

impl Anchor {
    /// Dropping here would leave the content where it already is.
    pub fn is_noop(&self) -> bool {
        self.merge && self.same_frame
    }
}

/// Per-candidate switches for [`hit_test`](super::hit_test).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitFlags {
    pub same_frame: bool,
    pub can_split: bool,
    pub title_bar: bool,
}
