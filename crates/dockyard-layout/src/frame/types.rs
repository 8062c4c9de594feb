//! The Frame container: an ordered tab list of panels.

use dockyard_common::{FrameId, PanelId, Rect, SplitterId, Vec2};

#[derive(Debug, Clone)]
pub struct Frame {
    id: FrameId,
    pub(crate) panels: Vec<PanelId>,
    /// Active tab index, -1 only when empty.
    pub(crate) active: i32,
    floating: bool,
    center: bool,
    /// Fractional center within the container (floating frames only).
    pub(crate) pos: Vec2,
    /// Pixel size (floating frames only).
    pub(crate) size: Vec2,
    pub(crate) parent: Option<SplitterId>,
    /// Rect from the last layout pass.
    pub(crate) rect: Rect,
}

impl Frame {
    fn with_flags(id: FrameId, floating: bool, center: bool) -> Self {
        Self {
            id,
            panels: Vec::new(),
            active: -1,
            floating,
            center,
            pos: Vec2::new(0.5, 0.5),
            size: Vec2::ZERO,
            parent: None,
            rect: Rect::ZERO,
        }
    }

    pub fn docked(id: FrameId) -> Self {
        Self::with_flags(id, false, false)
    }

    pub fn floating(id: FrameId, pos: Vec2, size: Vec2) -> Self {
        let mut frame = Self::with_flags(id, true, false);
        frame.pos = pos;
        frame.size = size;
        frame
    }

    pub(crate) fn center(id: FrameId) -> Self {
        Self::with_flags(id, false, true)
    }

    pub fn id(&self) -> FrameId {
        self.id
    }

    pub fn is_floating(&self) -> bool {
        self.floating
    }

    pub fn is_center(&self) -> bool {
        self.center
    }

    pub fn parent(&self) -> Option<SplitterId> {
        self.parent
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}
