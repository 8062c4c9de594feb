//! The transient drop indicator that follows the pointer during a drag.

use dockyard_common::{Rect, Vec2};

use crate::anchor::Anchor;

#[derive(Debug, Clone, PartialEq)]
pub struct Ghost {
    anchor: Option<Anchor>,
    /// Pointer position relative to the dragged rect's origin at grab time.
    grab_offset: Vec2,
    size: Vec2,
    pointer: Vec2,
}

impl Ghost {
    /// Start following `pointer`, which grabbed `source` (the dragged
    /// content's current rect).
    pub fn new(pointer: Vec2, source: Rect) -> Self {
        Self {
            anchor: None,
            grab_offset: Vec2::new(pointer.x - source.x, pointer.y - source.y),
            size: source.size(),
            pointer,
        }
    }

    pub fn update(&mut self, pointer: Vec2, anchor: Option<Anchor>) {
        self.pointer = pointer;
        self.anchor = anchor;
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref()
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Where the content would float if released now.
    pub fn free_rect(&self) -> Rect {
        Rect::new(
            self.pointer.x - self.grab_offset.x,
            self.pointer.y - self.grab_offset.y,
            self.size.x,
            self.size.y,
        )
    }

    /// The preview to draw: the anchor's rect, or the free rect.
    pub fn rect(&self) -> Rect {
        match &self.anchor {
            Some(anchor) => anchor.rect,
            None => self.free_rect(),
        }
    }

    /// Consume the ghost, yielding the anchor it settled on.
    pub fn into_anchor(self) -> Option<Anchor> {
        self.anchor
    }
}
