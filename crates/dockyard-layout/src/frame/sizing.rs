//! Size negotiation and floating geometry for Frame.

use dockyard_common::{Edge, Rect, Vec2};

use crate::layout::{floating_rect, fractional_center};
use crate::panel::PanelMap;

use super::Frame;

impl Frame {
    /// Componentwise max of the panels' minimum sizes.
    pub fn min_size(&self, panels: &PanelMap) -> Vec2 {
        self.panels
            .iter()
            .filter_map(|id| panels.get(id))
            .fold(Vec2::ZERO, |acc, p| acc.max(p.min_size))
    }

    /// Componentwise min of the panels' maximum sizes, never below the minimum.
    pub fn max_size(&self, panels: &PanelMap) -> Vec2 {
        self.panels
            .iter()
            .filter_map(|id| panels.get(id))
            .fold(Vec2::UNBOUNDED, |acc, p| acc.min(p.max_size))
            .max(self.min_size(panels))
    }

    /// Componentwise max of the panels' desired sizes; -1 on an axis no
    /// panel specifies.
    pub fn desired_size(&self, panels: &PanelMap) -> Vec2 {
        self.panels
            .iter()
            .filter_map(|id| panels.get(id))
            .fold(Vec2::UNSPECIFIED, |acc, p| acc.max(p.size))
    }

    /// Drag one or two edges of a floating frame to `pointer`.
    ///
    /// The opposite edge stays put and the size is clamped to
    /// `[min, max]`. Docked frames are left alone.
    pub(crate) fn resize(
        &mut self,
        edges: &[Edge],
        pointer: Vec2,
        container: Rect,
        min: Vec2,
        max: Vec2,
    ) -> bool {
        if !self.is_floating() || edges.is_empty() {
            return false;
        }

        let rect = floating_rect(self.pos, self.size, container);
        let (mut left, mut top) = (rect.x, rect.y);
        let (mut right, mut bottom) = (rect.right(), rect.bottom());

        for edge in edges {
            match edge {
                Edge::Left => left = right - clamp_len(right - pointer.x, min.x, max.x),
                Edge::Right => right = left + clamp_len(pointer.x - left, min.x, max.x),
                Edge::Top => top = bottom - clamp_len(bottom - pointer.y, min.y, max.y),
                Edge::Bottom => bottom = top + clamp_len(pointer.y - top, min.y, max.y),
            }
        }

        let resized = Rect::new(left, top, right - left, bottom - top);
        self.place(resized, container);
        true
    }

    /// Put a floating frame at `rect` (pixels) within `container`.
    pub(crate) fn place(&mut self, rect: Rect, container: Rect) {
        self.size = rect.size();
        if let Some(pos) = fractional_center(rect, container) {
            self.pos = pos;
        }
        self.rect = floating_rect(self.pos, self.size, container);
    }
}

fn clamp_len(len: f64, min: f64, max: f64) -> f64 {
    len.min(max).max(min)
}
