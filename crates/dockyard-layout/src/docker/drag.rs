//! Interactive drag sessions: anchor tracking and the drop that ends them.

use std::iter;

use dockyard_common::{DockEvent, DockLocation, FrameId, PanelId, Rect, Vec2};

use crate::anchor::Anchor;
use crate::ghost::Ghost;

use super::Docker;

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// A whole frame, by its title bar.
    Frame(FrameId),
    /// A single tab.
    Tab(PanelId),
}

#[derive(Debug, Clone)]
pub(crate) struct DragSession {
    pub(crate) source: DragSource,
    pub(crate) ghost: Ghost,
}

impl Docker {
    /// Start dragging a whole frame. The center frame cannot be dragged.
    pub fn begin_frame_drag(&mut self, frame: FrameId, pointer: Vec2) -> bool {
        let Some(f) = self.frames.get(&frame) else {
            return false;
        };
        let moveable = f
            .active_panel()
            .and_then(|p| self.panels.get(&p))
            .is_some_and(|p| p.moveable);
        if f.is_center() || !moveable {
            return false;
        }
        let ghost = Ghost::new(pointer, f.rect);
        self.drag = Some(DragSession {
            source: DragSource::Frame(frame),
            ghost,
        });
        tracing::debug!(%frame, "frame drag started");
        true
    }

    /// Start dragging a single tab out of its frame.
    pub fn begin_tab_drag(&mut self, panel: PanelId, pointer: Vec2) -> bool {
        let Some(p) = self.panels.get(&panel) else {
            return false;
        };
        if !p.moveable {
            return false;
        }
        let Some(frame) = p.frame.and_then(|f| self.frames.get(&f)) else {
            return false;
        };
        let ghost = Ghost::new(pointer, frame.rect);
        self.drag = Some(DragSession {
            source: DragSource::Tab(panel),
            ghost,
        });
        tracing::debug!(%panel, "tab drag started");
        true
    }

    /// Track the pointer, returning the anchor under it if any.
    pub fn drag_to(&mut self, pointer: Vec2) -> Option<&Anchor> {
        let source = self.drag.as_ref()?.source;
        let anchor = self.find_anchor(source, pointer);
        let session = self.drag.as_mut()?;
        session.ghost.update(pointer, anchor);
        session.ghost.anchor()
    }

    /// Abandon the drag without touching the tree.
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Drop at `pointer`. Without an anchor the dragged content floats at
    /// the ghost's free rect.
    pub fn end_drag(&mut self, pointer: Vec2) -> bool {
        if self.drag.is_none() {
            return false;
        }
        self.drag_to(pointer);
        let Some(session) = self.drag.take() else {
            return false;
        };
        let free = session.ghost.free_rect();
        let source = session.source;

        match (source, session.ghost.into_anchor()) {
            (_, Some(anchor)) if anchor.is_noop() => {
                tracing::debug!(?source, "dropped onto its own tab bar");
                true
            }
            (DragSource::Tab(panel), None) => self.drop_tab_floating(panel, free),
            (DragSource::Tab(panel), Some(anchor)) => {
                let Some(parent) = self.anchor_parent(anchor.frame, Some(panel)) else {
                    return false;
                };
                let location = if anchor.merge {
                    DockLocation::Stacked
                } else {
                    anchor.location
                };
                self.move_panel(panel, location, anchor.merge, Some(parent))
            }
            (DragSource::Frame(frame), None) => self.drop_frame_floating(frame, free),
            (DragSource::Frame(frame), Some(anchor)) => self.drop_frame_on(frame, anchor),
        }
    }

    /// Candidates in test order: for a frame drag the dragged frame, then
    /// the other frames, then the center; for a tab drag every frame, then
    /// the center. The first anchor found wins.
    fn find_anchor(&self, source: DragSource, pointer: Vec2) -> Option<Anchor> {
        let center = self.center;
        let others = self.frames.keys().copied().filter(move |id| *id != center);

        let candidates: Vec<(FrameId, bool, bool)> = match source {
            DragSource::Frame(dragged) => iter::once((dragged, true, false))
                .chain(others.filter(|id| *id != dragged).map(|id| (id, false, true)))
                .chain(iter::once((center, false, true)))
                .collect(),
            DragSource::Tab(panel) => {
                let home = self.frame_of(panel)?;
                let home_len = self.frames.get(&home).map_or(0, |f| f.len());
                others
                    .map(|id| (id, id == home, id != home || home_len > 1))
                    .chain(iter::once((center, false, true)))
                    .collect()
            }
        };

        candidates.into_iter().find_map(|(id, same_frame, allow_split)| {
            self.frames.get(&id)?.check_anchor_drop(
                pointer,
                same_frame,
                allow_split,
                &self.panels,
                &self.config.anchor,
            )
        })
    }

    /// Panel to place relative to when dropping on `frame`: its active tab,
    /// or another tab if that one is `excluding`.
    fn anchor_parent(&self, frame: FrameId, excluding: Option<PanelId>) -> Option<PanelId> {
        let f = self.frames.get(&frame)?;
        match f.active_panel() {
            Some(active) if Some(active) != excluding => Some(active),
            _ => f.panels().iter().copied().find(|p| Some(*p) != excluding),
        }
    }

    fn drop_tab_floating(&mut self, panel: PanelId, free: Rect) -> bool {
        let Some(frame) = self.frame_of(panel) else {
            return false;
        };
        let alone_floating = self
            .frames
            .get(&frame)
            .is_some_and(|f| f.is_floating() && f.len() == 1);
        if alone_floating {
            return self.drop_frame_floating(frame, free);
        }
        if !self.move_panel(panel, DockLocation::Float, false, None) {
            return false;
        }
        if let Some(new_frame) = self.frame_of(panel) {
            self.place_floating(new_frame, free);
        }
        true
    }

    fn drop_frame_floating(&mut self, frame: FrameId, free: Rect) -> bool {
        let Some(f) = self.frames.get(&frame) else {
            return false;
        };
        if f.is_floating() {
            let panels = f.panels().to_vec();
            self.place_floating(frame, free);
            for panel in panels {
                self.notify(DockEvent::Moved(panel));
            }
            return true;
        }

        let Some(first) = self.move_frame_contents(frame, DockLocation::Float, None) else {
            return false;
        };
        if let Some(new_frame) = self.frame_of(first) {
            self.place_floating(new_frame, free);
        }
        true
    }

    fn drop_frame_on(&mut self, frame: FrameId, anchor: Anchor) -> bool {
        let Some(parent) = self.anchor_parent(anchor.frame, None) else {
            return false;
        };
        let location = if anchor.merge {
            DockLocation::Stacked
        } else {
            anchor.location
        };
        self.move_frame_contents(frame, location, Some(parent)).is_some()
    }

    /// Move every tab of `frame`: the first to `location`, the rest stacked
    /// onto it, keeping the active tab. Returns the first panel moved.
    fn move_frame_contents(
        &mut self,
        frame: FrameId,
        location: DockLocation,
        parent: Option<PanelId>,
    ) -> Option<PanelId> {
        let f = self.frames.get(&frame)?;
        let panels = f.panels().to_vec();
        let active = f.active_panel();
        let (&first, rest) = panels.split_first()?;

        let grouped = location == DockLocation::Stacked;
        if !self.move_panel(first, location, grouped, parent) {
            return None;
        }
        for panel in rest {
            self.move_panel(*panel, DockLocation::Stacked, true, Some(first));
        }
        if let Some(active) = active {
            self.activate_panel(active);
        }
        Some(first)
    }

    fn place_floating(&mut self, frame: FrameId, rect: Rect) {
        let container = self.container;
        if let Some(f) = self.frames.get_mut(&frame) {
            if f.is_floating() {
                f.place(rect, container);
            }
        }
        self.mark_dirty();
    }
}
