//! Moving placed panels between frames, splits and floaters.

use dockyard_common::{DockEvent, DockLocation, FrameId, PanelId, Rect};

use super::Docker;

impl Docker {
    /// Move a placed panel to `location`, relative to `parent` when given.
    ///
    /// With `allow_group` (or `Stacked`) the panel may join an existing
    /// frame, otherwise it gets a frame of its own. A panel that lands
    /// alone in a new floating frame is placed near where it was. Fires
    /// `Attached`/`Detached` on a floating-state change, then `Moved`.
    pub fn move_panel(
        &mut self,
        panel: PanelId,
        location: DockLocation,
        allow_group: bool,
        parent: Option<PanelId>,
    ) -> bool {
        if panel == self.center_panel {
            tracing::warn!("refusing to move the center panel");
            return false;
        }
        let Some(old_frame) = self.frame_of(panel) else {
            return false;
        };
        if parent == Some(panel) {
            tracing::warn!(%panel, "cannot move a panel relative to itself");
            return false;
        }

        if let Some(parent_frame) = parent.and_then(|p| self.frame_of(p)) {
            if parent_frame == old_frame {
                if location == DockLocation::Stacked {
                    return self.activate_panel(panel);
                }
                let sole = self.frames.get(&old_frame).map_or(true, |f| f.len() <= 1);
                if location.is_split() && sole {
                    tracing::warn!(%panel, "cannot split a frame against itself");
                    return false;
                }
            }
        }
        if !self.can_place(location, parent) {
            tracing::warn!(%panel, ?location, "rejected move");
            return false;
        }

        let (was_floating, before) = self
            .frames
            .get(&old_frame)
            .map_or((false, Rect::ZERO), |f| (f.is_floating(), f.rect));
        let watermark = self.next_id;

        self.detach_panel(panel);
        let placed = if location == DockLocation::Stacked || allow_group {
            self.add_panel_grouped(panel, location, parent)
        } else {
            self.add_panel_alone(panel, location, parent)
        };
        if !placed {
            tracing::warn!(%panel, ?location, "placement failed, floating panel instead");
            self.float_panel(panel);
        }

        let Some(new_frame) = self.frame_of(panel) else {
            return false;
        };
        if new_frame.0 >= watermark {
            self.place_near(new_frame, before);
        }

        let now_floating = self.frames.get(&new_frame).is_some_and(|f| f.is_floating());
        if was_floating != now_floating {
            self.notify(if now_floating {
                DockEvent::Detached(panel)
            } else {
                DockEvent::Attached(panel)
            });
        }
        self.notify(DockEvent::Moved(panel));
        tracing::debug!(%panel, ?location, frame = %new_frame, "moved panel");
        true
    }

    /// Whether a detached panel could be placed at `location` near `parent`.
    fn can_place(&self, location: DockLocation, parent: Option<PanelId>) -> bool {
        let parent_frame = parent.and_then(|p| self.frame_of(p));
        match location {
            DockLocation::Float => true,
            DockLocation::Stacked => parent_frame.is_some_and(|f| f != self.center),
            _ => match parent {
                None => true,
                Some(_) => parent_frame
                    .and_then(|f| self.frames.get(&f))
                    .is_some_and(|f| !f.is_floating()),
            },
        }
    }

    /// Offset a new sole-panel floating frame from `before`.
    fn place_near(&mut self, frame: FrameId, before: Rect) {
        if before.is_empty() {
            return;
        }
        let offset = self.config.floating.move_offset;
        let container = self.container;
        if let Some(f) = self.frames.get_mut(&frame) {
            if f.is_floating() && f.len() == 1 {
                let size = f.size;
                f.place(
                    Rect::new(before.x + offset, before.y + offset, size.x, size.y),
                    container,
                );
            }
        }
    }

    /// Make `panel` the active tab of its frame.
    pub(super) fn activate_panel(&mut self, panel: PanelId) -> bool {
        let Some(frame) = self.frame_of(panel) else {
            return false;
        };
        let index = self
            .frames
            .get(&frame)
            .and_then(|f| f.index_of(panel))
            .map(|i| i as i32);
        match index {
            Some(index) => self.activate_tab(frame, index),
            None => false,
        }
    }
}
