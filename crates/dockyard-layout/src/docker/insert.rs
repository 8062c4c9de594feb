//! Panel creation and placement: alone (new split or floater) or grouped
//! (as a tab in an existing frame).

use dockyard_common::{DockLocation, FrameId, PanelId, SplitterId, Vec2};

use crate::frame::Frame;
use crate::layout::{floating_rect, floating_size};
use crate::registry::CENTER_PANEL_TYPE;
use crate::splitter::Splitter;
use crate::tree::{NodeId, Orientation};

use super::Docker;

impl Docker {
    /// Build a detached panel of a registered type.
    pub fn create_panel(&mut self, panel_type: &str) -> Option<PanelId> {
        if panel_type == CENTER_PANEL_TYPE || !self.registry.contains(panel_type) {
            tracing::warn!(panel_type, "cannot create panel of this type");
            return None;
        }
        let id = PanelId(self.alloc_id());
        let panel = self.registry.build(panel_type, id)?;
        self.panels.insert(id, panel);
        Some(id)
    }

    /// Create a panel and place it. `Stacked` joins `parent`'s frame;
    /// every other location places the panel alone.
    pub fn add_panel(
        &mut self,
        panel_type: &str,
        location: DockLocation,
        parent: Option<PanelId>,
    ) -> Option<PanelId> {
        let id = self.create_panel(panel_type)?;
        let placed = if location == DockLocation::Stacked {
            self.add_panel_grouped(id, location, parent)
        } else {
            self.add_panel_alone(id, location, parent)
        };
        if placed {
            Some(id)
        } else {
            self.panels.remove(&id);
            None
        }
    }

    pub(super) fn is_detached(&self, panel: PanelId) -> bool {
        self.panels.get(&panel).is_some_and(|p| p.frame.is_none())
    }

    /// Place a detached panel in a frame of its own.
    ///
    /// `Float` creates a floating frame. Edge locations carve a new split
    /// out of the slot of `parent`'s frame, or of the center frame when
    /// there is no parent.
    pub fn add_panel_alone(
        &mut self,
        panel: PanelId,
        location: DockLocation,
        parent: Option<PanelId>,
    ) -> bool {
        if !self.is_detached(panel) {
            tracing::warn!(%panel, "panel is not detached");
            return false;
        }
        match location {
            DockLocation::Float => {
                self.float_panel(panel);
                true
            }
            DockLocation::Stacked => {
                tracing::warn!(%panel, "stacked placement needs a grouped add");
                false
            }
            _ => match self.split_target(parent) {
                Some(target) => self.graft_split(panel, target, location),
                None => false,
            },
        }
    }

    /// Place a detached panel as a tab in a suitable existing frame,
    /// falling back to [`add_panel_alone`](Self::add_panel_alone).
    pub fn add_panel_grouped(
        &mut self,
        panel: PanelId,
        location: DockLocation,
        parent: Option<PanelId>,
    ) -> bool {
        if !self.is_detached(panel) {
            tracing::warn!(%panel, "panel is not detached");
            return false;
        }
        match location {
            DockLocation::Stacked => {
                let Some(target) = parent.and_then(|p| self.frame_of(p)) else {
                    tracing::warn!(%panel, "stacked placement without a placed parent");
                    return false;
                };
                if target == self.center {
                    tracing::warn!(%panel, "cannot stack onto the center frame");
                    return false;
                }
                self.join_frame(panel, target);
                true
            }
            DockLocation::Float => match self.latest_floating_frame() {
                Some(target) => {
                    self.join_frame(panel, target);
                    true
                }
                None => self.add_panel_alone(panel, location, parent),
            },
            _ => {
                let target = match parent {
                    Some(p) => self.grouped_sibling(p, location),
                    None => self.grouped_edge_frame(location),
                };
                match target {
                    Some(target) => {
                        self.join_frame(panel, target);
                        true
                    }
                    None => self.add_panel_alone(panel, location, parent),
                }
            }
        }
    }

    /// Frame whose slot a split should carve. Floating frames are refused.
    fn split_target(&self, parent: Option<PanelId>) -> Option<FrameId> {
        let Some(parent) = parent else {
            return Some(self.center);
        };
        let Some(frame) = self.frame_of(parent).and_then(|f| self.frames.get(&f)) else {
            tracing::warn!(%parent, "split relative to a panel without a frame");
            return None;
        };
        if frame.is_floating() {
            tracing::warn!(%parent, "cannot split a floating frame");
            return None;
        }
        Some(frame.id())
    }

    /// Replace `target` in its slot with a new Splitter holding `target`
    /// and a new frame for `panel`.
    ///
    /// A splitter that replaces the lone center at the root fits its ratio
    /// to the panes' natural sizes on the next layout pass.
    fn graft_split(&mut self, panel: PanelId, target: FrameId, location: DockLocation) -> bool {
        let Some(orientation) = Orientation::for_location(location) else {
            return false;
        };
        let leading = location.is_leading();
        let ratio = if leading {
            self.config.splitter.leading_ratio
        } else {
            self.config.splitter.trailing_ratio
        };

        let frame_id = FrameId(self.alloc_id());
        let splitter_id = SplitterId(self.alloc_id());
        let new_node = NodeId::Frame(frame_id);
        let target_node = NodeId::Frame(target);
        let promotes_root = target == self.center && self.root == target_node;

        let mut splitter = Splitter::new(splitter_id, orientation, ratio);
        let (pane0, pane1) = if leading {
            (new_node, target_node)
        } else {
            (target_node, new_node)
        };
        splitter.set_pane(0, Some(pane0));
        splitter.set_pane(1, Some(pane1));
        splitter.pending_best_ratio = promotes_root;
        self.splitters.insert(splitter_id, splitter);

        self.replace_in_parent(target_node, NodeId::Splitter(splitter_id));
        self.set_parent(target_node, Some(splitter_id));

        let mut frame = Frame::docked(frame_id);
        frame.parent = Some(splitter_id);
        self.frames.insert(frame_id, frame);
        self.attach(panel, frame_id, None);

        tracing::debug!(%panel, %target, ?location, splitter = %splitter_id, "grafted split");
        self.mark_dirty();
        true
    }

    /// Wrap `panel` in a new floating frame at its preferred position.
    pub(super) fn float_panel(&mut self, panel: PanelId) -> FrameId {
        let floor = Vec2::new(
            self.config.floating.min_width,
            self.config.floating.min_height,
        );
        let fallback = Vec2::new(
            self.config.floating.default_width,
            self.config.floating.default_height,
        );
        let (pos, size) = match self.panels.get(&panel) {
            Some(p) => (
                p.position,
                floating_size(p.size, fallback, p.min_size.max(floor)),
            ),
            None => (Vec2::new(0.5, 0.5), fallback),
        };

        let id = FrameId(self.alloc_id());
        let mut frame = Frame::floating(id, pos, size);
        frame.rect = floating_rect(pos, size, self.container);
        self.frames.insert(id, frame);
        self.attach(panel, id, None);

        tracing::debug!(%panel, frame = %id, "floated panel");
        self.mark_dirty();
        id
    }

    pub(super) fn attach(&mut self, panel: PanelId, frame: FrameId, at: Option<usize>) {
        if let Some(f) = self.frames.get_mut(&frame) {
            f.add_panel(panel, at);
        }
        if let Some(p) = self.panels.get_mut(&panel) {
            p.frame = Some(frame);
        }
    }

    /// Append `panel` to `frame` as the active tab.
    fn join_frame(&mut self, panel: PanelId, frame: FrameId) {
        self.attach(panel, frame, None);
        if let Some(f) = self.frames.get_mut(&frame) {
            if let Some(index) = f.index_of(panel) {
                f.set_active(index as i32);
            }
        }
        tracing::debug!(%panel, %frame, "grouped panel");
        self.mark_dirty();
    }

    /// The frame on the `location` side of `parent`'s frame, one level up.
    fn grouped_sibling(&self, parent: PanelId, location: DockLocation) -> Option<FrameId> {
        let frame = self.frames.get(&self.frame_of(parent)?)?;
        if frame.is_floating() {
            return None;
        }
        let splitter = self.splitters.get(&frame.parent?)?;
        if Some(splitter.orientation()) != Orientation::for_location(location) {
            return None;
        }
        let side = if location.is_leading() { 0 } else { 1 };
        let sibling = splitter.pane(side)?.as_frame()?;
        (sibling != frame.id() && sibling != self.center).then_some(sibling)
    }

    /// Walk from the root toward the center looking for a frame already
    /// docked on the `location` side.
    fn grouped_edge_frame(&self, location: DockLocation) -> Option<FrameId> {
        let orientation = Orientation::for_location(location)?;
        let side = if location.is_leading() { 0 } else { 1 };
        let center = NodeId::Frame(self.center);

        let mut node = self.root;
        while let NodeId::Splitter(id) = node {
            let splitter = self.splitters.get(&id)?;
            if splitter.orientation() == orientation {
                if let Some(NodeId::Frame(frame)) = splitter.pane(side) {
                    if frame != self.center {
                        return Some(frame);
                    }
                }
            }
            node = splitter
                .children()
                .find(|child| self.node_contains(*child, center))?;
        }
        None
    }
}
