//! Layout pass, splitter bars, frame resizing and command dispatch.

use dockyard_common::{DockEvent, Edge, FrameId, Rect, SplitterId, Vec2};

use crate::commands::DockCommand;
use crate::layout::{floating_rect, SplitterBar};
use crate::splitter::geometry::{
    aggregate_desired, aggregate_max, aggregate_min, best_ratio, child_rects, ratio_at,
};
use crate::splitter::PaneLimits;
use crate::tree::NodeId;

use super::Docker;

impl Docker {
    /// Execute a dock command. Returns `true` if the command was handled.
    pub fn execute(&mut self, cmd: DockCommand) -> bool {
        match cmd {
            DockCommand::AddPanel {
                panel_type,
                location,
                parent,
            } => self.add_panel(&panel_type, location, parent).is_some(),
            DockCommand::RemovePanel(panel) => self.remove_panel(panel),
            DockCommand::ClosePanel(panel) => self.close_panel(panel),
            DockCommand::MovePanel {
                panel,
                location,
                allow_group,
                parent,
            } => self.move_panel(panel, location, allow_group, parent),
            DockCommand::ActivateTab { frame, index } => self.activate_tab(frame, index),
            DockCommand::Clear => {
                self.clear();
                true
            }
        }
    }

    /// Run the top-down geometry pass within `container`.
    ///
    /// Resolves pending best-ratio requests, caches every frame's rect,
    /// fires `Resized` for panels whose frame rect changed, and returns the
    /// docked frames in tree order followed by the floaters.
    pub fn update_layout(&mut self, container: Rect) -> Vec<(FrameId, Rect)> {
        self.container = container;
        let mut placed = Vec::new();
        let mut bars = Vec::new();
        self.layout_node(self.root, container, &mut placed, &mut bars);

        for frame in self.frames.values().filter(|f| f.is_floating()) {
            placed.push((frame.id(), floating_rect(frame.pos, frame.size, container)));
        }

        let mut resized = Vec::new();
        for (id, rect) in &placed {
            if let Some(frame) = self.frames.get_mut(id) {
                if frame.rect != *rect {
                    frame.rect = *rect;
                    resized.extend_from_slice(frame.panels());
                }
            }
        }
        for panel in resized {
            self.notify(DockEvent::Resized(panel));
        }

        self.bars = bars;
        self.dirty = false;
        placed
    }

    fn layout_node(
        &mut self,
        node: NodeId,
        rect: Rect,
        placed: &mut Vec<(FrameId, Rect)>,
        bars: &mut Vec<SplitterBar>,
    ) {
        let id = match node {
            NodeId::Frame(id) => {
                placed.push((id, rect));
                return;
            }
            NodeId::Splitter(id) => id,
        };
        let Some(splitter) = self.splitters.get(&id) else {
            return;
        };
        let orientation = splitter.orientation();
        let (pane0, pane1) = (splitter.pane(0), splitter.pane(1));
        let pending = splitter.pending_best_ratio;
        let current = splitter.ratio();

        let limits = self.pane_limits(pane0, pane1);
        let bar = self.config.splitter.bar_size;
        let ratio = if pending {
            let desired = |pane: Option<NodeId>| {
                pane.map_or(Vec2::UNSPECIFIED, |n| self.node_desired_size(n))
            };
            best_ratio(
                orientation,
                rect,
                bar,
                desired(pane0),
                desired(pane1),
                &limits,
                current,
            )
        } else {
            current
        };

        if let Some(splitter) = self.splitters.get_mut(&id) {
            splitter.set_ratio(ratio);
            splitter.pending_best_ratio = false;
            splitter.rect = rect;
        }

        let (rect0, rect1) = child_rects(orientation, rect, ratio, bar, &limits);
        bars.push(SplitterBar::between(id, orientation, rect, rect0, rect1));
        if let Some(child) = pane0 {
            self.layout_node(child, rect0, placed, bars);
        }
        if let Some(child) = pane1 {
            self.layout_node(child, rect1, placed, bars);
        }
    }

    fn pane_limits(&self, pane0: Option<NodeId>, pane1: Option<NodeId>) -> PaneLimits {
        let mut limits = PaneLimits::default();
        if let Some(node) = pane0 {
            limits.min0 = self.node_min_size(node);
            limits.max0 = self.node_max_size(node);
        }
        if let Some(node) = pane1 {
            limits.min1 = self.node_min_size(node);
            limits.max1 = self.node_max_size(node);
        }
        limits
    }

    /// Aggregate minimum size of a subtree.
    pub fn node_min_size(&self, node: NodeId) -> Vec2 {
        match node {
            NodeId::Frame(id) => self
                .frames
                .get(&id)
                .map_or(Vec2::ZERO, |f| f.min_size(&self.panels)),
            NodeId::Splitter(id) => match self.splitters.get(&id) {
                Some(s) => aggregate_min(
                    s.orientation(),
                    s.pane(0).map(|n| self.node_min_size(n)),
                    s.pane(1).map(|n| self.node_min_size(n)),
                ),
                None => Vec2::ZERO,
            },
        }
    }

    /// Aggregate maximum size of a subtree.
    pub fn node_max_size(&self, node: NodeId) -> Vec2 {
        match node {
            NodeId::Frame(id) => self
                .frames
                .get(&id)
                .map_or(Vec2::UNBOUNDED, |f| f.max_size(&self.panels)),
            NodeId::Splitter(id) => match self.splitters.get(&id) {
                Some(s) => aggregate_max(
                    s.orientation(),
                    s.pane(0).map(|n| self.node_max_size(n)),
                    s.pane(1).map(|n| self.node_max_size(n)),
                ),
                None => Vec2::UNBOUNDED,
            },
        }
    }

    /// Aggregate desired size of a subtree (-1 where unspecified).
    pub fn node_desired_size(&self, node: NodeId) -> Vec2 {
        match node {
            NodeId::Frame(id) => self
                .frames
                .get(&id)
                .map_or(Vec2::UNSPECIFIED, |f| f.desired_size(&self.panels)),
            NodeId::Splitter(id) => match self.splitters.get(&id) {
                Some(s) => match (s.pane(0), s.pane(1)) {
                    (Some(a), Some(b)) => aggregate_desired(
                        s.orientation(),
                        self.node_desired_size(a),
                        self.node_desired_size(b),
                    ),
                    (Some(only), None) | (None, Some(only)) => self.node_desired_size(only),
                    (None, None) => Vec2::UNSPECIFIED,
                },
                None => Vec2::UNSPECIFIED,
            },
        }
    }

    // -- Splitter bars --

    /// Bars recorded by the last layout pass, in tree order.
    pub fn splitter_bars(&self) -> &[SplitterBar] {
        &self.bars
    }

    /// The splitter whose bar is under `pointer`.
    pub fn splitter_at(&self, pointer: Vec2) -> Option<SplitterId> {
        let slop = self.config.splitter.bar_hit_slop;
        self.bars
            .iter()
            .find(|bar| bar.hit_test(pointer, slop))
            .map(|bar| bar.splitter)
    }

    /// Move a splitter's bar to `pointer`, clamped by the panes' limits.
    pub fn drag_splitter(&mut self, splitter: SplitterId, pointer: Vec2) -> bool {
        let Some(s) = self.splitters.get(&splitter) else {
            return false;
        };
        let orientation = s.orientation();
        let rect = s.rect;
        let limits = self.pane_limits(s.pane(0), s.pane(1));
        let bar = self.config.splitter.bar_size;

        let Some(ratio) = ratio_at(orientation, rect, orientation.main(pointer), bar, &limits)
        else {
            return false;
        };
        if let Some(s) = self.splitters.get_mut(&splitter) {
            s.set_ratio(ratio);
            s.pending_best_ratio = false;
        }
        tracing::trace!(%splitter, ratio, "splitter dragged");
        self.mark_dirty();
        true
    }

    // -- Frames --

    /// Activate a tab. Out-of-range indices are ignored.
    pub fn activate_tab(&mut self, frame: FrameId, index: i32) -> bool {
        let activated = self
            .frames
            .get_mut(&frame)
            .is_some_and(|f| f.set_active(index));
        if activated {
            self.mark_dirty();
        }
        activated
    }

    /// Drag edges of a floating frame, clamped to its panels' limits and
    /// the configured floating minimum.
    pub fn resize_frame(&mut self, frame: FrameId, edges: &[Edge], pointer: Vec2) -> bool {
        let Some(f) = self.frames.get(&frame) else {
            return false;
        };
        let floor = Vec2::new(
            self.config.floating.min_width,
            self.config.floating.min_height,
        );
        let min = f.min_size(&self.panels).max(floor);
        let max = f.max_size(&self.panels).max(min);
        let container = self.container;

        let resized = self
            .frames
            .get_mut(&frame)
            .is_some_and(|f| f.resize(edges, pointer, container, min, max));
        if !resized {
            return false;
        }
        let panels = self
            .frames
            .get(&frame)
            .map(|f| f.panels().to_vec())
            .unwrap_or_default();
        for panel in panels {
            self.notify(DockEvent::Resized(panel));
        }
        self.mark_dirty();
        true
    }
}
