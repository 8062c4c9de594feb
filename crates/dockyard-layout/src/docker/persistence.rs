//! Save the tree to a [`LayoutSnapshot`] and rebuild it from one.

use dockyard_common::{FrameId, LayoutError, PanelId, SplitterId};

use crate::frame::Frame;
use crate::snapshot::{
    FrameSnapshot, LayoutSnapshot, NodeSnapshot, PanelSnapshot, SplitterSnapshot, LAYOUT_VERSION,
};
use crate::splitter::Splitter;
use crate::tree::{NodeId, Orientation};

use super::Docker;

impl Docker {
    /// Serialize the whole arrangement depth-first.
    pub fn save(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            version: LAYOUT_VERSION,
            root: self.save_node(self.root),
            floating: self
                .floating_frames()
                .into_iter()
                .filter_map(|id| self.frames.get(&id))
                .map(|f| self.save_frame(f))
                .collect(),
        }
    }

    fn save_node(&self, node: NodeId) -> NodeSnapshot {
        match node {
            NodeId::Frame(id) if id == self.center => NodeSnapshot::Center,
            NodeId::Frame(id) => match self.frames.get(&id) {
                Some(frame) => NodeSnapshot::Frame(self.save_frame(frame)),
                None => NodeSnapshot::Center,
            },
            NodeId::Splitter(id) => match self.splitters.get(&id) {
                Some(s) => {
                    let pane = |index| {
                        s.pane(index)
                            .map_or(NodeSnapshot::Center, |n| self.save_node(n))
                    };
                    NodeSnapshot::Splitter(SplitterSnapshot {
                        horizontal: s.is_horizontal(),
                        pos: s.ratio(),
                        pane0: Box::new(pane(0)),
                        pane1: Box::new(pane(1)),
                        pending: s.pending_best_ratio,
                    })
                }
                None => NodeSnapshot::Center,
            },
        }
    }

    fn save_frame(&self, frame: &Frame) -> FrameSnapshot {
        FrameSnapshot {
            floating: frame.is_floating(),
            pos: frame.pos,
            size: frame.size,
            tab: frame.active_index(),
            panels: frame
                .panels()
                .iter()
                .filter_map(|id| self.panels.get(id))
                .map(|p| PanelSnapshot {
                    panel_type: p.panel_type().to_string(),
                    title: p.title.clone(),
                    size: p.size,
                    min_size: p.min_size,
                    max_size: p.max_size,
                    scrollable: p.scrollable,
                    moveable: p.moveable,
                    closeable: p.closeable,
                })
                .collect(),
        }
    }

    /// Replace the current arrangement with `snapshot`.
    ///
    /// The snapshot is validated first; on error the Docker is untouched.
    /// Panels of unregistered types are skipped, and a frame left with no
    /// panels is dropped from the tree.
    pub fn restore(&mut self, snapshot: &LayoutSnapshot) -> Result<(), LayoutError> {
        snapshot.validate()?;
        self.clear();

        let root = self
            .restore_node(&snapshot.root)
            .unwrap_or(NodeId::Frame(self.center));
        self.root = root;
        self.set_parent(root, None);

        for frame in &snapshot.floating {
            self.restore_frame(frame, true);
        }

        tracing::info!(
            frames = self.frames.len(),
            panels = self.panel_count(),
            "restored layout"
        );
        self.mark_dirty();
        Ok(())
    }

    fn restore_node(&mut self, node: &NodeSnapshot) -> Option<NodeId> {
        match node {
            NodeSnapshot::Center => Some(NodeId::Frame(self.center)),
            NodeSnapshot::Frame(frame) => self.restore_frame(frame, false).map(NodeId::Frame),
            NodeSnapshot::Splitter(s) => {
                let pane0 = self.restore_node(&s.pane0);
                let pane1 = self.restore_node(&s.pane1);
                match (pane0, pane1) {
                    (Some(a), Some(b)) => {
                        let id = SplitterId(self.alloc_id());
                        let orientation = Orientation::from_horizontal(s.horizontal);
                        let mut splitter = Splitter::new(id, orientation, s.pos);
                        splitter.pending_best_ratio = s.pending;
                        splitter.set_pane(0, Some(a));
                        splitter.set_pane(1, Some(b));
                        self.splitters.insert(id, splitter);
                        self.set_parent(a, Some(id));
                        self.set_parent(b, Some(id));
                        Some(NodeId::Splitter(id))
                    }
                    (Some(only), None) | (None, Some(only)) => Some(only),
                    (None, None) => None,
                }
            }
        }
    }

    /// Rebuild one frame and its panels; `None` if no panel could load.
    fn restore_frame(&mut self, snapshot: &FrameSnapshot, floating: bool) -> Option<FrameId> {
        let id = FrameId(self.alloc_id());
        let mut frame = if floating {
            Frame::floating(id, snapshot.pos, snapshot.size)
        } else {
            let mut docked = Frame::docked(id);
            docked.pos = snapshot.pos;
            docked.size = snapshot.size;
            docked
        };

        for saved in &snapshot.panels {
            let Some(panel) = self.restore_panel(saved) else {
                continue;
            };
            frame.add_panel(panel, None);
            if let Some(p) = self.panels.get_mut(&panel) {
                p.frame = Some(id);
            }
        }

        if frame.is_empty() {
            tracing::warn!(frame = %id, "no panels loaded, dropping frame");
            return None;
        }
        if !frame.set_active(snapshot.tab) {
            frame.set_active(0);
        }
        self.frames.insert(id, frame);
        Some(id)
    }

    fn restore_panel(&mut self, saved: &PanelSnapshot) -> Option<PanelId> {
        let Some(id) = self.create_panel(&saved.panel_type) else {
            tracing::warn!(panel_type = %saved.panel_type, "unknown panel type, tab skipped");
            return None;
        };
        if let Some(panel) = self.panels.get_mut(&id) {
            panel.title = saved.title.clone();
            panel.size = saved.size;
            panel.min_size = saved.min_size;
            panel.max_size = saved.max_size;
            panel.scrollable = saved.scrollable;
            panel.moveable = saved.moveable;
            panel.closeable = saved.closeable;
        }
        Some(id)
    }
}
