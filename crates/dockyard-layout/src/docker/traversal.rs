//! Tree queries and parent-link upkeep.

use dockyard_common::{FrameId, PanelId, SplitterId};

use crate::tree::NodeId;

use super::Docker;

impl Docker {
    /// The frame holding `panel`, `None` if unknown or in transit.
    pub fn frame_of(&self, panel: PanelId) -> Option<FrameId> {
        self.panels.get(&panel).and_then(|p| p.frame)
    }

    /// Floating frames in creation order.
    pub fn floating_frames(&self) -> Vec<FrameId> {
        self.frames
            .values()
            .filter(|f| f.is_floating())
            .map(|f| f.id())
            .collect()
    }

    /// The most recently created floating frame.
    pub fn latest_floating_frame(&self) -> Option<FrameId> {
        self.frames
            .values()
            .rev()
            .find(|f| f.is_floating())
            .map(|f| f.id())
    }

    /// Docked frames in depth-first, pane0-first order.
    pub fn docked_frames(&self) -> Vec<FrameId> {
        let mut out = Vec::new();
        self.collect_frames(self.root, &mut out);
        out
    }

    fn collect_frames(&self, node: NodeId, out: &mut Vec<FrameId>) {
        match node {
            NodeId::Frame(id) => out.push(id),
            NodeId::Splitter(id) => {
                if let Some(splitter) = self.splitters.get(&id) {
                    for child in splitter.children() {
                        self.collect_frames(child, out);
                    }
                }
            }
        }
    }

    /// Whether `target` lies in the subtree rooted at `node`.
    pub fn node_contains(&self, node: NodeId, target: NodeId) -> bool {
        if node == target {
            return true;
        }
        match node {
            NodeId::Frame(_) => false,
            NodeId::Splitter(id) => self
                .splitters
                .get(&id)
                .is_some_and(|s| s.children().any(|c| self.node_contains(c, target))),
        }
    }

    pub fn parent_of(&self, node: NodeId) -> Option<SplitterId> {
        match node {
            NodeId::Frame(id) => self.frames.get(&id).and_then(|f| f.parent),
            NodeId::Splitter(id) => self.splitters.get(&id).and_then(|s| s.parent),
        }
    }

    pub(super) fn set_parent(&mut self, node: NodeId, parent: Option<SplitterId>) {
        match node {
            NodeId::Frame(id) => {
                if let Some(frame) = self.frames.get_mut(&id) {
                    frame.parent = parent;
                }
            }
            NodeId::Splitter(id) => {
                if let Some(splitter) = self.splitters.get_mut(&id) {
                    splitter.parent = parent;
                }
            }
        }
    }

    /// Put `new` where `old` hangs: its parent's slot, or the root.
    pub(super) fn replace_in_parent(&mut self, old: NodeId, new: NodeId) {
        let parent = self.parent_of(old);
        match parent {
            Some(id) => {
                if let Some(splitter) = self.splitters.get_mut(&id) {
                    splitter.replace_child(old, new);
                }
            }
            None => self.root = new,
        }
        self.set_parent(new, parent);
    }
}
