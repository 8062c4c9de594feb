//! Panel removal, frame pruning and tree collapse.

use dockyard_common::{DockEvent, FrameId, PanelId, SplitterId};

use crate::tree::NodeId;

use super::Docker;

impl Docker {
    /// Destroy a panel. Its frame is pruned if left empty, collapsing the
    /// parent splitter. The center panel cannot be removed.
    pub fn remove_panel(&mut self, panel: PanelId) -> bool {
        if panel == self.center_panel {
            tracing::warn!("refusing to remove the center panel");
            return false;
        }
        if !self.panels.contains_key(&panel) {
            return false;
        }
        if self.drag.is_some() {
            tracing::debug!(%panel, "removal cancels the active drag");
            self.drag = None;
        }

        self.notify(DockEvent::Closed(panel));
        self.detach_panel(panel);
        if let Some(mut removed) = self.panels.remove(&panel) {
            removed.clear_handlers();
        }
        tracing::debug!(%panel, "removed panel");
        self.mark_dirty();
        true
    }

    /// Remove a panel on user request, honouring its `closeable` flag.
    pub fn close_panel(&mut self, panel: PanelId) -> bool {
        match self.panels.get(&panel) {
            Some(p) if p.closeable => self.remove_panel(panel),
            Some(_) => {
                tracing::debug!(%panel, "panel is not closeable");
                false
            }
            None => false,
        }
    }

    /// Take `panel` out of its frame without destroying it.
    ///
    /// Returns the frame it left, which may no longer exist.
    pub(super) fn detach_panel(&mut self, panel: PanelId) -> Option<FrameId> {
        let frame = self.panels.get_mut(&panel)?.frame.take()?;
        let remaining = self
            .frames
            .get_mut(&frame)
            .is_some_and(|f| f.remove_panel(panel));
        if !remaining && frame != self.center {
            self.prune_frame(frame);
        }
        self.mark_dirty();
        Some(frame)
    }

    /// Drop an empty frame; a docked one takes its parent splitter with it.
    fn prune_frame(&mut self, frame: FrameId) {
        let Some(removed) = self.frames.remove(&frame) else {
            return;
        };
        tracing::debug!(%frame, floating = removed.is_floating(), "pruned frame");
        if removed.is_floating() {
            return;
        }
        match removed.parent {
            Some(splitter) => self.collapse_splitter(splitter, NodeId::Frame(frame)),
            None => tracing::warn!(%frame, "pruned a docked frame with no parent"),
        }
    }

    /// Remove `dead` from `splitter` and promote the surviving child into
    /// the splitter's slot (or the root).
    fn collapse_splitter(&mut self, splitter: SplitterId, dead: NodeId) {
        let Some(survivor) = self.splitters.get_mut(&splitter).and_then(|s| {
            s.remove_child(dead);
            s.remaining_child()
        }) else {
            tracing::warn!(%splitter, "splitter has no surviving child");
            return;
        };
        self.replace_in_parent(NodeId::Splitter(splitter), survivor);
        self.splitters.remove(&splitter);
        tracing::debug!(%splitter, ?survivor, "collapsed splitter");
    }

    /// Destroy every user panel, frame and splitter, leaving only the
    /// center frame as root.
    pub fn clear(&mut self) {
        self.drag = None;
        for panel in self.panel_ids() {
            self.notify(DockEvent::Closed(panel));
            if let Some(mut removed) = self.panels.remove(&panel) {
                removed.clear_handlers();
            }
        }
        let center = self.center;
        self.frames.retain(|id, _| *id == center);
        self.splitters.clear();
        self.bars.clear();
        if let Some(frame) = self.frames.get_mut(&center) {
            frame.parent = None;
        }
        self.root = NodeId::Frame(center);
        tracing::debug!("cleared layout");
        self.mark_dirty();
    }
}
