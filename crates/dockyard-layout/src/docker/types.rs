//! Core types and constructors for Docker.

use std::collections::BTreeMap;

use dockyard_common::{DockEvent, EventQueue, FrameId, PanelId, Rect, SplitterId};
use dockyard_config::DockConfig;

use crate::frame::Frame;
use crate::ghost::Ghost;
use crate::layout::SplitterBar;
use crate::panel::{Panel, PanelMap};
use crate::registry::{PanelRegistry, CENTER_PANEL_TYPE};
use crate::splitter::Splitter;
use crate::tree::NodeId;

use super::drag::{DragSession, DragSource};

/// Owns the split tree, the center frame, floating frames and every
/// panel, and performs all structural mutation.
///
/// Frames and splitters live in id-keyed arenas. The tree holds ids, and
/// children point back at their parent splitter by id. Floating frames
/// are simply the arena frames flagged as floating.
#[derive(Debug)]
pub struct Docker {
    pub(super) config: DockConfig,
    pub(super) registry: PanelRegistry,
    pub(super) panels: PanelMap,
    pub(super) frames: BTreeMap<FrameId, Frame>,
    pub(super) splitters: BTreeMap<SplitterId, Splitter>,
    /// Root of the split tree: a Splitter, or the bare center Frame.
    pub(super) root: NodeId,
    pub(super) center: FrameId,
    pub(super) center_panel: PanelId,
    pub(super) events: EventQueue,
    /// Set by every mutation, cleared by `update_layout`.
    pub(super) dirty: bool,
    /// Container rect from the last layout pass.
    pub(super) container: Rect,
    pub(super) bars: Vec<SplitterBar>,
    pub(super) drag: Option<DragSession>,
    /// Auto-incrementing counter shared by panel, frame and splitter ids.
    pub(super) next_id: u32,
}

impl Docker {
    /// Create a Docker holding only the center frame.
    pub fn new() -> Self {
        Self::with_config(DockConfig::default())
    }

    pub fn with_config(config: DockConfig) -> Self {
        let mut docker = Self {
            config,
            registry: PanelRegistry::new(),
            panels: BTreeMap::new(),
            frames: BTreeMap::new(),
            splitters: BTreeMap::new(),
            root: NodeId::Frame(FrameId(0)),
            center: FrameId(0),
            center_panel: PanelId(0),
            events: EventQueue::new(),
            dirty: false,
            container: Rect::ZERO,
            bars: Vec::new(),
            drag: None,
            next_id: 1,
        };
        docker.install_center();
        docker
    }

    fn install_center(&mut self) {
        let frame_id = FrameId(self.alloc_id());
        let panel_id = PanelId(self.alloc_id());
        let mut panel = self
            .registry
            .build(CENTER_PANEL_TYPE, panel_id)
            .unwrap_or_else(|| Panel::new(panel_id, CENTER_PANEL_TYPE));
        panel.frame = Some(frame_id);

        let mut frame = Frame::center(frame_id);
        frame.add_panel(panel_id, None);

        self.panels.insert(panel_id, panel);
        self.frames.insert(frame_id, frame);
        self.root = NodeId::Frame(frame_id);
        self.center = frame_id;
        self.center_panel = panel_id;
        self.mark_dirty();
    }

    pub(super) fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // -- Accessors --

    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The permanent center frame.
    pub fn center(&self) -> FrameId {
        self.center
    }

    /// The synthetic panel that keeps the center frame non-empty.
    pub fn center_panel(&self) -> PanelId {
        self.center_panel
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(&id)
    }

    pub fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(&id)
    }

    pub fn frame(&self, id: FrameId) -> Option<&Frame> {
        self.frames.get(&id)
    }

    pub fn splitter(&self, id: SplitterId) -> Option<&Splitter> {
        self.splitters.get(&id)
    }

    /// User panels in creation order (the center panel is excluded).
    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.panels
            .keys()
            .copied()
            .filter(|id| *id != self.center_panel)
            .collect()
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len().saturating_sub(1)
    }

    /// Every frame in creation order.
    pub fn frame_ids(&self) -> Vec<FrameId> {
        self.frames.keys().copied().collect()
    }

    pub fn splitter_ids(&self) -> Vec<SplitterId> {
        self.splitters.keys().copied().collect()
    }

    pub fn frame_rect(&self, id: FrameId) -> Option<Rect> {
        self.frames.get(&id).map(|f| f.rect)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Take every pending notification in emission order.
    pub fn drain_events(&mut self) -> Vec<DockEvent> {
        self.events.drain()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_source(&self) -> Option<DragSource> {
        self.drag.as_ref().map(|d| d.source)
    }

    pub fn ghost(&self) -> Option<&Ghost> {
        self.drag.as_ref().map(|d| &d.ghost)
    }

    // -- Registry --

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    /// Returns `false` if the name is already registered.
    pub fn register_panel_type(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(&mut Panel) + 'static,
        user_creatable: bool,
    ) -> bool {
        self.registry.register(name, factory, user_creatable)
    }

    pub fn panel_types(&self, user_creatable_only: bool) -> Vec<String> {
        self.registry.panel_types(user_creatable_only)
    }

    // -- Notifications --

    /// Run the addressed panel's handlers, then queue the event.
    pub(super) fn notify(&mut self, event: DockEvent) {
        if let Some(panel) = event.panel().and_then(|id| self.panels.get_mut(&id)) {
            panel.emit(&event);
        }
        self.events.push(event);
    }

    /// Flag the tree for a layout pass, requesting one on the first change.
    pub(super) fn mark_dirty(&mut self) {
        if !self.dirty {
            self.dirty = true;
            self.events.push(DockEvent::LayoutRequested);
        }
    }
}

impl Default for Docker {
    fn default() -> Self {
        Self::new()
    }
}
