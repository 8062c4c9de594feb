//! Panels: the leaf content holders that frames show as tabs.

use std::collections::BTreeMap;
use std::fmt;

use dockyard_common::{DockEvent, EventKind, FrameId, PanelId, Vec2};
use serde::{Deserialize, Serialize};

/// Callback invoked for every notification addressed to a panel.
pub type PanelHandler = Box<dyn FnMut(&DockEvent)>;

/// Panel arena, keyed by id.
pub(crate) type PanelMap = BTreeMap<PanelId, Panel>;

/// Per-axis scroll flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scrollable {
    pub x: bool,
    pub y: bool,
}

pub struct Panel {
    id: PanelId,
    panel_type: String,
    pub title: String,
    /// Desired size; a negative component means "use content size".
    pub size: Vec2,
    pub min_size: Vec2,
    pub max_size: Vec2,
    pub scrollable: Scrollable,
    pub moveable: bool,
    pub closeable: bool,
    /// Preferred fractional center when the panel is placed floating.
    pub position: Vec2,
    pub(crate) frame: Option<FrameId>,
    handlers: Vec<(EventKind, PanelHandler)>,
}

impl Panel {
    pub(crate) fn new(id: PanelId, panel_type: impl Into<String>) -> Self {
        Self {
            id,
            panel_type: panel_type.into(),
            title: String::new(),
            size: Vec2::UNSPECIFIED,
            min_size: Vec2::ZERO,
            max_size: Vec2::UNBOUNDED,
            scrollable: Scrollable::default(),
            moveable: true,
            closeable: true,
            position: Vec2::new(0.5, 0.5),
            frame: None,
            handlers: Vec::new(),
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn panel_type(&self) -> &str {
        &self.panel_type
    }

    /// The frame currently holding this panel, `None` while in transit.
    pub fn frame(&self) -> Option<FrameId> {
        self.frame
    }

    /// Register a handler for one kind of notification.
    ///
    /// Handlers run in registration order.
    pub fn on(&mut self, kind: EventKind, handler: impl FnMut(&DockEvent) + 'static) {
        self.handlers.push((kind, Box::new(handler)));
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub(crate) fn emit(&mut self, event: &DockEvent) {
        let kind = event.kind();
        for (k, handler) in self.handlers.iter_mut() {
            if *k == kind {
                handler(event);
            }
        }
    }

    pub(crate) fn clear_handlers(&mut self) {
        self.handlers.clear();
    }
}

impl fmt::Debug for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panel")
            .field("id", &self.id)
            .field("panel_type", &self.panel_type)
            .field("title", &self.title)
            .field("size", &self.size)
            .field("min_size", &self.min_size)
            .field("max_size", &self.max_size)
            .field("moveable", &self.moveable)
            .field("closeable", &self.closeable)
            .field("frame", &self.frame)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
