//! Notifications emitted by the docking engine for the rendering layer.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::types::PanelId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "panel")]
pub enum DockEvent {
    /// The panel went from floating to docked.
    Attached(PanelId),
    /// The panel went from docked to floating.
    Detached(PanelId),
    Moved(PanelId),
    Resized(PanelId),
    Closed(PanelId),
    /// Tree changed; the host should run a layout pass.
    LayoutRequested,
}

/// Discriminant used to key panel event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventKind {
    Attached,
    Detached,
    Moved,
    Resized,
    Closed,
    LayoutRequested,
}

impl DockEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DockEvent::Attached(_) => EventKind::Attached,
            DockEvent::Detached(_) => EventKind::Detached,
            DockEvent::Moved(_) => EventKind::Moved,
            DockEvent::Resized(_) => EventKind::Resized,
            DockEvent::Closed(_) => EventKind::Closed,
            DockEvent::LayoutRequested => EventKind::LayoutRequested,
        }
    }

    /// The panel this event is addressed to, if any.
    pub fn panel(&self) -> Option<PanelId> {
        match *self {
            DockEvent::Attached(id)
            | DockEvent::Detached(id)
            | DockEvent::Moved(id)
            | DockEvent::Resized(id)
            | DockEvent::Closed(id) => Some(id),
            DockEvent::LayoutRequested => None,
        }
    }
}

/// FIFO of pending notifications, drained by the host once per frame.
#[derive(Debug, Default)]
pub struct EventQueue {
    items: VecDeque<DockEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: DockEvent) {
        tracing::trace!(?event, "queued dock event");
        self.items.push_back(event);
    }

    /// Take every pending event in emission order.
    pub fn drain(&mut self) -> Vec<DockEvent> {
        self.items.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DockEvent> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
