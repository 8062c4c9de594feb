//! Core types for the split tree: Orientation and NodeId.

use dockyard_common::{DockLocation, FrameId, SplitterId, Vec2};
use serde::{Deserialize, Serialize};

/// Split direction of a Splitter.
///
/// `Horizontal` places the panes side by side and divides width;
/// `Vertical` stacks them and divides height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A slot in the split tree: either a leaf Frame or an inner Splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Frame(FrameId),
    Splitter(SplitterId),
}

impl Orientation {
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// The orientation a split at `location` creates, if it splits at all.
    pub fn for_location(location: DockLocation) -> Option<Self> {
        location.splits_horizontally().map(Self::from_horizontal)
    }

    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }

    /// Component of `v` along the split axis.
    pub fn main(self, v: Vec2) -> f64 {
        match self {
            Orientation::Horizontal => v.x,
            Orientation::Vertical => v.y,
        }
    }

    /// Component of `v` across the split axis.
    pub fn cross(self, v: Vec2) -> f64 {
        match self {
            Orientation::Horizontal => v.y,
            Orientation::Vertical => v.x,
        }
    }

    /// Build a Vec2 from split-axis and cross-axis components.
    pub fn compose(self, main: f64, cross: f64) -> Vec2 {
        match self {
            Orientation::Horizontal => Vec2::new(main, cross),
            Orientation::Vertical => Vec2::new(cross, main),
        }
    }
}

impl NodeId {
    pub fn as_frame(self) -> Option<FrameId> {
        match self {
            NodeId::Frame(id) => Some(id),
            NodeId::Splitter(_) => None,
        }
    }

    pub fn as_splitter(self) -> Option<SplitterId> {
        match self {
            NodeId::Splitter(id) => Some(id),
            NodeId::Frame(_) => None,
        }
    }
}

impl From<FrameId> for NodeId {
    fn from(id: FrameId) -> Self {
        NodeId::Frame(id)
    }
}

impl From<SplitterId> for NodeId {
    fn from(id: SplitterId) -> Self {
        NodeId::Splitter(id)
    }
}
