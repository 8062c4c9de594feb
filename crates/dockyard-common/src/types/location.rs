use serde::{Deserialize, Serialize};

/// Placement intent for a panel, relative to a target panel or the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DockLocation {
    Float,
    Top,
    Left,
    Right,
    Bottom,
    /// Join the target's frame as a new tab.
    Stacked,
}

impl DockLocation {
    /// Top and Left place the new pane first (pane0).
    pub fn is_leading(self) -> bool {
        matches!(self, DockLocation::Top | DockLocation::Left)
    }

    /// True for the four edge placements that carve a split.
    pub fn is_split(self) -> bool {
        matches!(
            self,
            DockLocation::Top | DockLocation::Left | DockLocation::Right | DockLocation::Bottom
        )
    }

    /// Left/Right divide width (side-by-side); Top/Bottom divide height.
    /// `None` for placements that don't split.
    pub fn splits_horizontally(self) -> Option<bool> {
        match self {
            DockLocation::Left | DockLocation::Right => Some(true),
            DockLocation::Top | DockLocation::Bottom => Some(false),
            DockLocation::Float | DockLocation::Stacked => None,
        }
    }
}

/// An edge of a floating frame grabbed by a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}
