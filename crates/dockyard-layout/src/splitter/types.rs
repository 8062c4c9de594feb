//! The Splitter node: two pane slots, an orientation and a ratio.

use dockyard_common::{Rect, SplitterId};

use crate::tree::{NodeId, Orientation};

#[derive(Debug, Clone)]
pub struct Splitter {
    id: SplitterId,
    orientation: Orientation,
    /// pane0's share of the split axis, in [0, 1].
    ratio: f64,
    panes: [Option<NodeId>; 2],
    pub(crate) parent: Option<SplitterId>,
    /// Recompute the ratio from desired sizes on the next layout pass.
    pub(crate) pending_best_ratio: bool,
    /// Rect from the last layout pass.
    pub(crate) rect: Rect,
}

impl Splitter {
    pub fn new(id: SplitterId, orientation: Orientation, ratio: f64) -> Self {
        let mut splitter = Self {
            id,
            orientation,
            ratio: 0.5,
            panes: [None, None],
            parent: None,
            pending_best_ratio: false,
            rect: Rect::ZERO,
        };
        splitter.set_ratio(ratio);
        splitter
    }

    pub fn id(&self) -> SplitterId {
        self.id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation.is_horizontal()
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Values outside [0, 1] are clamped; NaN is ignored.
    pub fn set_ratio(&mut self, ratio: f64) {
        if ratio.is_nan() {
            return;
        }
        self.ratio = ratio.clamp(0.0, 1.0);
    }

    pub fn parent(&self) -> Option<SplitterId> {
        self.parent
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Child in slot 0 or 1. Any other index yields `None`.
    pub fn pane(&self, index: usize) -> Option<NodeId> {
        self.panes.get(index).copied().flatten()
    }

    /// Returns `false` (and does nothing) for an index outside {0, 1}.
    pub(crate) fn set_pane(&mut self, index: usize, node: Option<NodeId>) -> bool {
        match self.panes.get_mut(index) {
            Some(slot) => {
                *slot = node;
                true
            }
            None => false,
        }
    }

    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.panes.iter().position(|p| *p == Some(node))
    }

    /// Null the slot holding `node`. Collapsing the tree is left to the Docker.
    pub(crate) fn remove_child(&mut self, node: NodeId) -> bool {
        match self.index_of(node) {
            Some(index) => self.set_pane(index, None),
            None => false,
        }
    }

    /// Swap `old` for `new` in place, keeping its slot index.
    pub(crate) fn replace_child(&mut self, old: NodeId, new: NodeId) -> bool {
        match self.index_of(old) {
            Some(index) => self.set_pane(index, Some(new)),
            None => false,
        }
    }

    /// The first occupied slot, used to find the survivor after a removal.
    pub fn remaining_child(&self) -> Option<NodeId> {
        self.panes.iter().flatten().next().copied()
    }

    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.panes.iter().flatten().copied()
    }

    pub fn is_complete(&self) -> bool {
        self.panes[0].is_some() && self.panes[1].is_some()
    }
}
