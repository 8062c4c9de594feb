//! Splitter bar geometry for drag-resize hit testing.
//!
//! The layout pass records one `SplitterBar` per splitter, sitting in the
//! gap between its two panes. Pointer handlers use these to find the bar
//! under the cursor and to turn a drag into a new ratio.

use dockyard_common::{Rect, SplitterId, Vec2};

use crate::tree::Orientation;

use super::SplitterBar;

impl SplitterBar {
    /// Build the bar lying between `first` and `second`.
    pub fn between(
        splitter: SplitterId,
        orientation: Orientation,
        bounds: Rect,
        first: Rect,
        second: Rect,
    ) -> Self {
        let rect = match orientation {
            Orientation::Horizontal => Rect::new(
                first.right(),
                bounds.y,
                (second.x - first.right()).max(0.0),
                bounds.height,
            ),
            Orientation::Vertical => Rect::new(
                bounds.x,
                first.bottom(),
                bounds.width,
                (second.y - first.bottom()).max(0.0),
            ),
        };
        Self {
            splitter,
            orientation,
            rect,
            bounds,
        }
    }

    /// Whether `pointer` grabs this bar, allowing `slop` pixels either
    /// side along the split axis.
    pub fn hit_test(&self, pointer: Vec2, slop: f64) -> bool {
        let r = self.rect;
        match self.orientation {
            Orientation::Horizontal => {
                pointer.x >= r.x - slop
                    && pointer.x <= r.right() + slop
                    && pointer.y >= r.y
                    && pointer.y <= r.bottom()
            }
            Orientation::Vertical => {
                pointer.y >= r.y - slop
                    && pointer.y <= r.bottom() + slop
                    && pointer.x >= r.x
                    && pointer.x <= r.right()
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
