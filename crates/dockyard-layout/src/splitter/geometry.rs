//! Pure split geometry: child rects, aggregate limits and ratio fitting.

use dockyard_common::{Rect, Vec2};

use crate::tree::Orientation;

/// Size limits of both panes of a split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneLimits {
    pub min0: Vec2,
    pub max0: Vec2,
    pub min1: Vec2,
    pub max1: Vec2,
}

impl Default for PaneLimits {
    fn default() -> Self {
        Self {
            min0: Vec2::ZERO,
            max0: Vec2::UNBOUNDED,
            min1: Vec2::ZERO,
            max1: Vec2::UNBOUNDED,
        }
    }
}

fn axis_start(orientation: Orientation, rect: Rect) -> f64 {
    match orientation {
        Orientation::Horizontal => rect.x,
        Orientation::Vertical => rect.y,
    }
}

fn axis_len(orientation: Orientation, rect: Rect) -> f64 {
    orientation.main(rect.size())
}

/// Bar thickness actually available inside `rect`.
fn effective_bar(orientation: Orientation, rect: Rect, bar: f64) -> f64 {
    bar.max(0.0).min(axis_len(orientation, rect).max(0.0))
}

/// Length left for the two panes once the bar is taken out.
pub fn available(orientation: Orientation, rect: Rect, bar: f64) -> f64 {
    let len = axis_len(orientation, rect);
    if len.is_nan() || len <= 0.0 {
        return 0.0;
    }
    (len - effective_bar(orientation, rect, bar)).max(0.0)
}

/// Allowed range for pane0's length, `(min_pos, max_pos)`.
///
/// When the two bounds cross, `min_pos` wins.
pub fn position_bounds(orientation: Orientation, avail: f64, limits: &PaneLimits) -> (f64, f64) {
    let max_pos = orientation
        .main(limits.max0)
        .min(avail - orientation.main(limits.min1));
    let min_pos = orientation
        .main(limits.min0)
        .max(avail - orientation.main(limits.max1));
    (min_pos, max_pos)
}

/// Clamp a requested pane0 length into the constraint range, then into the container.
pub fn clamp_position(orientation: Orientation, pos: f64, avail: f64, limits: &PaneLimits) -> f64 {
    if avail.is_nan() || avail <= 0.0 {
        return 0.0;
    }
    let pos = if pos.is_finite() { pos } else { 0.0 };
    let (min_pos, max_pos) = position_bounds(orientation, avail, limits);
    pos.min(max_pos).max(min_pos).clamp(0.0, avail)
}

/// Split `rect` into pane0 and pane1 rects at `ratio`.
pub fn child_rects(
    orientation: Orientation,
    rect: Rect,
    ratio: f64,
    bar: f64,
    limits: &PaneLimits,
) -> (Rect, Rect) {
    let avail = available(orientation, rect, bar);
    let bar = effective_bar(orientation, rect, bar);
    let pos = clamp_position(orientation, ratio * avail, avail, limits);
    let rest = (avail - pos).max(0.0);

    match orientation {
        Orientation::Horizontal => (
            Rect::new(rect.x, rect.y, pos, rect.height.max(0.0)),
            Rect::new(rect.x + pos + bar, rect.y, rest, rect.height.max(0.0)),
        ),
        Orientation::Vertical => (
            Rect::new(rect.x, rect.y, rect.width.max(0.0), pos),
            Rect::new(rect.x, rect.y + pos + bar, rect.width.max(0.0), rest),
        ),
    }
}

/// Ratio that puts the bar's center at `pointer_main` along the split axis.
///
/// `None` when the rect has no room to split.
pub fn ratio_at(
    orientation: Orientation,
    rect: Rect,
    pointer_main: f64,
    bar: f64,
    limits: &PaneLimits,
) -> Option<f64> {
    let avail = available(orientation, rect, bar);
    if avail.is_nan() || avail <= 0.0 {
        return None;
    }
    let bar = effective_bar(orientation, rect, bar);
    let pos = pointer_main - axis_start(orientation, rect) - bar / 2.0;
    Some(clamp_position(orientation, pos, avail, limits) / avail)
}

/// Minimum size of a split from its children's minimums.
///
/// Sum along the split axis, max across it. One child yields its own
/// minimum; none yields [`Vec2::UNBOUNDED`].
pub fn aggregate_min(orientation: Orientation, a: Option<Vec2>, b: Option<Vec2>) -> Vec2 {
    match (a, b) {
        (Some(a), Some(b)) => orientation.compose(
            orientation.main(a) + orientation.main(b),
            orientation.cross(a).max(orientation.cross(b)),
        ),
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => Vec2::UNBOUNDED,
    }
}

/// Maximum size of a split: sum along the axis, min across it.
/// Absent children count as unbounded.
pub fn aggregate_max(orientation: Orientation, a: Option<Vec2>, b: Option<Vec2>) -> Vec2 {
    let a = a.unwrap_or(Vec2::UNBOUNDED);
    let b = b.unwrap_or(Vec2::UNBOUNDED);
    orientation.compose(
        orientation.main(a) + orientation.main(b),
        orientation.cross(a).min(orientation.cross(b)),
    )
}

/// Desired size of a split. A component is unspecified (-1) unless both
/// children specify it.
pub fn aggregate_desired(orientation: Orientation, a: Vec2, b: Vec2) -> Vec2 {
    let main = if orientation.main(a) >= 0.0 && orientation.main(b) >= 0.0 {
        orientation.main(a) + orientation.main(b)
    } else {
        -1.0
    };
    let cross = if orientation.cross(a) >= 0.0 && orientation.cross(b) >= 0.0 {
        orientation.cross(a).max(orientation.cross(b))
    } else {
        -1.0
    };
    orientation.compose(main, cross)
}

/// Ratio that gives pane0 its desired length along the split axis,
/// clamped into the constraint range of `rect`. Falls back to `current`
/// when either desired length is unspecified, both are zero, or `rect`
/// has no room to split.
pub fn best_ratio(
    orientation: Orientation,
    rect: Rect,
    bar: f64,
    desired0: Vec2,
    desired1: Vec2,
    limits: &PaneLimits,
    current: f64,
) -> f64 {
    let d0 = orientation.main(desired0);
    let d1 = orientation.main(desired1);
    if d0.is_nan() || d1.is_nan() || d0 < 0.0 || d1 < 0.0 || d0 + d1 <= 0.0 {
        return current;
    }
    let avail = available(orientation, rect, bar);
    if avail.is_nan() || avail <= 0.0 {
        return current;
    }
    clamp_position(orientation, d0, avail, limits) / avail
}
