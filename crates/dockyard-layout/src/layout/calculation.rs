//! Floating frame placement math.

use dockyard_common::{Rect, Vec2};

/// Pixel rect of a floating frame centered at fractional `pos`.
pub fn floating_rect(pos: Vec2, size: Vec2, container: Rect) -> Rect {
    Rect::new(
        container.x + pos.x * container.width - size.x / 2.0,
        container.y + pos.y * container.height - size.y / 2.0,
        size.x,
        size.y,
    )
}

/// Fractional position of `rect`'s center within `container`.
///
/// `None` for an empty container.
pub fn fractional_center(rect: Rect, container: Rect) -> Option<Vec2> {
    if container.is_empty() {
        return None;
    }
    let center = rect.center();
    Some(Vec2::new(
        (center.x - container.x) / container.width,
        (center.y - container.y) / container.height,
    ))
}

/// Size for a new floating frame: the desired size where given, else the
/// fallback, never below `min`.
pub fn floating_size(desired: Vec2, fallback: Vec2, min: Vec2) -> Vec2 {
    let pick = |d: f64, f: f64| if d > 0.0 { d } else { f };
    Vec2::new(pick(desired.x, fallback.x), pick(desired.y, fallback.y)).max(min)
}
