//! Binary split nodes and their geometry.

pub mod geometry;
mod types;

pub use geometry::PaneLimits;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::geometry::*;
    use super::*;
    use crate::tree::{NodeId, Orientation};
    use dockyard_common::{FrameId, Rect, SplitterId, Vec2};

    fn min_x(a: f64, b: f64) -> PaneLimits {
        PaneLimits {
            min0: Vec2::new(a, 0.0),
            min1: Vec2::new(b, 0.0),
            ..PaneLimits::default()
        }
    }

    #[test]
    fn ratio_is_clamped_by_sibling_minimum() {
        let rect = Rect::new(0.0, 0.0, 400.0, 100.0);
        let (a, b) = child_rects(Orientation::Horizontal, rect, 0.99, 0.0, &min_x(100.0, 100.0));
        assert!(a.width <= 300.0);
        assert!((a.width - 300.0).abs() < 1e-9);
        assert!((b.width - 100.0).abs() < 1e-9);
        assert!((b.x - 300.0).abs() < 1e-9);
    }

    #[test]
    fn ratio_clamp_accounts_for_bar() {
        let rect = Rect::new(0.0, 0.0, 400.0, 100.0);
        let (a, b) = child_rects(Orientation::Horizontal, rect, 0.99, 4.0, &min_x(100.0, 100.0));
        assert!((a.width - 296.0).abs() < 1e-9);
        assert!((b.x - 300.0).abs() < 1e-9);
        assert!((b.width - 100.0).abs() < 1e-9);
    }

    #[test]
    fn minimum_beats_ratio_when_constraints_cross() {
        let rect = Rect::new(0.0, 0.0, 400.0, 100.0);
        let (a, b) = child_rects(Orientation::Horizontal, rect, 0.1, 0.0, &min_x(300.0, 300.0));
        assert!((a.width - 300.0).abs() < 1e-9);
        assert!((b.width - 100.0).abs() < 1e-9);
    }

    #[test]
    fn sibling_maximum_pushes_position() {
        let rect = Rect::new(0.0, 0.0, 100.0, 400.0);
        let limits = PaneLimits {
            max1: Vec2::new(f64::INFINITY, 100.0),
            ..PaneLimits::default()
        };
        let (a, b) = child_rects(Orientation::Vertical, rect, 0.5, 0.0, &limits);
        assert!((a.height - 300.0).abs() < 1e-9);
        assert!((b.y - 300.0).abs() < 1e-9);
        assert!((b.height - 100.0).abs() < 1e-9);
        assert_eq!(a.width, 100.0);
    }

    #[test]
    fn vertical_split_with_bar() {
        let rect = Rect::new(10.0, 20.0, 200.0, 104.0);
        let (a, b) = child_rects(Orientation::Vertical, rect, 0.5, 4.0, &PaneLimits::default());
        assert_eq!(a, Rect::new(10.0, 20.0, 200.0, 50.0));
        assert_eq!(b, Rect::new(10.0, 74.0, 200.0, 50.0));
    }

    #[test]
    fn degenerate_rect_produces_finite_geometry() {
        let rect = Rect::new(0.0, 0.0, 0.0, 0.0);
        let (a, b) = child_rects(Orientation::Horizontal, rect, 0.4, 4.0, &min_x(50.0, 50.0));
        for r in [a, b] {
            assert!(r.x.is_finite() && r.y.is_finite());
            assert!(r.width.is_finite() && r.height.is_finite());
            assert!(r.width >= 0.0 && r.height >= 0.0);
        }

        let (a, _) = child_rects(
            Orientation::Horizontal,
            Rect::new(0.0, 0.0, 100.0, 10.0),
            f64::NAN,
            0.0,
            &PaneLimits::default(),
        );
        assert_eq!(a.width, 0.0);
    }

    #[test]
    fn aggregate_min_sums_along_axis() {
        let a = Vec2::new(100.0, 50.0);
        let b = Vec2::new(80.0, 70.0);
        assert_eq!(
            aggregate_min(Orientation::Horizontal, Some(a), Some(b)),
            Vec2::new(180.0, 70.0)
        );
        assert_eq!(
            aggregate_min(Orientation::Vertical, Some(a), Some(b)),
            Vec2::new(100.0, 120.0)
        );
        assert_eq!(aggregate_min(Orientation::Vertical, Some(a), None), a);
        assert_eq!(aggregate_min(Orientation::Vertical, None, None), Vec2::UNBOUNDED);
    }

    #[test]
    fn aggregate_max_treats_missing_as_unbounded() {
        let a = Vec2::new(300.0, 200.0);
        let b = Vec2::new(100.0, 400.0);
        assert_eq!(
            aggregate_max(Orientation::Horizontal, Some(a), Some(b)),
            Vec2::new(400.0, 200.0)
        );
        let one = aggregate_max(Orientation::Horizontal, Some(a), None);
        assert!(one.x.is_infinite());
        assert_eq!(one.y, 200.0);
    }

    #[test]
    fn aggregate_desired_needs_both_children() {
        let a = Vec2::new(100.0, 50.0);
        let b = Vec2::new(-1.0, 80.0);
        assert_eq!(
            aggregate_desired(Orientation::Horizontal, a, b),
            Vec2::new(-1.0, 80.0)
        );
        assert_eq!(
            aggregate_desired(Orientation::Vertical, a, b),
            Vec2::new(-1.0, 130.0)
        );
    }

    #[test]
    fn best_ratio_fits_pane0_to_its_desired_length() {
        // 400 wide less a 4px bar leaves 396 for the panes.
        let rect = Rect::new(0.0, 0.0, 400.0, 300.0);
        let fit = |d1: f64| {
            best_ratio(
                Orientation::Horizontal,
                rect,
                4.0,
                Vec2::new(99.0, -1.0),
                Vec2::new(d1, -1.0),
                &PaneLimits::default(),
                0.4,
            )
        };
        assert!((fit(50.0) - 0.25).abs() < 1e-9);
        // The sibling's desired length does not scale pane0.
        assert!((fit(900.0) - 0.25).abs() < 1e-9);

        let (a, _) = child_rects(
            Orientation::Horizontal,
            rect,
            fit(50.0),
            4.0,
            &PaneLimits::default(),
        );
        assert!((a.width - 99.0).abs() < 1e-9);
    }

    #[test]
    fn best_ratio_keeps_current_without_room() {
        let ratio = best_ratio(
            Orientation::Vertical,
            Rect::new(0.0, 0.0, 400.0, 0.0),
            4.0,
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 10.0),
            &PaneLimits::default(),
            0.6,
        );
        assert_eq!(ratio, 0.6);
    }

    #[test]
    fn best_ratio_keeps_current_when_unspecified() {
        let rect = Rect::new(0.0, 0.0, 400.0, 300.0);
        let ratio = best_ratio(
            Orientation::Horizontal,
            rect,
            0.0,
            Vec2::new(100.0, 100.0),
            Vec2::UNSPECIFIED,
            &PaneLimits::default(),
            0.4,
        );
        assert_eq!(ratio, 0.4);

        let ratio = best_ratio(
            Orientation::Vertical,
            rect,
            0.0,
            Vec2::ZERO,
            Vec2::ZERO,
            &PaneLimits::default(),
            0.6,
        );
        assert_eq!(ratio, 0.6);
    }

    #[test]
    fn best_ratio_is_clamped() {
        let rect = Rect::new(0.0, 0.0, 400.0, 300.0);
        let ratio = best_ratio(
            Orientation::Horizontal,
            rect,
            0.0,
            Vec2::new(390.0, 10.0),
            Vec2::new(10.0, 10.0),
            &min_x(0.0, 100.0),
            0.5,
        );
        assert!((ratio - 0.75).abs() < 1e-9);
    }

    #[test]
    fn ratio_at_pointer() {
        let rect = Rect::new(100.0, 0.0, 404.0, 100.0);
        let ratio = ratio_at(Orientation::Horizontal, rect, 202.0, 4.0, &PaneLimits::default());
        assert!((ratio.unwrap() - 0.25).abs() < 1e-9);

        let clamped = ratio_at(Orientation::Horizontal, rect, 0.0, 4.0, &min_x(40.0, 0.0));
        assert!((clamped.unwrap() - 0.1).abs() < 1e-9);

        let empty = Rect::new(0.0, 0.0, 0.0, 100.0);
        assert_eq!(
            ratio_at(Orientation::Horizontal, empty, 10.0, 4.0, &PaneLimits::default()),
            None
        );
    }

    #[test]
    fn pane_accessor_ignores_bad_index() {
        let mut splitter = Splitter::new(SplitterId(1), Orientation::Horizontal, 0.4);
        assert!(splitter.set_pane(0, Some(NodeId::Frame(FrameId(2)))));
        assert!(!splitter.set_pane(2, Some(NodeId::Frame(FrameId(3)))));
        assert_eq!(splitter.pane(0), Some(NodeId::Frame(FrameId(2))));
        assert_eq!(splitter.pane(1), None);
        assert_eq!(splitter.pane(5), None);
        assert!(!splitter.is_complete());
    }

    #[test]
    fn remove_child_leaves_survivor() {
        let mut splitter = Splitter::new(SplitterId(1), Orientation::Vertical, 0.6);
        splitter.set_pane(0, Some(NodeId::Frame(FrameId(2))));
        splitter.set_pane(1, Some(NodeId::Splitter(SplitterId(3))));
        assert!(splitter.is_complete());

        assert!(splitter.remove_child(NodeId::Frame(FrameId(2))));
        assert!(!splitter.remove_child(NodeId::Frame(FrameId(2))));
        assert_eq!(splitter.pane(0), None);
        assert_eq!(
            splitter.remaining_child(),
            Some(NodeId::Splitter(SplitterId(3)))
        );
    }

    #[test]
    fn replace_child_keeps_slot() {
        let mut splitter = Splitter::new(SplitterId(1), Orientation::Vertical, 0.5);
        splitter.set_pane(0, Some(NodeId::Frame(FrameId(2))));
        splitter.set_pane(1, Some(NodeId::Frame(FrameId(3))));
        assert!(splitter.replace_child(NodeId::Frame(FrameId(3)), NodeId::Splitter(SplitterId(9))));
        assert_eq!(splitter.index_of(NodeId::Splitter(SplitterId(9))), Some(1));
        assert_eq!(splitter.children().count(), 2);
    }

    #[test]
    fn set_ratio_clamps_and_ignores_nan() {
        let mut splitter = Splitter::new(SplitterId(1), Orientation::Horizontal, 1.5);
        assert_eq!(splitter.ratio(), 1.0);
        splitter.set_ratio(-0.2);
        assert_eq!(splitter.ratio(), 0.0);
        splitter.set_ratio(0.3);
        splitter.set_ratio(f64::NAN);
        assert_eq!(splitter.ratio(), 0.3);
    }
}
