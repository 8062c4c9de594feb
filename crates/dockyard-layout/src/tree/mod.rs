mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use dockyard_common::{DockLocation, FrameId, SplitterId, Vec2};

    #[test]
    fn orientation_for_location() {
        assert_eq!(
            Orientation::for_location(DockLocation::Left),
            Some(Orientation::Horizontal)
        );
        assert_eq!(
            Orientation::for_location(DockLocation::Right),
            Some(Orientation::Horizontal)
        );
        assert_eq!(
            Orientation::for_location(DockLocation::Top),
            Some(Orientation::Vertical)
        );
        assert_eq!(Orientation::for_location(DockLocation::Float), None);
        assert_eq!(Orientation::for_location(DockLocation::Stacked), None);
    }

    #[test]
    fn main_and_cross_axes() {
        let v = Vec2::new(3.0, 7.0);
        assert_eq!(Orientation::Horizontal.main(v), 3.0);
        assert_eq!(Orientation::Horizontal.cross(v), 7.0);
        assert_eq!(Orientation::Vertical.main(v), 7.0);
        assert_eq!(Orientation::Vertical.cross(v), 3.0);
        assert_eq!(Orientation::Vertical.compose(7.0, 3.0), v);
        assert_eq!(Orientation::Horizontal.compose(3.0, 7.0), v);
    }

    #[test]
    fn node_id_discriminants() {
        let f: NodeId = FrameId(1).into();
        let s: NodeId = SplitterId(2).into();
        assert_eq!(f.as_frame(), Some(FrameId(1)));
        assert_eq!(f.as_splitter(), None);
        assert_eq!(s.as_splitter(), Some(SplitterId(2)));
        assert_eq!(s.as_frame(), None);
    }

    #[test]
    fn orientation_serialization() {
        let json = serde_json::to_string(&Orientation::Horizontal).unwrap();
        assert_eq!(json, "\"Horizontal\"");
        assert!(Orientation::from_horizontal(true).is_horizontal());
        assert!(!Orientation::from_horizontal(false).is_horizontal());
    }
}
