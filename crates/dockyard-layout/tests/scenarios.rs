//! End-to-end docking scenarios driven through the public API.

use dockyard_common::{DockEvent, DockLocation, Rect, Vec2};
use dockyard_layout::{
    load_layout_from_path, save_layout_to_path, Docker, LayoutSnapshot, NodeId, Orientation, Panel,
};

const SCREEN: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

fn docker() -> Docker {
    let mut d = Docker::new();
    d.register_panel_type("editor", |p: &mut Panel| p.title = "Editor".into(), true);
    d.register_panel_type(
        "outline",
        |p: &mut Panel| {
            p.title = "Outline".into();
            p.min_size = Vec2::new(120.0, 80.0);
            p.size = Vec2::new(240.0, -1.0);
        },
        true,
    );
    d
}

#[test]
fn dock_then_split() {
    let mut d = docker();
    let a = d.add_panel("editor", DockLocation::Left, None).unwrap();

    let root = d.root().as_splitter().expect("root becomes a splitter");
    let splitter = d.splitter(root).unwrap();
    assert_eq!(splitter.orientation(), Orientation::Horizontal);
    assert_eq!(splitter.pane(0), Some(NodeId::Frame(d.frame_of(a).unwrap())));
    assert_eq!(splitter.pane(1), Some(NodeId::Frame(d.center())));
    assert!((splitter.ratio() - 0.4).abs() < 1e-9);
    assert!(splitter.pane(2).is_none());
}

#[test]
fn natural_size_sets_first_layout_ratio() {
    let mut d = docker();
    let outline = d.add_panel("outline", DockLocation::Left, None).unwrap();
    d.update_layout(SCREEN);

    let rect = d.frame_rect(d.frame_of(outline).unwrap()).unwrap();
    // The center states no width, so the stored 0.4 survives.
    assert!((rect.width - 0.4 * 1276.0).abs() < 1e-6);

    assert!(d.remove_panel(outline));
    d.panel_mut(d.center_panel()).unwrap().size = Vec2::new(960.0, -1.0);
    let outline = d.add_panel("outline", DockLocation::Left, None).unwrap();
    d.update_layout(SCREEN);
    let rect = d.frame_rect(d.frame_of(outline).unwrap()).unwrap();
    assert!((rect.width - 240.0).abs() < 1e-6);

    // A split below the root keeps its placeholder ratio.
    let second = d.add_panel("outline", DockLocation::Right, None).unwrap();
    d.update_layout(SCREEN);
    let inner = d.frame(d.frame_of(second).unwrap()).unwrap().parent().unwrap();
    assert!((d.splitter(inner).unwrap().ratio() - 0.6).abs() < 1e-9);
    let rect = d.frame_rect(d.frame_of(outline).unwrap()).unwrap();
    assert!((rect.width - 240.0).abs() < 1e-6);
}

#[test]
fn removing_last_panel_collapses_split() {
    let mut d = docker();
    let a = d.add_panel("editor", DockLocation::Left, None).unwrap();
    let b = d.add_panel("editor", DockLocation::Bottom, Some(a)).unwrap();
    let b_frame = d.frame_of(b).unwrap();
    let splitters_before = d.splitter_ids().len();

    assert!(d.remove_panel(a));
    assert_eq!(d.splitter_ids().len(), splitters_before - 1);
    let root = d.root().as_splitter().unwrap();
    assert_eq!(d.splitter(root).unwrap().pane(0), Some(NodeId::Frame(b_frame)));

    assert!(d.remove_panel(b));
    assert_eq!(d.root(), NodeId::Frame(d.center()));
    assert!(d.check_invariants().is_ok());
}

#[test]
fn drag_release_without_anchor_floats_near_pointer() {
    let mut d = docker();
    let a = d.add_panel("editor", DockLocation::Left, None).unwrap();
    d.add_panel("editor", DockLocation::Stacked, Some(a)).unwrap();
    d.update_layout(SCREEN);
    d.drain_events();

    let grab = Vec2::new(40.0, 8.0);
    assert!(d.begin_tab_drag(a, grab));
    let release = Vec2::new(760.0, 400.0);
    assert!(d.drag_to(release).is_none());
    assert!(d.end_drag(release));

    let frame = d.frame(d.frame_of(a).unwrap()).unwrap();
    assert!(frame.is_floating());
    assert!((frame.rect().x - (release.x - grab.x)).abs() < 1e-6);
    assert!((frame.rect().y - (release.y - grab.y)).abs() < 1e-6);

    let detached = d
        .drain_events()
        .into_iter()
        .filter(|e| *e == DockEvent::Detached(a))
        .count();
    assert_eq!(detached, 1);
    assert!(d.check_invariants().is_ok());
}

#[test]
fn floating_frame_redocks_by_drag() {
    let mut d = docker();
    let f = d.add_panel("editor", DockLocation::Float, None).unwrap();
    d.update_layout(SCREEN);
    let frame = d.frame_of(f).unwrap();
    let rect = d.frame_rect(frame).unwrap();
    d.drain_events();

    let grab = Vec2::new(rect.x + 10.0, rect.y + 5.0);
    assert!(d.begin_frame_drag(frame, grab));
    // Left band of the center frame, well away from the floater.
    assert!(d.end_drag(Vec2::new(20.0, 400.0)));

    let docked = d.frame(d.frame_of(f).unwrap()).unwrap();
    assert!(!docked.is_floating());
    assert!(d.floating_frames().is_empty());
    assert!(d.drain_events().contains(&DockEvent::Attached(f)));
    assert!(d.check_invariants().is_ok());
}

#[test]
fn layout_survives_a_file_round_trip() {
    let mut d = docker();
    let a = d.add_panel("editor", DockLocation::Left, None).unwrap();
    d.add_panel("outline", DockLocation::Stacked, Some(a)).unwrap();
    d.add_panel("editor", DockLocation::Top, None).unwrap();
    d.add_panel("outline", DockLocation::Float, None).unwrap();
    d.update_layout(SCREEN);
    let splitter = d.root().as_splitter().unwrap();
    d.drag_splitter(splitter, Vec2::new(300.0, 400.0));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");
    save_layout_to_path(&d, &path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let parsed = LayoutSnapshot::from_json(&json).unwrap();
    assert_eq!(parsed, d.save());

    let mut restored = docker();
    load_layout_from_path(&mut restored, &path).unwrap();
    assert_eq!(restored.save(), d.save());
    assert_eq!(restored.panel_count(), 4);
    assert!(restored.check_invariants().is_ok());
}

#[test]
fn restore_into_a_docker_missing_a_type() {
    let mut d = docker();
    let a = d.add_panel("editor", DockLocation::Left, None).unwrap();
    d.add_panel("outline", DockLocation::Stacked, Some(a)).unwrap();
    d.add_panel("outline", DockLocation::Right, None).unwrap();
    let snapshot = d.save();

    let mut sparse = Docker::new();
    sparse.register_panel_type("editor", |_: &mut Panel| {}, true);
    sparse.restore(&snapshot).unwrap();

    assert_eq!(sparse.panel_count(), 1);
    let types: Vec<_> = sparse
        .panel_ids()
        .into_iter()
        .filter_map(|id| sparse.panel(id).map(|p| p.panel_type().to_string()))
        .collect();
    assert_eq!(types, vec!["editor"]);
    assert!(sparse.check_invariants().is_ok());
}
