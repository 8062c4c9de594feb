//! Subcommand implementations.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use dockyard_common::{DockError, DockLocation, FrameId, LayoutError, Rect, Vec2};
use dockyard_config::DockConfig;
use dockyard_layout::snapshot::NodeSnapshot;
use dockyard_layout::{Docker, LayoutSnapshot, Panel};

/// The explicit path, or the configured layout file.
pub fn resolve_layout(path: Option<PathBuf>, config: &DockConfig) -> Result<PathBuf, DockError> {
    match path {
        Some(path) => Ok(path),
        None => Ok(dockyard_config::layout_path(config)?),
    }
}

/// Every panel type named in `snapshot`, docked or floating.
pub fn snapshot_panel_types(snapshot: &LayoutSnapshot) -> BTreeSet<String> {
    let mut types = BTreeSet::new();
    collect_types(&snapshot.root, &mut types);
    for frame in &snapshot.floating {
        types.extend(frame.panels.iter().map(|p| p.panel_type.clone()));
    }
    types
}

fn collect_types(node: &NodeSnapshot, out: &mut BTreeSet<String>) {
    match node {
        NodeSnapshot::Center => {}
        NodeSnapshot::Frame(frame) => out.extend(frame.panels.iter().map(|p| p.panel_type.clone())),
        NodeSnapshot::Splitter(s) => {
            collect_types(&s.pane0, out);
            collect_types(&s.pane1, out);
        }
    }
}

/// Restore the layout at `path` into a Docker that knows every type it
/// names. The CLI has no real panels, so each type gets a bare factory.
pub fn read_layout(path: &Path, config: &DockConfig) -> Result<Docker, DockError> {
    let json = std::fs::read_to_string(path).map_err(|e| LayoutError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let snapshot = LayoutSnapshot::from_json(&json)?;

    let mut docker = Docker::with_config(config.clone());
    for name in snapshot_panel_types(&snapshot) {
        docker.register_panel_type(name, |_: &mut Panel| {}, true);
    }
    docker.restore(&snapshot)?;
    Ok(docker)
}

/// One laid-out frame, as printed by `inspect`.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub frame: FrameId,
    pub kind: &'static str,
    pub rect: Rect,
    /// Panel types in tab order; the active one is marked with `*`.
    pub tabs: Vec<String>,
}

/// Run a layout pass at `width` x `height` and describe every frame.
pub fn inspect(docker: &mut Docker, width: f64, height: f64) -> Vec<Placement> {
    let placed = docker.update_layout(Rect::new(0.0, 0.0, width, height));
    placed
        .into_iter()
        .filter_map(|(id, rect)| {
            let frame = docker.frame(id)?;
            let kind = if frame.is_center() {
                "center"
            } else if frame.is_floating() {
                "floating"
            } else {
                "docked"
            };
            let active = frame.active_panel();
            let tabs = frame
                .panels()
                .iter()
                .filter_map(|p| docker.panel(*p))
                .map(|p| {
                    let marker = if Some(p.id()) == active { "*" } else { "" };
                    format!("{}{marker}", p.panel_type())
                })
                .collect();
            Some(Placement {
                frame: id,
                kind,
                rect,
                tabs,
            })
        })
        .collect()
}

pub fn format_table(placements: &[Placement]) -> String {
    let mut out = format!(
        "{:<10} {:<9} {:>8} {:>8} {:>8} {:>8}  tabs\n",
        "frame", "kind", "x", "y", "width", "height"
    );
    for p in placements {
        out.push_str(&format!(
            "{:<10} {:<9} {:>8.1} {:>8.1} {:>8.1} {:>8.1}  {}\n",
            p.frame.to_string(),
            p.kind,
            p.rect.x,
            p.rect.y,
            p.rect.width,
            p.rect.height,
            p.tabs.join(", ")
        ));
    }
    out
}

pub fn format_json(placements: &[Placement]) -> String {
    let frames: Vec<_> = placements
        .iter()
        .map(|p| {
            serde_json::json!({
                "frame": p.frame.0,
                "kind": p.kind,
                "rect": p.rect,
                "tabs": p.tabs,
            })
        })
        .collect();
    serde_json::to_string_pretty(&frames).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}

/// Restore `path` and check the rebuilt tree; returns a one-line summary.
pub fn validate(path: &Path, config: &DockConfig) -> Result<String, DockError> {
    let docker = read_layout(path, config)?;
    docker.check_invariants().map_err(DockError::Other)?;
    Ok(format!(
        "{}: {} panels in {} frames ({} floating)",
        path.display(),
        docker.panel_count(),
        docker.frame_ids().len(),
        docker.floating_frames().len()
    ))
}

/// A small IDE-like arrangement: a tabbed sidebar, a bottom terminal, an
/// inspector on the right and one floating preview.
pub fn demo(config: &DockConfig) -> Docker {
    let mut docker = Docker::with_config(config.clone());
    let types: [(&str, &str, Vec2); 5] = [
        ("outline", "Outline", Vec2::new(260.0, -1.0)),
        ("search", "Search", Vec2::new(260.0, -1.0)),
        ("terminal", "Terminal", Vec2::new(-1.0, 220.0)),
        ("inspector", "Inspector", Vec2::new(300.0, -1.0)),
        ("preview", "Preview", Vec2::new(480.0, 320.0)),
    ];
    for (name, title, size) in types {
        docker.register_panel_type(
            name,
            move |p: &mut Panel| {
                p.title = title.to_string();
                p.size = size;
                p.min_size = Vec2::new(80.0, 60.0);
            },
            true,
        );
    }

    let outline = docker.add_panel("outline", DockLocation::Left, None);
    docker.add_panel("search", DockLocation::Stacked, outline);
    if let Some(frame) = outline.and_then(|p| docker.frame_of(p)) {
        docker.activate_tab(frame, 0);
    }
    docker.add_panel("terminal", DockLocation::Bottom, None);
    docker.add_panel("inspector", DockLocation::Right, None);
    docker.add_panel("preview", DockLocation::Float, None);
    docker
}
