//! Saved layouts on disk.

use std::path::Path;

use dockyard_common::LayoutError;

use crate::docker::Docker;
use crate::snapshot::LayoutSnapshot;

/// Write `docker`'s arrangement to `path` as pretty JSON.
pub fn save_layout_to_path(docker: &Docker, path: &Path) -> Result<(), LayoutError> {
    let json = docker.save().to_json()?;
    dockyard_config::write_atomic(path, &json).map_err(|message| LayoutError::Io {
        path: path.to_path_buf(),
        message,
    })?;
    tracing::info!(path = %path.display(), "layout saved");
    Ok(())
}

/// Replace `docker`'s arrangement with the layout stored at `path`.
///
/// On any error the Docker is left as it was.
pub fn load_layout_from_path(docker: &mut Docker, path: &Path) -> Result<(), LayoutError> {
    let json = std::fs::read_to_string(path).map_err(|e| LayoutError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let snapshot = LayoutSnapshot::from_json(&json)?;
    docker.restore(&snapshot)?;
    tracing::info!(path = %path.display(), "layout loaded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockyard_common::DockLocation;

    use crate::panel::Panel;

    fn docker() -> Docker {
        let mut d = Docker::new();
        d.register_panel_type("console", |p: &mut Panel| p.title = "Console".into(), true);
        d
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layouts").join("main.json");

        let mut d = docker();
        let a = d.add_panel("console", DockLocation::Left, None).unwrap();
        d.add_panel("console", DockLocation::Float, None).unwrap();
        d.panel_mut(a).unwrap().title = "Output".into();
        save_layout_to_path(&d, &path).unwrap();
        assert!(path.exists());

        let mut restored = docker();
        load_layout_from_path(&mut restored, &path).unwrap();
        assert_eq!(restored.save(), d.save());
        assert_eq!(restored.panel_count(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let mut d = docker();
        let err = load_layout_from_path(&mut d, &path).unwrap_err();
        assert!(matches!(err, LayoutError::Io { .. }));
    }

    #[test]
    fn corrupt_file_leaves_docker_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, "{ \"version\": 1, \"root\": ").unwrap();

        let mut d = docker();
        let a = d.add_panel("console", DockLocation::Right, None).unwrap();
        let err = load_layout_from_path(&mut d, &path).unwrap_err();
        assert!(matches!(err, LayoutError::Parse(_)));
        assert!(d.panel(a).is_some());
        assert!(d.check_invariants().is_ok());
    }

    #[test]
    fn file_without_center_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(
            &path,
            r#"{"version":1,"root":{"type":"frame","floating":false,"pos":{"x":0.5,"y":0.5},"size":{"x":0.0,"y":0.0},"tab":0,"panels":[]}}"#,
        )
        .unwrap();

        let mut d = docker();
        let err = load_layout_from_path(&mut d, &path).unwrap_err();
        assert!(matches!(err, LayoutError::MissingCenter));
    }
}
