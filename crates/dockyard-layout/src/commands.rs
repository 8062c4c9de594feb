use dockyard_common::{DockLocation, FrameId, PanelId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockCommand {
    AddPanel {
        panel_type: String,
        location: DockLocation,
        parent: Option<PanelId>,
    },
    RemovePanel(PanelId),
    ClosePanel(PanelId),
    MovePanel {
        panel: PanelId,
        location: DockLocation,
        allow_group: bool,
        parent: Option<PanelId>,
    },
    ActivateTab {
        frame: FrameId,
        index: i32,
    },
    Clear,
}
