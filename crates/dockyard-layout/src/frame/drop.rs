use dockyard_common::Vec2;
use dockyard_config::schema::AnchorConfig;

use crate::anchor::{hit_test, Anchor, HitFlags};
use crate::panel::PanelMap;

use super::Frame;

impl Frame {
    /// Hit-test this frame's last layout rect as a drop target.
    ///
    /// Only frames whose active panel is moveable (or the center) take
    /// part. Floating frames never offer splits, and the tab bar exists
    /// only when the active panel has a title.
    pub fn check_anchor_drop(
        &self,
        pointer: Vec2,
        same_frame: bool,
        allow_split: bool,
        panels: &PanelMap,
        config: &AnchorConfig,
    ) -> Option<Anchor> {
        let panel = self.active_panel().and_then(|id| panels.get(&id))?;
        if !panel.moveable && !self.is_center() {
            return None;
        }
        let flags = HitFlags {
            same_frame,
            can_split: allow_split && !self.is_floating(),
            title_bar: panel.moveable && !panel.title.is_empty(),
        };
        hit_test(self.id(), self.rect, pointer, flags, config)
    }
}
