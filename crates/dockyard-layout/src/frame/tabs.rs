//! Tab list management on Frame.

use dockyard_common::PanelId;

use super::Frame;

impl Frame {
    pub fn panels(&self) -> &[PanelId] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn contains(&self, panel: PanelId) -> bool {
        self.panels.contains(&panel)
    }

    pub fn index_of(&self, panel: PanelId) -> Option<usize> {
        self.panels.iter().position(|p| *p == panel)
    }

    pub fn active_index(&self) -> i32 {
        self.active
    }

    /// The active tab's panel, `None` when the frame is empty.
    pub fn active_panel(&self) -> Option<PanelId> {
        usize::try_from(self.active)
            .ok()
            .and_then(|i| self.panels.get(i))
            .copied()
    }

    /// Activate a tab. Out-of-range indices are ignored.
    pub fn set_active(&mut self, index: i32) -> bool {
        match usize::try_from(index) {
            Ok(i) if i < self.panels.len() => {
                self.active = index;
                true
            }
            _ => false,
        }
    }

    /// Insert `panel` at `at` (default: append).
    ///
    /// A panel already in the list is moved rather than duplicated. The
    /// previously active panel stays active; an empty frame activates tab 0.
    pub(crate) fn add_panel(&mut self, panel: PanelId, at: Option<usize>) {
        let previously_active = self.active_panel();
        if let Some(existing) = self.index_of(panel) {
            self.panels.remove(existing);
        }
        let index = at.unwrap_or(self.panels.len()).min(self.panels.len());
        self.panels.insert(index, panel);

        self.active = previously_active
            .and_then(|p| self.index_of(p))
            .map_or(0, |i| i as i32);
    }

    /// Remove `panel`; returns whether any panels remain.
    pub(crate) fn remove_panel(&mut self, panel: PanelId) -> bool {
        if let Some(index) = self.index_of(panel) {
            self.panels.remove(index);
            if index as i32 <= self.active {
                self.active -= 1;
            }
        }
        if self.panels.is_empty() {
            self.active = -1;
        } else if self.active < 0 {
            self.active = 0;
        }
        !self.panels.is_empty()
    }
}
