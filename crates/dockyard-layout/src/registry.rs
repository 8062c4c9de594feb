//! Panel-type registry: name to factory, plus a user-creatable flag.

use std::collections::BTreeMap;
use std::fmt;

use dockyard_common::PanelId;

use crate::panel::Panel;

/// Type name of the synthetic panel that lives in the center frame.
pub const CENTER_PANEL_TYPE: &str = "center";

/// Initialiser run on a freshly allocated panel.
pub type PanelFactory = Box<dyn Fn(&mut Panel)>;

struct PanelType {
    factory: PanelFactory,
    user_creatable: bool,
}

pub struct PanelRegistry {
    types: BTreeMap<String, PanelType>,
}

impl PanelRegistry {
    /// A registry holding only the built-in center type.
    pub fn new() -> Self {
        let mut types = BTreeMap::new();
        types.insert(
            CENTER_PANEL_TYPE.to_string(),
            PanelType {
                factory: Box::new(|panel: &mut Panel| {
                    panel.moveable = false;
                    panel.closeable = false;
                }),
                user_creatable: false,
            },
        );
        Self { types }
    }

    /// Returns `false` if the name is already taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(&mut Panel) + 'static,
        user_creatable: bool,
    ) -> bool {
        let name = name.into();
        if self.types.contains_key(&name) {
            tracing::warn!(%name, "panel type already registered");
            return false;
        }
        tracing::debug!(%name, user_creatable, "registered panel type");
        self.types.insert(
            name,
            PanelType {
                factory: Box::new(factory),
                user_creatable,
            },
        );
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn panel_types(&self, user_creatable_only: bool) -> Vec<String> {
        self.types
            .iter()
            .filter(|(_, t)| !user_creatable_only || t.user_creatable)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub(crate) fn build(&self, name: &str, id: PanelId) -> Option<Panel> {
        let entry = self.types.get(name)?;
        let mut panel = Panel::new(id, name);
        (entry.factory)(&mut panel);
        Some(panel)
    }
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PanelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelRegistry")
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockyard_common::Vec2;

    #[test]
    fn center_type_is_built_in() {
        let registry = PanelRegistry::new();
        assert!(registry.contains(CENTER_PANEL_TYPE));
        assert!(registry.panel_types(true).is_empty());
        assert_eq!(registry.panel_types(false), vec!["center".to_string()]);

        let center = registry.build(CENTER_PANEL_TYPE, PanelId(1)).unwrap();
        assert!(!center.moveable);
        assert!(!center.closeable);
        assert!(center.title.is_empty());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = PanelRegistry::new();
        assert!(registry.register("console", |_| {}, true));
        assert!(!registry.register("console", |_| {}, false));
        assert!(!registry.register(CENTER_PANEL_TYPE, |_| {}, true));
    }

    #[test]
    fn panel_types_sorted_and_filtered() {
        let mut registry = PanelRegistry::new();
        registry.register("scene", |_| {}, true);
        registry.register("console", |_| {}, true);
        registry.register("debug", |_| {}, false);

        assert_eq!(registry.panel_types(true), vec!["console", "scene"]);
        assert_eq!(
            registry.panel_types(false),
            vec!["center", "console", "debug", "scene"]
        );
    }

    #[test]
    fn build_runs_factory() {
        let mut registry = PanelRegistry::new();
        registry.register(
            "console",
            |panel: &mut Panel| {
                panel.title = "Console".into();
                panel.size = Vec2::new(300.0, 200.0);
            },
            true,
        );

        let panel = registry.build("console", PanelId(7)).unwrap();
        assert_eq!(panel.id(), PanelId(7));
        assert_eq!(panel.title, "Console");
        assert_eq!(panel.size, Vec2::new(300.0, 200.0));
        assert!(registry.build("missing", PanelId(8)).is_none());
    }
}
