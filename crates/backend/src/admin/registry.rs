use std::collections::HashMap;

use super::panel::{Panel, PanelDefinition};
use crate::shared::sanitize::sanitize_key;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    #[error("panel id is empty after normalization")]
    EmptyId,
    #[error("panel '{0}' has an empty label")]
    EmptyLabel(String),
    #[error("panel '{0}' has no renderer")]
    MissingRenderer(String),
}

/// Реестр панелей (вкладок) страницы администратора.
///
/// Ключ - нормализованный id, порядок - порядок первой регистрации.
/// Заполняется при запуске, затем замораживается в состоянии приложения.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    panels: Vec<Panel>,
    positions: HashMap<String, usize>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a panel, reporting why a definition was refused.
    ///
    /// Re-registering an id replaces its label and renderer in place.
    pub fn try_register(&mut self, definition: PanelDefinition) -> Result<(), PanelError> {
        let id = sanitize_key(&definition.id);
        if id.is_empty() {
            return Err(PanelError::EmptyId);
        }
        if definition.label.is_empty() {
            return Err(PanelError::EmptyLabel(id));
        }
        let renderer = definition
            .renderer
            .ok_or_else(|| PanelError::MissingRenderer(id.clone()))?;

        let panel = Panel {
            id: id.clone(),
            label: definition.label,
            renderer,
        };

        match self.positions.get(&id) {
            Some(&position) => {
                tracing::debug!("Panel '{}' re-registered, replacing previous entry", id);
                self.panels[position] = panel;
            }
            None => {
                self.positions.insert(id, self.panels.len());
                self.panels.push(panel);
            }
        }

        Ok(())
    }

    /// Register a panel. Invalid definitions are skipped: a misconfigured
    /// module must never break the admin page.
    pub fn register(&mut self, definition: PanelDefinition) {
        if let Err(e) = self.try_register(definition) {
            tracing::warn!("Skipping panel registration: {}", e);
        }
    }

    /// Все панели в порядке регистрации
    pub fn list(&self) -> &[Panel] {
        &self.panels
    }

    pub fn get(&self, id: &str) -> Option<&Panel> {
        self.positions.get(id).map(|&position| &self.panels[position])
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::panel::RenderError;

    fn definition(id: &str, label: &str) -> PanelDefinition {
        PanelDefinition::from_fn(id, label, |_ctx, out| {
            out.push_str("body");
            Ok::<(), RenderError>(())
        })
    }

    fn ids(registry: &PanelRegistry) -> Vec<&str> {
        registry.list().iter().map(|p| p.id()).collect()
    }

    #[test]
    fn test_registered_panel_is_listed_once_under_normalized_id() {
        let mut registry = PanelRegistry::new();
        registry.register(definition("Offers!", "Offers"));

        assert_eq!(registry.len(), 1);
        let panel = registry.get("offers").unwrap();
        assert_eq!(panel.label(), "Offers");
        assert_eq!(ids(&registry), vec!["offers"]);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut registry = PanelRegistry::new();
        registry.register(definition("a", "A"));
        registry.register(definition("b", "B"));

        assert_eq!(ids(&registry), vec!["a", "b"]);
        // Повторный список не меняется
        assert_eq!(ids(&registry), vec!["a", "b"]);
    }

    #[test]
    fn test_reregistering_overwrites_in_place() {
        let mut registry = PanelRegistry::new();
        registry.register(definition("a", "A"));
        registry.register(definition("b", "B"));
        registry.register(definition("a", "A2"));

        assert_eq!(registry.len(), 2);
        assert_eq!(ids(&registry), vec!["a", "b"]);
        assert_eq!(registry.get("a").unwrap().label(), "A2");
    }

    #[test]
    fn test_invalid_definitions_leave_registry_unchanged() {
        let mut registry = PanelRegistry::new();
        registry.register(definition("a", "A"));

        registry.register(definition("", "Empty id"));
        registry.register(definition("???", "Normalizes to empty"));
        registry.register(definition("c", ""));
        registry.register(PanelDefinition {
            id: "d".into(),
            label: "No renderer".into(),
            renderer: None,
        });

        assert_eq!(ids(&registry), vec!["a"]);
        assert_eq!(registry.get("a").unwrap().label(), "A");
    }

    #[test]
    fn test_try_register_reports_reason() {
        let mut registry = PanelRegistry::new();
        assert_eq!(
            registry.try_register(definition("", "x")),
            Err(PanelError::EmptyId)
        );
        assert_eq!(
            registry.try_register(definition("c", "")),
            Err(PanelError::EmptyLabel("c".into()))
        );
        assert_eq!(
            registry.try_register(PanelDefinition {
                id: "D".into(),
                label: "x".into(),
                renderer: None,
            }),
            Err(PanelError::MissingRenderer("d".into()))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_labels_are_allowed() {
        let mut registry = PanelRegistry::new();
        registry.register(definition("a", "Same"));
        registry.register(definition("b", "Same"));
        assert_eq!(registry.len(), 2);
    }
}
