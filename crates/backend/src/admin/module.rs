use super::registry::PanelRegistry;

/// A module that contributes panels to the admin page.
///
/// Called once per module during bootstrap, before any page is rendered.
pub trait PanelModule: Send + Sync {
    /// Имя для логов
    fn name(&self) -> &str;

    fn register_panels(&self, registry: &mut PanelRegistry);
}

/// Вызов хука регистрации каждого модуля по порядку
pub fn register_modules(registry: &mut PanelRegistry, modules: &[Box<dyn PanelModule>]) {
    for module in modules {
        let before = registry.len();
        module.register_panels(registry);
        tracing::info!(
            "Module '{}' registered {} new panel(s)",
            module.name(),
            registry.len() - before
        );
    }
}
