//! Composition root: builds the frozen application state at bootstrap.

use std::sync::Arc;

use contracts::system::auth::TokenClaims;

use crate::admin::module::{register_modules, PanelModule};
use crate::admin::notices::{core_api_notices, AdminNotice};
use crate::admin::page::AdminPage;
use crate::admin::panel::RenderContext;
use crate::admin::registry::PanelRegistry;
use crate::shared::config::Config;
use crate::system::auth::jwt::JwtSecret;
use crate::system::auth::nonce::NonceIssuer;

/// Состояние, общее для всех запросов. Собирается один раз и больше не
/// меняется, поэтому обработчики читают его без блокировок.
pub struct AppState {
    pub config: Config,
    pub registry: PanelRegistry,
    pub jwt: JwtSecret,
    pub nonces: NonceIssuer,
    pub notices: Vec<AdminNotice>,
}

impl AppState {
    pub fn render_context<'a>(&'a self, user: &'a TokenClaims) -> RenderContext<'a> {
        RenderContext {
            user,
            capability: &self.config.admin.capability,
            nonces: &self.nonces,
            core: &self.config.core,
        }
    }

    pub fn admin_page(&self) -> AdminPage<'_> {
        AdminPage::new(&self.config.admin, &self.registry, &self.notices)
    }
}

/// Регистрация панелей всех модулей, затем заморозка реестра
pub fn bootstrap(config: Config, modules: &[Box<dyn PanelModule>]) -> Arc<AppState> {
    let mut registry = PanelRegistry::new();
    register_modules(&mut registry, modules);
    tracing::info!(
        "Admin page '{}' has {} panel(s): {:?}",
        config.admin.slug,
        registry.len(),
        registry.list().iter().map(|p| p.id()).collect::<Vec<_>>()
    );

    let jwt = JwtSecret::from_config(&config.auth);
    let nonces = NonceIssuer::new(jwt.clone(), config.auth.nonce_lifetime_hours);
    let notices = core_api_notices(&config.core);

    Arc::new(AppState {
        config,
        registry,
        jwt,
        nonces,
        notices,
    })
}
