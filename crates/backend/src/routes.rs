use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::app::AppState;
use crate::handlers;
use crate::system::auth::middleware::{require_auth, require_capability};
use crate::system::middleware::request_logger::request_logger;

/// URL prefix static admin assets are served under
pub const ASSETS_PATH: &str = "/assets";

/// Configure all application routes
pub fn configure_routes(state: Arc<AppState>) -> Router {
    // Всё ниже требует валидный токен и право администратора.
    // Право проверяется до разбора query.
    let protected = Router::new()
        .route(
            &state.config.admin.admin_url,
            get(handlers::admin_page::show).layer(middleware::from_fn_with_state(
                state.clone(),
                require_capability,
            )),
        )
        .route(
            "/api/system/admin/panels",
            get(handlers::admin_page::list_panels).layer(middleware::from_fn_with_state(
                state.clone(),
                require_capability,
            )),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(protected)
        .nest_service(ASSETS_PATH, ServeDir::new(&state.config.server.assets_dir))
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}
