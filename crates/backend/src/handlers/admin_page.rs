use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use contracts::system::admin::PanelInfo;
use std::sync::Arc;

use crate::admin::error::AdminError;
use crate::app::AppState;
use crate::shared::sanitize::sanitize_key;
use crate::system::auth::extractor::CurrentUser;

/// Параметры страницы администратора
#[derive(Debug, Default, PartialEq)]
pub struct AdminPageQuery {
    pub page: Option<String>,
    pub tab: Option<String>,
}

impl AdminPageQuery {
    /// Build from raw query pairs; a repeated key keeps its last value
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => query.page = Some(value),
                "tab" => query.tab = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// GET /admin.php?page=<slug>&tab=<panel id>
///
/// Capability is enforced by the route layer before the query is looked at.
pub async fn show(
    State(state): State<Arc<AppState>>,
    CurrentUser(claims): CurrentUser,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AdminError> {
    let query = AdminPageQuery::from_pairs(pairs);

    let page = query.page.as_deref().map(sanitize_key).unwrap_or_default();
    if page != state.config.admin.slug {
        return Err(AdminError::PageNotFound(page));
    }

    let ctx = state.render_context(&claims);
    let html = state.admin_page().render(&ctx, query.tab.as_deref())?;

    Ok(Html(html))
}

/// GET /api/system/admin/panels
pub async fn list_panels(State(state): State<Arc<AppState>>) -> Json<Vec<PanelInfo>> {
    let page = state.admin_page();
    let panels = state
        .registry
        .list()
        .iter()
        .map(|panel| PanelInfo {
            id: panel.id().to_string(),
            label: panel.label().to_string(),
            url: page.tab_url(panel.id()),
        })
        .collect();

    Json(panels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_query_repeated_tab_keeps_last() {
        let query = AdminPageQuery::from_pairs(pairs(&[
            ("page", "revmura"),
            ("tab", "x"),
            ("tab", "import-export"),
        ]));
        assert_eq!(query.page.as_deref(), Some("revmura"));
        assert_eq!(query.tab.as_deref(), Some("import-export"));
    }

    #[test]
    fn test_query_ignores_unknown_keys() {
        let query = AdminPageQuery::from_pairs(pairs(&[("foo", "bar")]));
        assert_eq!(query, AdminPageQuery::default());
    }
}
