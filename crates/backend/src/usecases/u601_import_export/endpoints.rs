use crate::shared::config::CoreConfig;

/// REST namespace ядра
pub const REST_NAMESPACE: &str = "revmura/v1";

/// Действие токена для эндпоинтов импорта
pub const IMPORT_NONCE_ACTION: &str = "revmura_import";
/// Заголовок, из которого ядро читает токен импорта
pub const IMPORT_NONCE_HEADER: &str = "X-Revmura-Nonce";

/// Absolute or root-relative URLs of the core import/export endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreEndpoints {
    /// GET
    pub export: String,
    /// POST, тело - JSON импорта
    pub dry_run: String,
    /// POST, тело - JSON импорта
    pub apply: String,
}

impl CoreEndpoints {
    pub fn from_config(core: &CoreConfig) -> Self {
        Self {
            export: rest_url(&core.rest_base, "export"),
            dry_run: rest_url(&core.rest_base, "import/dry-run"),
            apply: rest_url(&core.rest_base, "import/apply"),
        }
    }
}

fn rest_url(rest_base: &str, route: &str) -> String {
    format!("{}/{}/{}", rest_base.trim_end_matches('/'), REST_NAMESPACE, route)
}
