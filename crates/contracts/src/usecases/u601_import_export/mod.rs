use serde::{Deserialize, Serialize};

/// Configuration handed to the import/export client script.
///
/// Serialized as camelCase because it is read directly by JavaScript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportExportClientConfig {
    /// General API-session token, sent on every request
    pub rest_nonce: String,
    pub rest_nonce_header: String,
    /// Import action token, sent on dry-run and apply only
    pub action_nonce: String,
    pub action_nonce_header: String,
    pub export_url: String,
    pub dry_run_url: String,
    pub apply_url: String,
    /// Prompt shown before apply is sent
    pub confirm_apply: String,
}
