use serde::{Deserialize, Serialize};

/// One registered admin panel as exposed by `GET /api/system/admin/panels`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PanelInfo {
    pub id: String,
    pub label: String,
    /// Link that opens the admin page with this panel active
    pub url: String,
}
