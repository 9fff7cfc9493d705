//! Built-in Import/Export panel: drives the core's export, dry-run and apply
//! REST endpoints from the browser.

pub mod endpoints;
pub mod panel;

use crate::admin::module::PanelModule;
use crate::admin::panel::PanelDefinition;
use crate::admin::registry::PanelRegistry;

pub use panel::ImportExportPanel;

pub const PANEL_ID: &str = "import-export";
pub const PANEL_LABEL: &str = "Import/Export";

pub struct ImportExportModule;

impl PanelModule for ImportExportModule {
    fn name(&self) -> &str {
        "u601_import_export"
    }

    fn register_panels(&self, registry: &mut PanelRegistry) {
        registry.register(PanelDefinition::new(PANEL_ID, PANEL_LABEL, ImportExportPanel));
    }
}
