pub mod u601_import_export;

use crate::admin::module::PanelModule;

/// Встроенные модули панелей, в порядке регистрации
pub fn builtin_modules() -> Vec<Box<dyn PanelModule>> {
    vec![Box::new(u601_import_export::ImportExportModule)]
}
