pub mod u601_import_export;
