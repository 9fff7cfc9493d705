pub mod config;
pub mod html;
pub mod sanitize;
pub mod version;
