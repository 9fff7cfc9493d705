//! Admin page shell: panel registry, tab resolution and page rendering.

pub mod error;
pub mod module;
pub mod notices;
pub mod page;
pub mod panel;
pub mod registry;
