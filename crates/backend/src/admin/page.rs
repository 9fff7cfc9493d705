//! Admin page controller: capability gate, tab strip, active panel dispatch.

use super::error::AdminError;
use super::notices::AdminNotice;
use super::panel::{Panel, RenderContext};
use super::registry::PanelRegistry;
use crate::routes::ASSETS_PATH;
use crate::shared::config::AdminConfig;
use crate::shared::html::{esc_html, url_with_query};
use crate::shared::sanitize::{sanitize_key, sanitize_text_field};

pub const EMPTY_STATE_MESSAGE: &str = "No panels registered yet.";

/// Resolve the active tab id from the raw `tab` query value.
///
/// The value is reduced to plain text and normalized to a key. When nothing
/// usable was requested the first registered panel wins; with no panels the
/// result is empty. A requested id is returned as-is even when no panel has
/// it, so the caller shows the empty state instead of another panel.
pub fn resolve_active_tab(raw: Option<&str>, panels: &[Panel]) -> String {
    let requested = raw
        .map(|r| sanitize_key(&sanitize_text_field(r)))
        .unwrap_or_default();

    if !requested.is_empty() {
        return requested;
    }

    panels
        .first()
        .map(|p| p.id().to_string())
        .unwrap_or_default()
}

/// One admin page view over a frozen registry
pub struct AdminPage<'a> {
    pub menu: &'a AdminConfig,
    pub registry: &'a PanelRegistry,
    pub notices: &'a [AdminNotice],
}

impl<'a> AdminPage<'a> {
    pub fn new(
        menu: &'a AdminConfig,
        registry: &'a PanelRegistry,
        notices: &'a [AdminNotice],
    ) -> Self {
        Self {
            menu,
            registry,
            notices,
        }
    }

    /// Link that opens this page with `id` as the active tab
    pub fn tab_url(&self, id: &str) -> String {
        url_with_query(
            &self.menu.admin_url,
            &[("page", self.menu.slug.as_str()), ("tab", sanitize_key(id).as_str())],
        )
    }

    /// Render the full document.
    ///
    /// The capability is checked before anything is written, and output is
    /// only returned once the whole page rendered, so a denial never leaks a
    /// partial page.
    pub fn render(
        &self,
        ctx: &RenderContext<'_>,
        requested_tab: Option<&str>,
    ) -> Result<String, AdminError> {
        if !ctx.user.can(&self.menu.capability) {
            tracing::warn!(
                "User '{}' lacks capability '{}' for admin page",
                ctx.user.username,
                self.menu.capability
            );
            return Err(AdminError::AccessDenied);
        }

        let panels = self.registry.list();
        let active = resolve_active_tab(requested_tab, panels);

        let mut out = String::with_capacity(4096);
        out.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
        out.push_str(&format!("<title>{}</title>", esc_html(&self.menu.page_title)));
        out.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{ASSETS_PATH}/admin.css\"></head><body>"
        ));

        for notice in self.notices {
            notice.render(&mut out);
        }

        out.push_str(&format!(
            "<div class=\"wrap\"><h1>{}</h1>",
            esc_html(&self.menu.page_title)
        ));
        self.render_tab_strip(panels, &active, &mut out);

        match self.registry.get(&active) {
            Some(panel) => {
                tracing::debug!("Rendering panel '{}'", panel.id());
                panel.render(ctx, &mut out)?;
            }
            None => {
                out.push_str(&format!("<p>{}</p>", esc_html(EMPTY_STATE_MESSAGE)));
            }
        }

        out.push_str("</div></body></html>");
        Ok(out)
    }

    fn render_tab_strip(&self, panels: &[Panel], active: &str, out: &mut String) {
        out.push_str("<h2 class=\"nav-tab-wrapper\">");
        for panel in panels {
            let class = if panel.id() == active {
                "nav-tab nav-tab-active"
            } else {
                "nav-tab"
            };
            out.push_str(&format!(
                "<a class=\"{}\" href=\"{}\">{}</a>",
                class,
                esc_html(&self.tab_url(panel.id())),
                esc_html(panel.label())
            ));
        }
        out.push_str("</h2>");
    }
}
