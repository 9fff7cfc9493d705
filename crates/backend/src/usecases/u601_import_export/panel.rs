use anyhow::Context;
use contracts::usecases::u601_import_export::ImportExportClientConfig;

use super::endpoints::{CoreEndpoints, IMPORT_NONCE_ACTION, IMPORT_NONCE_HEADER};
use crate::admin::panel::{PanelRenderer, RenderContext, RenderError};
use crate::routes::ASSETS_PATH;
use crate::shared::html::{esc_html, inline_json};
use crate::system::auth::nonce::{REST_NONCE_ACTION, REST_NONCE_HEADER};

pub const CONFIRM_APPLY: &str = "Apply import? This will modify CPT/Tax and flush rewrites.";

/// Глобальная переменная с конфигурацией клиентского скрипта
const CLIENT_CONFIG_GLOBAL: &str = "revmuraImportExport";

/// Renders the JSON text area and the export / dry-run / apply buttons.
/// The requests themselves are issued by `import-export.js` in the browser.
pub struct ImportExportPanel;

impl ImportExportPanel {
    pub fn client_config(ctx: &RenderContext<'_>) -> anyhow::Result<ImportExportClientConfig> {
        let user_id = &ctx.user.sub;
        let endpoints = CoreEndpoints::from_config(ctx.core);

        Ok(ImportExportClientConfig {
            rest_nonce: ctx.nonces.issue(user_id, REST_NONCE_ACTION)?,
            rest_nonce_header: REST_NONCE_HEADER.to_string(),
            action_nonce: ctx.nonces.issue(user_id, IMPORT_NONCE_ACTION)?,
            action_nonce_header: IMPORT_NONCE_HEADER.to_string(),
            export_url: endpoints.export,
            dry_run_url: endpoints.dry_run,
            apply_url: endpoints.apply,
            confirm_apply: CONFIRM_APPLY.to_string(),
        })
    }
}

impl PanelRenderer for ImportExportPanel {
    fn render(&self, ctx: &RenderContext<'_>, out: &mut String) -> Result<(), RenderError> {
        // Панель может вызываться и мимо контроллера страницы, поэтому проверяет право сама
        if !ctx.user_can_manage() {
            return Err(RenderError::AccessDenied);
        }

        let config = Self::client_config(ctx)?;
        let config_js = inline_json(&config).context("Failed to serialize import/export config")?;

        out.push_str(&format!(
            "<div class=\"wrap\"><h2>{}</h2>",
            esc_html("Import / Export")
        ));
        out.push_str(&format!(
            "<p>{}</p>",
            esc_html("Export current CPT/Tax schema or dry-run/apply an import JSON.")
        ));
        out.push_str(&format!(
            "<p><button type=\"button\" class=\"button\" id=\"revmura-ie-export\">{}</button> \
             <button type=\"button\" class=\"button button-secondary\" id=\"revmura-ie-dry\">{}</button> \
             <button type=\"button\" class=\"button button-primary\" id=\"revmura-ie-apply\">{}</button></p>",
            esc_html("Export to JSON"),
            esc_html("Dry-run Import"),
            esc_html("Apply Import"),
        ));
        out.push_str("<textarea id=\"revmura-ie-json\" rows=\"16\" style=\"width:100%;\"></textarea>");
        out.push_str(&format!(
            "<script>window.{CLIENT_CONFIG_GLOBAL} = {config_js};</script>"
        ));
        out.push_str(&format!(
            "<script src=\"{ASSETS_PATH}/import-export.js\"></script>"
        ));
        out.push_str("</div>");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;
    use crate::system::auth::jwt::JwtSecret;
    use crate::system::auth::nonce::NonceIssuer;
    use contracts::system::auth::TokenClaims;

    fn user(is_admin: bool) -> TokenClaims {
        TokenClaims {
            sub: "9".into(),
            username: "ops".into(),
            is_admin,
            capabilities: vec![],
            exp: 0,
            iat: 0,
        }
    }

    fn extract_config(html: &str) -> ImportExportClientConfig {
        let prefix = format!("<script>window.{CLIENT_CONFIG_GLOBAL} = ");
        let start = html.find(&prefix).unwrap() + prefix.len();
        let end = start + html[start..].find(";</script>").unwrap();
        serde_json::from_str(&html[start..end]).unwrap()
    }

    #[test]
    fn test_render_embeds_nonces_and_endpoints() {
        let config = default_config().unwrap();
        let nonces = NonceIssuer::new(JwtSecret::new("ie-tests"), 12);
        let admin = user(true);
        let ctx = RenderContext {
            user: &admin,
            capability: &config.admin.capability,
            nonces: &nonces,
            core: &config.core,
        };

        let mut out = String::new();
        ImportExportPanel.render(&ctx, &mut out).unwrap();

        assert!(out.contains("id=\"revmura-ie-export\""));
        assert!(out.contains("id=\"revmura-ie-dry\""));
        assert!(out.contains("id=\"revmura-ie-apply\""));
        assert!(out.contains("<textarea id=\"revmura-ie-json\""));
        assert!(out.contains("<script src=\"/assets/import-export.js\"></script>"));

        let client = extract_config(&out);
        assert_eq!(client.export_url, "/wp-json/revmura/v1/export");
        assert_eq!(client.dry_run_url, "/wp-json/revmura/v1/import/dry-run");
        assert_eq!(client.apply_url, "/wp-json/revmura/v1/import/apply");
        assert_eq!(client.rest_nonce_header, "X-WP-Nonce");
        assert_eq!(client.action_nonce_header, "X-Revmura-Nonce");
        assert_eq!(client.confirm_apply, CONFIRM_APPLY);
        assert!(nonces.verify(&client.rest_nonce, "9", REST_NONCE_ACTION).is_ok());
        assert!(nonces
            .verify(&client.action_nonce, "9", IMPORT_NONCE_ACTION)
            .is_ok());
        assert!(nonces
            .verify(&client.action_nonce, "9", REST_NONCE_ACTION)
            .is_err());
    }

    #[test]
    fn test_render_denies_without_capability() {
        let config = default_config().unwrap();
        let nonces = NonceIssuer::new(JwtSecret::new("ie-tests"), 12);
        let subscriber = user(false);
        let ctx = RenderContext {
            user: &subscriber,
            capability: &config.admin.capability,
            nonces: &nonces,
            core: &config.core,
        };

        let mut out = String::new();
        let result = ImportExportPanel.render(&ctx, &mut out);

        assert!(matches!(result, Err(RenderError::AccessDenied)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_core_url_cannot_break_out_of_script() {
        let mut config = default_config().unwrap();
        config.core.rest_base = "/x</script><script>alert(1)//".into();
        let nonces = NonceIssuer::new(JwtSecret::new("ie-tests"), 12);
        let admin = user(true);
        let ctx = RenderContext {
            user: &admin,
            capability: &config.admin.capability,
            nonces: &nonces,
            core: &config.core,
        };

        let mut out = String::new();
        ImportExportPanel.render(&ctx, &mut out).unwrap();

        assert_eq!(out.matches("</script>").count(), 2);
    }
}
