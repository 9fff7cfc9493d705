use crate::shared::config::CoreConfig;
use crate::shared::html::esc_html;
use crate::shared::version::is_at_least;

/// Oldest core API the import/export panel can talk to
pub const MIN_CORE_API_VERSION: &str = "1.0.0";
pub const CORE_API_NOTICE: &str = "Revmura Manager: Core API too old or missing.";

/// Error notice shown above the admin page on every view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminNotice {
    pub message: String,
}

impl AdminNotice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn render(&self, out: &mut String) {
        out.push_str(&format!(
            "<div class=\"notice notice-error\"><p>{}</p></div>",
            esc_html(&self.message)
        ));
    }
}

/// Notices derived from the declared core API version.
/// The shell keeps working without a compatible core; it only warns.
pub fn core_api_notices(core: &CoreConfig) -> Vec<AdminNotice> {
    let compatible = core
        .api_version
        .as_deref()
        .map(|v| is_at_least(v, MIN_CORE_API_VERSION))
        .unwrap_or(false);

    if compatible {
        Vec::new()
    } else {
        tracing::warn!(
            "Core API version {:?} is missing or older than {}",
            core.api_version,
            MIN_CORE_API_VERSION
        );
        vec![AdminNotice::error(CORE_API_NOTICE)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core(version: Option<&str>) -> CoreConfig {
        CoreConfig {
            rest_base: "/wp-json".into(),
            api_version: version.map(String::from),
        }
    }

    #[test]
    fn test_missing_core_version_raises_notice() {
        assert_eq!(
            core_api_notices(&core(None)),
            vec![AdminNotice::error(CORE_API_NOTICE)]
        );
    }

    #[test]
    fn test_old_core_version_raises_notice() {
        assert_eq!(core_api_notices(&core(Some("0.9.0"))).len(), 1);
    }

    #[test]
    fn test_compatible_core_version_has_no_notice() {
        assert!(core_api_notices(&core(Some("1.0.0"))).is_empty());
        assert!(core_api_notices(&core(Some("2.1"))).is_empty());
    }

    #[test]
    fn test_notice_markup() {
        let mut out = String::new();
        AdminNotice::error("Broken").render(&mut out);
        assert_eq!(out, "<div class=\"notice notice-error\"><p>Broken</p></div>");
    }
}
