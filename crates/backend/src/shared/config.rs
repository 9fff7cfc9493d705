use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub admin: AdminConfig,
    pub core: CoreConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub assets_dir: String,
}

/// Top-level admin menu page
#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    pub page_title: String,
    /// Capability required for every admin entry point
    pub capability: String,
    pub slug: String,
    /// Path the admin page is served under; tab links point here
    pub admin_url: String,
}

/// The external core component that owns the import/export REST API
#[derive(Debug, Deserialize, Clone)]
pub struct CoreConfig {
    pub rest_base: String,
    /// Version of the core API this deployment runs against
    #[serde(default)]
    pub api_version: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Shared HS256 secret. Empty means a random per-process secret.
    #[serde(default)]
    pub jwt_secret: String,
    pub nonce_lifetime_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000
assets_dir = "assets"

[admin]
page_title = "Revmura"
capability = "manage_options"
slug = "revmura"
admin_url = "/admin.php"

[core]
rest_base = "/wp-json"

[auth]
jwt_secret = ""
nonce_lifetime_hours = 12

[logging]
dir = "target/logs"
"#;

const CONFIG_ENV: &str = "REVMURA_CONFIG";

/// Load configuration from config.toml
///
/// Search order:
/// 1. `$REVMURA_CONFIG`
/// 2. Next to the executable (for production)
/// 3. Current working directory
/// 4. Falls back to embedded default config
/// Runs before tracing is initialized, so progress goes to stdout.
pub fn load_config() -> anyhow::Result<Config> {
    for path in candidate_paths() {
        if path.exists() {
            println!("Loading config from: {}", path.display());
            return load_from_path(&path);
        }
    }

    println!("Using default embedded configuration");
    default_config()
}

pub fn load_from_path(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn default_config() -> anyhow::Result<Config> {
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(explicit) = std::env::var(CONFIG_ENV) {
        paths.push(PathBuf::from(explicit));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("config.toml"));
        }
    }
    paths.push(PathBuf::from("config.toml"));

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.admin.slug, "revmura");
        assert_eq!(config.admin.capability, "manage_options");
        assert_eq!(config.admin.admin_url, "/admin.php");
        assert_eq!(config.core.rest_base, "/wp-json");
        assert!(config.core.api_version.is_none());
        assert!(config.auth.jwt_secret.is_empty());
        assert_eq!(config.auth.nonce_lifetime_hours, 12);
    }

    #[test]
    fn test_core_api_version_is_read() {
        let text = DEFAULT_CONFIG.replace(
            "rest_base = \"/wp-json\"",
            "rest_base = \"https://site.test/wp-json\"\napi_version = \"1.2.0\"",
        );
        let config: Config = toml::from_str(&text).unwrap();
        assert_eq!(config.core.api_version.as_deref(), Some("1.2.0"));
        assert_eq!(config.core.rest_base, "https://site.test/wp-json");
    }
}
