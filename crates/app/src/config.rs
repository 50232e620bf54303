use shared_types::AppConfig;
use std::sync::OnceLock;
use tracing::{info, warn};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` at the workspace root, embedded at build time so the web
/// build can read it without filesystem access.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse config contents, falling back to defaults when they are invalid.
fn parse_or_default(contents: &str) -> AppConfig {
    match AppConfig::from_toml_str(contents) {
        Ok(config) => {
            info!(base_url = %config.api.base_url, features = ?config.features, "loaded config");
            config
        }
        Err(e) => {
            warn!(error = %e, "invalid config.toml, using defaults");
            AppConfig::default()
        }
    }
}

/// The loaded configuration. Parsed on first use; later calls are free.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| parse_or_default(CONFIG_TOML))
}
