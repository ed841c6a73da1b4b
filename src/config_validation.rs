// Configuration validation module

use std::path::Path;

use crate::core::app_config::{AppConfig, ConfigError};

/// Reject settings the application cannot run with
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let base_url = config.gateway.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::Invalid(format!(
            "gateway.base_url must start with http:// or https://, got '{}'",
            base_url
        )));
    }

    let positive = [
        ("gateway.timeout_ms", config.gateway.timeout_ms),
        ("ui.tick_rate_ms", config.ui.tick_rate_ms),
        ("ui.banner_ttl_ms", config.ui.banner_ttl_ms),
    ];
    for (key, value) in positive {
        if value == 0 {
            return Err(ConfigError::Invalid(format!("{} must be greater than zero", key)));
        }
    }

    Ok(())
}

/// Load configuration and validate it
pub fn load_and_validate_config(path: Option<&Path>, dir: &Path) -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load(path, dir)?;
    validate_config(&config)?;
    Ok(config)
}
