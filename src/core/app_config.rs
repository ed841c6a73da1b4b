// Application Configuration
// YAML settings with compiled-in defaults (see src/config.yaml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE_NAME: &str = "user-desk.yaml";

/// Errors from loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Application-level configuration for user-desk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// User service connection
    pub gateway: GatewaySettings,

    /// UI and display settings
    pub ui: UiSettings,

    /// Log output
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySettings {
    /// Base URL of the user service; users live under `{base_url}/users`
    pub base_url: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Title shown in the navigation bar
    pub title: String,

    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,

    /// How long a banner stays visible, in milliseconds
    pub banner_ttl_ms: u64,

    /// Enable mouse support
    pub mouse_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file; stdout belongs to the terminal UI
    pub file: PathBuf,

    /// Default filter directive, overridden by RUST_LOG
    pub level: String,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_ms: 5000,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: "User Desk".to_string(),
            tick_rate_ms: 100,
            banner_ttl_ms: 4000,
            mouse_enabled: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("user-desk.log"),
            level: "info".to_string(),
        }
    }
}

impl GatewaySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn banner_ttl(&self) -> Duration {
        Duration::from_millis(self.banner_ttl_ms)
    }
}

impl AppConfig {
    /// Parse YAML; keys that are absent keep their defaults
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Load from `path`, or from `user-desk.yaml` in `dir` if present,
    /// or fall back to defaults
    pub fn load(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = dir.join(CONFIG_FILE_NAME);
                if !candidate.exists() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_yaml(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_config_matches_defaults() {
        let shipped = AppConfig::from_yaml(include_str!("../config.yaml")).unwrap();
        assert_eq!(shipped, AppConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = AppConfig::from_yaml("gateway:\n  base_url: http://users.internal:8080\n").unwrap();

        assert_eq!(config.gateway.base_url, "http://users.internal:8080");
        assert_eq!(config.gateway.timeout_ms, 5000);
        assert_eq!(config.ui, UiSettings::default());
    }

    #[test]
    fn test_missing_default_file_falls_back() {
        let dir = std::env::temp_dir().join("user-desk-config-test-missing");
        let config = AppConfig::load(None, &dir).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = std::env::temp_dir();
        let err = AppConfig::load(Some(Path::new("/nonexistent/user-desk.yaml")), &dir).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
