//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the client works out of the box
//! against a local API server.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the Event Hive API lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Unset means requests wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Placeholder cards shown while a list is loading.
    #[serde(default = "default_skeleton_cards")]
    pub skeleton_cards: usize,
    /// chrono format used for event dates on cards.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            skeleton_cards: default_skeleton_cards(),
            date_format: default_date_format(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Override for the session token file.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl SessionConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_session_path)
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_skeleton_cards() -> usize {
    6
}

fn default_date_format() -> String {
    "%b %d, %Y".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_dir() -> String {
    "~/.local/share/eventhive/logs".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_session_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eventhive")
        .join("session.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.ui.skeleton_cards, 6);
        assert!(config.logging.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://events.example.com"
            timeout_secs = 30

            [session]
            path = "/tmp/eventhive-session.toml"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://events.example.com");
        assert_eq!(config.api.timeout_secs, Some(30));
        assert_eq!(
            config.session.resolved_path(),
            PathBuf::from("/tmp/eventhive-session.toml")
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_round_trip_keeps_base_url() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.api.base_url, config.api.base_url);
    }
}
