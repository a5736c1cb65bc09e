//! Runtime configuration.
//!
//! The host page may define `window.MARKWATCH_CONFIG` (a JSON string or
//! object). Every field is optional and falls back to its default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the admin page keeps its user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminBackend {
    /// Every mutation goes through the backend API.
    #[default]
    Remote,
    /// Table lives only in page memory, seeded with demo users.
    InMemory,
}

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("notification_ms must be greater than zero")]
    ZeroNotificationTime,

    /// The value could not be turned into JSON text.
    #[error("config value is not serializable: {0}")]
    Unserializable(String),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the backend. `None` means the page origin.
    pub api_base: Option<String>,
    /// `tracing` level for the console logger.
    pub log_level: String,
    /// How long notifications stay visible.
    pub notification_ms: u32,
    pub admin_backend: AdminBackend,
    /// Fire the date picker's change callback when it is cleared.
    pub emit_change_on_clear: bool,
    /// Require batch and year before a client-dataset upload.
    pub client_upload_gate: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            log_level: "info".to_owned(),
            notification_ms: 3000,
            admin_backend: AdminBackend::Remote,
            emit_change_on_clear: false,
            client_upload_gate: true,
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or mistyped
    /// fields and [`ConfigError::ZeroNotificationTime`] when
    /// `notification_ms` is zero.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        if config.notification_ms == 0 {
            return Err(ConfigError::ZeroNotificationTime);
        }
        Ok(config)
    }

    #[must_use]
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.notification_ms))
    }

    /// `api_base` without a trailing slash, or `origin` when unset.
    #[must_use]
    pub fn resolve_base<'a>(&'a self, origin: &'a str) -> &'a str {
        self.api_base
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or(origin)
            .trim_end_matches('/')
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.notification_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn partial_object_overrides_named_fields() {
        let config =
            AppConfig::from_json(r#"{"admin_backend": "in_memory", "log_level": "debug"}"#)
                .unwrap();
        assert_eq!(config.admin_backend, AdminBackend::InMemory);
        assert_eq!(config.log_level, "debug");
        assert!(config.client_upload_gate);
    }

    #[test]
    fn zero_notification_time_is_rejected() {
        let err = AppConfig::from_json(r#"{"notification_ms": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroNotificationTime));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            AppConfig::from_json("{not json").unwrap_err(),
            ConfigError::Json(_)
        ));
    }

    #[test]
    fn base_falls_back_to_origin() {
        let mut config = AppConfig::default();
        assert_eq!(config.resolve_base("http://localhost:5000"), "http://localhost:5000");
        config.api_base = Some("https://api.example.com/".into());
        assert_eq!(config.resolve_base("http://x"), "https://api.example.com");
    }
}
