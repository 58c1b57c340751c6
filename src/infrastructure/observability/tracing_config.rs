use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl TracingConfig {
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: logging.enable_json,
            default_filter: format!(
                "{level},transcription_api={level},tower_http=debug",
                level = logging.level
            ),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            default_filter: "info,transcription_api=debug,tower_http=debug".to_string(),
        }
    }
}
