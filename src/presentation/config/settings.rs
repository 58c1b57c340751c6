use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use config::Environment as EnvironmentSource;
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub speech: SpeechSettings,
    pub download: DownloadSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_size_bytes: usize,
    #[serde(default)]
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub subscription_key: String,
    pub region: String,
    #[serde(default)]
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DownloadSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("missing required setting: {0}")]
    Missing(&'static str),
}

impl Settings {
    /// Defaults, then `appsettings.{environment}` if present, then
    /// `APP_<SECTION>__<KEY>` environment variables.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let config = Self::builder()?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.settings_suffix()))
                    .required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// Builder pre-populated with every optional setting's default.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, SettingsError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.max_upload_size_bytes", 100 * 1024 * 1024)?
            .set_default("download.timeout_secs", 600)?
            .set_default(
                "download.user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?)
    }

    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.speech.subscription_key.trim().is_empty() {
            return Err(SettingsError::Missing("speech.subscription_key"));
        }
        if self.speech.region.trim().is_empty() {
            return Err(SettingsError::Missing("speech.region"));
        }
        Ok(())
    }
}
