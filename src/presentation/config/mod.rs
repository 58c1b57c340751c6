mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DownloadSettings, LoggingSettings, ServerSettings, Settings, SettingsError, SpeechSettings,
};
