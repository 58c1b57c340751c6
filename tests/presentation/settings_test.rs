use transcription_api::presentation::config::{Settings, SettingsError};

fn with_speech(key: &str, region: &str) -> config::Config {
    Settings::builder()
        .unwrap()
        .set_override("speech.subscription_key", key)
        .unwrap()
        .set_override("speech.region", region)
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn given_only_speech_credentials_when_loading_then_defaults_fill_the_rest() {
    let settings = Settings::from_config(with_speech("key", "westeurope")).unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.server.max_upload_size_bytes, 100 * 1024 * 1024);
    assert!(settings.server.static_dir.is_none());
    assert_eq!(settings.download.timeout_secs, 600);
    assert!(settings.download.user_agent.starts_with("Mozilla/5.0"));
    assert_eq!(settings.logging.level, "info");
    assert!(!settings.logging.enable_json);
    assert_eq!(settings.speech.region, "westeurope");
    assert!(settings.speech.endpoint.is_none());
}

#[test]
fn given_missing_speech_section_when_loading_then_fails() {
    let config = Settings::builder().unwrap().build().unwrap();

    let result = Settings::from_config(config);

    assert!(matches!(result, Err(SettingsError::Load(_))));
}

#[test]
fn given_blank_subscription_key_when_loading_then_reports_missing_key() {
    let result = Settings::from_config(with_speech("  ", "westeurope"));

    assert!(matches!(
        result,
        Err(SettingsError::Missing("speech.subscription_key"))
    ));
}

#[test]
fn given_blank_region_when_loading_then_reports_missing_region() {
    let result = Settings::from_config(with_speech("key", ""));

    assert!(matches!(result, Err(SettingsError::Missing("speech.region"))));
}
