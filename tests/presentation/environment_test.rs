use transcription_api::presentation::config::Environment;

#[test]
fn given_known_names_when_parsing_environment_then_accepts_any_case() {
    assert_eq!(Environment::try_from("LOCAL".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("production".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_returns_error() {
    let result = Environment::try_from("staging".to_string());

    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_environment_when_resolving_settings_file_then_suffix_is_lowercase() {
    assert_eq!(Environment::Local.settings_suffix(), "local");
    assert_eq!(Environment::Prod.settings_suffix(), "prod");
}

#[test]
fn given_name_with_surrounding_whitespace_when_parsing_environment_then_trims() {
    assert_eq!(Environment::try_from(" prod\n".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_environment_when_displayed_then_uses_capitalised_name() {
    assert_eq!(Environment::Test.to_string(), "Test");
    assert_eq!(Environment::Local.as_str(), "Local");
}
