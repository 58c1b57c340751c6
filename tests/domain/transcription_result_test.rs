use transcription_api::domain::{
    AudioFormat, DEFAULT_LANGUAGE, PLACEHOLDER_CONFIDENCE, TranscriptionResult,
};

#[test]
fn given_success_when_constructed_then_has_no_error_and_placeholder_confidence() {
    let result = TranscriptionResult::success("hello world", 1.2, AudioFormat::Wav);

    assert!(result.is_successful());
    assert!(result.error_message().is_none());
    assert_eq!(result.transcribed_text(), "hello world");
    assert_eq!(result.confidence(), PLACEHOLDER_CONFIDENCE);
    assert_eq!(result.duration_seconds(), 1.2);
    assert_eq!(result.language(), DEFAULT_LANGUAGE);
    assert_eq!(result.audio_format(), Some(AudioFormat::Wav));
}

#[test]
fn given_failure_when_constructed_then_text_is_empty_and_error_is_set() {
    let result = TranscriptionResult::failure("No speech detected in audio", Some(AudioFormat::Mp3));

    assert!(!result.is_successful());
    assert_eq!(result.error_message(), Some("No speech detected in audio"));
    assert_eq!(result.transcribed_text(), "");
    assert_eq!(result.audio_format(), Some(AudioFormat::Mp3));
}

#[test]
fn given_negative_duration_when_constructing_success_then_clamps_to_zero() {
    let result = TranscriptionResult::success("hi", -3.0, AudioFormat::Flac);

    assert_eq!(result.duration_seconds(), 0.0);
}

#[test]
fn given_result_when_serialized_then_uses_camel_case_fields() {
    let result = TranscriptionResult::failure("boom", None);

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["isSuccessful"], false);
    assert_eq!(json["errorMessage"], "boom");
    assert_eq!(json["transcribedText"], "");
    assert_eq!(json["language"], "en-US");
    assert!(json["audioFormat"].is_null());
    assert!(json.get("durationSeconds").is_some());
    assert!(json.get("timestamp").is_some());
}

#[test]
fn given_successful_result_when_serialized_then_format_is_lowercase_label() {
    let result = TranscriptionResult::success("hi", 0.5, AudioFormat::Opus);

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["audioFormat"], "opus");
    assert!(json["errorMessage"].is_null());
}

#[test]
fn given_result_when_serialized_and_parsed_back_then_equals_original() {
    let original = TranscriptionResult::success("hello world", 1.2, AudioFormat::Wav);

    let json = serde_json::to_string(&original).unwrap();
    let parsed: TranscriptionResult = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, original);
}

#[test]
fn given_success_flag_with_error_message_when_parsing_then_rejects() {
    let json = r#"{
        "transcribedText": "hello",
        "confidence": 0.95,
        "durationSeconds": 1.0,
        "language": "en-US",
        "audioFormat": "wav",
        "isSuccessful": true,
        "errorMessage": "boom",
        "timestamp": "2026-01-01T00:00:00Z"
    }"#;

    let parsed = serde_json::from_str::<TranscriptionResult>(json);

    assert!(parsed.is_err());
}

#[test]
fn given_failure_flag_without_error_message_when_parsing_then_rejects() {
    let json = r#"{
        "transcribedText": "",
        "confidence": 0.0,
        "durationSeconds": 0.0,
        "language": "en-US",
        "audioFormat": null,
        "isSuccessful": false,
        "errorMessage": null,
        "timestamp": "2026-01-01T00:00:00Z"
    }"#;

    let parsed = serde_json::from_str::<TranscriptionResult>(json);

    assert!(parsed.is_err());
}

#[test]
fn given_failure_when_serialized_and_parsed_back_then_equals_original() {
    let original = TranscriptionResult::failure("No speech detected in audio", None);

    let json = serde_json::to_string(&original).unwrap();
    let parsed: TranscriptionResult = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, original);
}
