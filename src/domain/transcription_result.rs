use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::audio_format::AudioFormat;

pub const DEFAULT_LANGUAGE: &str = "en-US";

/// The basic recognition mode reports no confidence, so successes carry this
/// fixed value.
pub const PLACEHOLDER_CONFIDENCE: f64 = 0.95;

/// Outcome of one transcription attempt.
///
/// `is_successful` is true exactly when `error_message` is absent. Instances
/// are built through [`TranscriptionResult::success`] and
/// [`TranscriptionResult::failure`]; deserialization rejects payloads that
/// break the invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTranscriptionResult")]
pub struct TranscriptionResult {
    transcribed_text: String,
    confidence: f64,
    duration_seconds: f64,
    language: String,
    audio_format: Option<AudioFormat>,
    is_successful: bool,
    error_message: Option<String>,
    timestamp: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTranscriptionResult {
    transcribed_text: String,
    confidence: f64,
    duration_seconds: f64,
    language: String,
    audio_format: Option<AudioFormat>,
    is_successful: bool,
    error_message: Option<String>,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
#[error("isSuccessful must be true exactly when errorMessage is absent")]
pub struct InconsistentResultError;

impl TryFrom<RawTranscriptionResult> for TranscriptionResult {
    type Error = InconsistentResultError;

    fn try_from(raw: RawTranscriptionResult) -> Result<Self, Self::Error> {
        if raw.is_successful == raw.error_message.is_some() {
            return Err(InconsistentResultError);
        }

        Ok(Self {
            transcribed_text: raw.transcribed_text,
            confidence: raw.confidence,
            duration_seconds: raw.duration_seconds,
            language: raw.language,
            audio_format: raw.audio_format,
            is_successful: raw.is_successful,
            error_message: raw.error_message,
            timestamp: raw.timestamp,
        })
    }
}

impl TranscriptionResult {
    pub fn success(text: impl Into<String>, duration_seconds: f64, format: AudioFormat) -> Self {
        Self {
            transcribed_text: text.into(),
            confidence: PLACEHOLDER_CONFIDENCE,
            duration_seconds: duration_seconds.max(0.0),
            language: DEFAULT_LANGUAGE.to_string(),
            audio_format: Some(format),
            is_successful: true,
            error_message: None,
            timestamp: Utc::now(),
        }
    }

    pub fn failure(message: impl Into<String>, format: Option<AudioFormat>) -> Self {
        Self {
            transcribed_text: String::new(),
            confidence: 0.0,
            duration_seconds: 0.0,
            language: DEFAULT_LANGUAGE.to_string(),
            audio_format: format,
            is_successful: false,
            error_message: Some(message.into()),
            timestamp: Utc::now(),
        }
    }

    pub fn transcribed_text(&self) -> &str {
        &self.transcribed_text
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn audio_format(&self) -> Option<AudioFormat> {
        self.audio_format
    }

    pub fn is_successful(&self) -> bool {
        self.is_successful
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
