use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use super::audio_stream::{AudioInputStream, AudioStreamError};

/// A backend that turns a complete audio stream into text with a single
/// recognize-once call.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize_once(
        &self,
        audio: AudioInputStream,
        language: &str,
    ) -> Result<RecognitionOutcome, RecognizerError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionOutcome {
    Recognized { text: String, duration: Duration },
    NoMatch,
    Canceled {
        reason: CancellationReason,
        error_details: Option<String>,
    },
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationReason {
    Error,
    EndOfStream,
    CancelledByUser,
}

impl CancellationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CancellationReason::Error => "Error",
            CancellationReason::EndOfStream => "EndOfStream",
            CancellationReason::CancelledByUser => "CancelledByUser",
        }
    }
}

impl fmt::Display for CancellationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("recognizer configuration invalid: {0}")]
    Configuration(String),
    #[error("recognizer request failed: {0}")]
    RequestFailed(String),
    #[error("recognizer response invalid: {0}")]
    InvalidResponse(String),
    #[error(transparent)]
    Stream(#[from] AudioStreamError),
}
