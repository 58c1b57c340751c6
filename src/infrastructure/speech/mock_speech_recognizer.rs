use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{
    AudioInputStream, CancellationReason, RecognitionOutcome, RecognizerError, SpeechRecognizer,
};

/// Recognizer double that replays a canned outcome and records what it was fed.
pub struct MockSpeechRecognizer {
    response: Result<RecognitionOutcome, String>,
    calls: AtomicUsize,
    last_audio: Mutex<Option<Vec<u8>>>,
    last_language: Mutex<Option<String>>,
}

impl MockSpeechRecognizer {
    pub fn with_outcome(outcome: RecognitionOutcome) -> Self {
        Self::build(Ok(outcome))
    }

    pub fn recognized(text: &str, duration: Duration) -> Self {
        Self::with_outcome(RecognitionOutcome::Recognized {
            text: text.to_string(),
            duration,
        })
    }

    pub fn no_match() -> Self {
        Self::with_outcome(RecognitionOutcome::NoMatch)
    }

    pub fn canceled(reason: CancellationReason, error_details: Option<&str>) -> Self {
        Self::with_outcome(RecognitionOutcome::Canceled {
            reason,
            error_details: error_details.map(String::from),
        })
    }

    pub fn failing(message: &str) -> Self {
        Self::build(Err(message.to_string()))
    }

    fn build(response: Result<RecognitionOutcome, String>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            last_audio: Mutex::new(None),
            last_language: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn last_audio(&self) -> Option<Vec<u8>> {
        self.last_audio.lock().await.clone()
    }

    pub async fn last_language(&self) -> Option<String> {
        self.last_language.lock().await.clone()
    }
}

#[async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    async fn recognize_once(
        &self,
        audio: AudioInputStream,
        language: &str,
    ) -> Result<RecognitionOutcome, RecognizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let received = audio.read_to_end().await;
        *self.last_audio.lock().await = Some(received);
        *self.last_language.lock().await = Some(language.to_string());

        self.response
            .clone()
            .map_err(RecognizerError::RequestFailed)
    }
}
