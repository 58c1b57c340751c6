use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use serde::Deserialize;

use crate::application::ports::{
    AudioInputStream, CancellationReason, RecognitionOutcome, RecognizerError, SpeechRecognizer,
};
use crate::presentation::config::SpeechSettings;

const RECOGNITION_PATH: &str = "/speech/recognition/conversation/cognitiveservices/v1";
const AUDIO_CONTENT_TYPE: &str = "audio/wav; codecs=audio/pcm; samplerate=16000";

/// Azure Speech short-audio REST recognizer. The audio stream is forwarded
/// as a chunked request body.
pub struct AzureSpeechRecognizer {
    client: reqwest::Client,
    endpoint: String,
    subscription_key: String,
}

impl AzureSpeechRecognizer {
    pub fn new(subscription_key: &str, region: &str) -> Self {
        let base_url = format!("https://{}.stt.speech.microsoft.com", region);
        Self::with_base_url(subscription_key, &base_url)
    }

    pub fn with_base_url(subscription_key: &str, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), RECOGNITION_PATH),
            subscription_key: subscription_key.to_string(),
        }
    }

    pub fn from_settings(settings: &SpeechSettings) -> Result<Self, RecognizerError> {
        if settings.subscription_key.trim().is_empty() {
            return Err(RecognizerError::Configuration(
                "subscription key is empty".to_string(),
            ));
        }
        if settings.region.trim().is_empty() {
            return Err(RecognizerError::Configuration("region is empty".to_string()));
        }

        Ok(match settings.endpoint.as_deref() {
            Some(base_url) => Self::with_base_url(&settings.subscription_key, base_url),
            None => Self::new(&settings.subscription_key, &settings.region),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SimpleRecognitionResponse {
    recognition_status: String,
    #[serde(default)]
    display_text: Option<String>,
    /// 100-nanosecond ticks.
    #[serde(default)]
    duration: Option<u64>,
}

fn map_recognition_status(response: SimpleRecognitionResponse) -> RecognitionOutcome {
    match response.recognition_status.as_str() {
        "Success" => RecognitionOutcome::Recognized {
            text: response.display_text.unwrap_or_default().trim().to_string(),
            duration: Duration::from_nanos(response.duration.unwrap_or(0).saturating_mul(100)),
        },
        "NoMatch" | "InitialSilenceTimeout" | "BabbleTimeout" => RecognitionOutcome::NoMatch,
        "Error" => RecognitionOutcome::Canceled {
            reason: CancellationReason::Error,
            error_details: Some("recognition service reported an error".to_string()),
        },
        other => RecognitionOutcome::Other(other.to_string()),
    }
}

#[async_trait]
impl SpeechRecognizer for AzureSpeechRecognizer {
    async fn recognize_once(
        &self,
        audio: AudioInputStream,
        language: &str,
    ) -> Result<RecognitionOutcome, RecognizerError> {
        let body = reqwest::Body::wrap_stream(audio.map(Ok::<_, std::io::Error>));

        tracing::debug!(endpoint = %self.endpoint, language, "Sending audio to Azure Speech");

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("language", language), ("format", "simple")])
            .header("Ocp-Apim-Subscription-Key", &self.subscription_key)
            .header(reqwest::header::CONTENT_TYPE, AUDIO_CONTENT_TYPE)
            .header(reqwest::header::ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| RecognizerError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            tracing::warn!(status = %status, "Azure Speech rejected the request");
            return Ok(RecognitionOutcome::Canceled {
                reason: CancellationReason::Error,
                error_details: Some(format!("HTTP {}: {}", status, body)),
            });
        }

        let result: SimpleRecognitionResponse = response
            .json()
            .await
            .map_err(|e| RecognizerError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            status = %result.recognition_status,
            "Azure Speech recognition completed"
        );

        Ok(map_recognition_status(result))
    }
}
