use std::sync::Arc;

use crate::application::ports::{
    CancellationReason, ContentFetcher, RecognitionOutcome, RecognizerError, SpeechRecognizer,
    parse_absolute_url, push_audio_stream,
};
use crate::domain::{
    AudioFormat, DEFAULT_LANGUAGE, TranscriptionResult, UploadedAudio, detect_audio_format,
};

const PUSH_CHUNK_SIZE: usize = 4096;

/// Normalises uploads, raw buffers and remote URLs into one recognition path.
///
/// Every failure is folded into an unsuccessful [`TranscriptionResult`]; none
/// of the entry points return an error.
pub struct TranscriptionService<R, F>
where
    R: SpeechRecognizer + ?Sized,
    F: ContentFetcher + ?Sized,
{
    recognizer: Arc<R>,
    fetcher: Arc<F>,
    language: String,
}

impl<R, F> TranscriptionService<R, F>
where
    R: SpeechRecognizer + ?Sized,
    F: ContentFetcher + ?Sized,
{
    pub fn new(recognizer: Arc<R>, fetcher: Arc<F>) -> Self {
        Self {
            recognizer,
            fetcher,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub async fn transcribe_from_upload(&self, file: Option<UploadedAudio>) -> TranscriptionResult {
        let file = match file {
            Some(f) if !f.is_empty() => f,
            _ => {
                tracing::warn!("Upload rejected: no audio file provided");
                return TranscriptionResult::failure("No audio file provided", None);
            }
        };

        tracing::info!(
            filename = file.file_name.as_deref().unwrap_or("unknown"),
            content_type = file.content_type.as_deref().unwrap_or("unknown"),
            bytes = file.len(),
            "Processing uploaded audio file"
        );

        self.recognize(&file.data, file.file_name.as_deref()).await
    }

    pub async fn transcribe_from_bytes(&self, data: &[u8]) -> TranscriptionResult {
        if data.is_empty() {
            return TranscriptionResult::failure("No audio data provided", None);
        }

        self.recognize(data, None).await
    }

    pub async fn transcribe_from_url(&self, url: &str) -> TranscriptionResult {
        if url.trim().is_empty() {
            return TranscriptionResult::failure("Video URL cannot be empty", None);
        }

        if let Err(e) = parse_absolute_url(url) {
            tracing::warn!(error = %e, "Rejected malformed URL");
            return TranscriptionResult::failure("Invalid URL format", None);
        }

        tracing::info!("Downloading content from URL");

        let data = match self.fetcher.fetch(url.trim()).await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(error = %e, "Download failed");
                return TranscriptionResult::failure(
                    format!("Failed to download from URL: {}", e),
                    None,
                );
            }
        };

        if data.is_empty() {
            tracing::warn!("Download returned an empty body");
            return TranscriptionResult::failure("Failed to download audio content from URL", None);
        }

        tracing::info!(bytes = data.len(), "Downloaded content from URL");

        self.transcribe_from_bytes(&data).await
    }

    async fn recognize(&self, data: &[u8], filename: Option<&str>) -> TranscriptionResult {
        let format = detect_audio_format(data, filename);
        tracing::info!(format = %format, bytes = data.len(), "Transcribing audio");

        match self.run_recognition(data).await {
            Ok(outcome) => Self::map_outcome(outcome, format),
            Err(e) => {
                tracing::error!(format = %format, error = %e, "Audio transcription failed");
                TranscriptionResult::failure(
                    format!("Transcription failed for {}: {}", format, e),
                    Some(format),
                )
            }
        }
    }

    async fn run_recognition(&self, data: &[u8]) -> Result<RecognitionOutcome, RecognizerError> {
        let (mut push, input) = push_audio_stream();
        for chunk in data.chunks(PUSH_CHUNK_SIZE) {
            push.write(chunk)?;
        }
        push.close();

        let outcome = self.recognizer.recognize_once(input, &self.language).await?;
        tracing::info!(outcome = %outcome_label(&outcome), "Recognition completed");
        Ok(outcome)
    }

    fn map_outcome(outcome: RecognitionOutcome, format: AudioFormat) -> TranscriptionResult {
        match outcome {
            RecognitionOutcome::Recognized { text, duration } => {
                TranscriptionResult::success(text, duration.as_secs_f64(), format)
            }
            RecognitionOutcome::NoMatch => {
                TranscriptionResult::failure("No speech detected in audio", Some(format))
            }
            RecognitionOutcome::Canceled {
                reason,
                error_details,
            } => {
                tracing::warn!(
                    format = %format,
                    reason = %reason,
                    details = error_details.as_deref().unwrap_or(""),
                    "Speech recognition canceled"
                );
                let message = match (reason, error_details) {
                    (CancellationReason::Error, Some(details)) => {
                        format!("Recognition canceled due to error: {}", details)
                    }
                    (reason, _) => format!("Recognition canceled: {}", reason),
                };
                TranscriptionResult::failure(message, Some(format))
            }
            RecognitionOutcome::Other(code) => {
                TranscriptionResult::failure(format!("Unexpected result: {}", code), Some(format))
            }
        }
    }
}

fn outcome_label(outcome: &RecognitionOutcome) -> &str {
    match outcome {
        RecognitionOutcome::Recognized { .. } => "RecognizedSpeech",
        RecognitionOutcome::NoMatch => "NoMatch",
        RecognitionOutcome::Canceled { .. } => "Canceled",
        RecognitionOutcome::Other(code) => code,
    }
}
