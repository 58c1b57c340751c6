use std::sync::Arc;

use crate::application::ports::{ContentFetcher, SpeechRecognizer};
use crate::application::services::TranscriptionService;
use crate::presentation::config::ServerSettings;

pub struct AppState<R, F>
where
    R: SpeechRecognizer + ?Sized,
    F: ContentFetcher + ?Sized,
{
    pub transcription_service: Arc<TranscriptionService<R, F>>,
    pub server: ServerSettings,
}

impl<R, F> Clone for AppState<R, F>
where
    R: SpeechRecognizer + ?Sized,
    F: ContentFetcher + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            server: self.server.clone(),
        }
    }
}
