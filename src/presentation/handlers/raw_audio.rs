use std::panic::AssertUnwindSafe;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::FutureExt;

use crate::application::ports::{ContentFetcher, SpeechRecognizer};
use crate::presentation::state::AppState;

use super::panic_message;
use super::transcribe::ServerErrorResponse;

/// Transcribes the raw request body.
#[tracing::instrument(skip_all, fields(bytes = body.len()))]
pub async fn raw_audio_handler<R, F>(State(state): State<AppState<R, F>>, body: Bytes) -> Response
where
    R: SpeechRecognizer + ?Sized + 'static,
    F: ContentFetcher + ?Sized + 'static,
{
    let outcome = AssertUnwindSafe(state.transcription_service.transcribe_from_bytes(&body))
        .catch_unwind()
        .await;

    match outcome {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(panic) => {
            let details = panic_message(&*panic);
            tracing::error!(error = %details, "Error processing audio bytes");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ServerErrorResponse {
                    message: "Error processing audio data".to_string(),
                    details,
                }),
            )
                .into_response()
        }
    }
}
