use std::panic::AssertUnwindSafe;

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::FutureExt;

use crate::application::ports::{ContentFetcher, SpeechRecognizer};
use crate::domain::UploadedAudio;
use crate::presentation::state::AppState;

use super::panic_message;

pub const AUDIO_FILE_FIELD: &str = "audioFile";

const PROCESSING_ERROR: &str = "Error processing audio file";

#[tracing::instrument(skip_all)]
pub async fn upload_handler<R, F>(
    State(state): State<AppState<R, F>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    R: SpeechRecognizer + ?Sized + 'static,
    F: ContentFetcher + ?Sized + 'static,
{
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Upload request is not multipart");
            return (StatusCode::BAD_REQUEST, "No audio file uploaded.").into_response();
        }
    };

    let file = match read_audio_field(&mut multipart).await {
        Ok(Some(file)) if !file.is_empty() => file,
        Ok(_) => {
            tracing::warn!("Upload request with no audio file");
            return (StatusCode::BAD_REQUEST, "No audio file uploaded.").into_response();
        }
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::warn!(error = %e, "Upload exceeds body limit");
            return (StatusCode::PAYLOAD_TOO_LARGE, e.body_text()).into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart body");
            return (StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_ERROR).into_response();
        }
    };

    tracing::info!(
        filename = file.file_name.as_deref().unwrap_or("unknown"),
        bytes = file.len(),
        "Processing audio file"
    );

    let outcome = AssertUnwindSafe(state.transcription_service.transcribe_from_upload(Some(file)))
        .catch_unwind()
        .await;

    match outcome {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(panic) => {
            tracing::error!(error = %panic_message(&*panic), "Error processing audio file");
            (StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_ERROR).into_response()
        }
    }
}

/// Picks the `audioFile` field, or failing that the first field that carries
/// a filename.
async fn read_audio_field(
    multipart: &mut Multipart,
) -> Result<Option<UploadedAudio>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AUDIO_FILE_FIELD) && field.file_name().is_none() {
            continue;
        }

        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let data = field.bytes().await?;

        return Ok(Some(UploadedAudio::new(file_name, content_type, data)));
    }

    Ok(None)
}
