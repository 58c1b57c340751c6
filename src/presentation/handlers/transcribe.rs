use std::panic::AssertUnwindSafe;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::FutureExt;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ContentFetcher, SpeechRecognizer};
use crate::infrastructure::observability::sanitize_url;
use crate::presentation::state::AppState;

use super::panic_message;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoUrlRequest {
    #[serde(default)]
    pub video_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerErrorResponse {
    pub message: String,
    pub details: String,
}

#[tracing::instrument(skip_all)]
pub async fn transcribe_handler<R, F>(
    State(state): State<AppState<R, F>>,
    payload: Result<Json<VideoUrlRequest>, JsonRejection>,
) -> Response
where
    R: SpeechRecognizer + ?Sized + 'static,
    F: ContentFetcher + ?Sized + 'static,
{
    let video_url = match payload {
        Ok(Json(VideoUrlRequest {
            video_url: Some(url),
        })) => url,
        Ok(_) => {
            tracing::warn!("Transcribe request without a video URL");
            return (StatusCode::BAD_REQUEST, "Video URL is required.").into_response();
        }
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Malformed transcribe request");
            return (StatusCode::BAD_REQUEST, rejection.body_text()).into_response();
        }
    };

    let safe_url = sanitize_url(&video_url);
    tracing::info!(url = %safe_url, "Processing video URL");

    let outcome = AssertUnwindSafe(state.transcription_service.transcribe_from_url(&video_url))
        .catch_unwind()
        .await;

    match outcome {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(panic) => {
            let details = panic_message(&*panic);
            tracing::error!(url = %safe_url, error = %details, "Error processing video URL");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ServerErrorResponse {
                    message: "Error processing video URL".to_string(),
                    details,
                }),
            )
                .into_response()
        }
    }
}
