use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::header;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ContentFetcher, SpeechRecognizer};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, raw_audio_handler, transcribe_handler, upload_handler,
};
use crate::presentation::state::AppState;

const OPENAPI_SPEC: &str = include_str!("../../openapi.json");

pub fn create_router<R, F>(state: AppState<R, F>) -> Router
where
    R: SpeechRecognizer + ?Sized + 'static,
    F: ContentFetcher + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let transcription_routes = Router::new()
        .route(
            "/api/transcription/transcribe",
            post(transcribe_handler::<R, F>),
        )
        .route("/api/transcription/upload", post(upload_handler::<R, F>))
        .route("/api/transcription/bytes", post(raw_audio_handler::<R, F>))
        .layer(DefaultBodyLimit::max(state.server.max_upload_size_bytes));

    let mut router = Router::new()
        .route("/openapi.json", get(serve_openapi_spec))
        .route("/health", get(health_handler))
        .merge(transcription_routes);

    if let Some(dir) = state.server.static_dir.as_deref() {
        tracing::info!(dir, "Serving static files");
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

async fn serve_openapi_spec() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], OPENAPI_SPEC)
}
