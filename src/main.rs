use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use transcription_api::application::services::TranscriptionService;
use transcription_api::infrastructure::http::HttpContentFetcher;
use transcription_api::infrastructure::observability::{TracingConfig, init_tracing};
use transcription_api::infrastructure::speech::AzureSpeechRecognizer;
use transcription_api::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Invalid configuration")?;

    init_tracing(
        TracingConfig::from_settings(environment, &settings.logging),
        settings.server.port,
    );

    let recognizer = Arc::new(
        AzureSpeechRecognizer::from_settings(&settings.speech)
            .context("Failed to configure speech recognizer")?,
    );
    tracing::info!(
        region = %settings.speech.region,
        endpoint = %recognizer.endpoint(),
        "Speech recognizer configured"
    );

    let fetcher = Arc::new(
        HttpContentFetcher::from_settings(&settings.download)
            .context("Failed to build HTTP client")?,
    );

    let state = AppState {
        transcription_service: Arc::new(TranscriptionService::new(recognizer, fetcher)),
        server: settings.server.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
