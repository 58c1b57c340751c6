use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{ContentFetcher, DownloadError, parse_absolute_url};
use crate::infrastructure::observability::sanitize_url;
use crate::presentation::config::DownloadSettings;

pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(10 * 60);
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const AUDIO_VIDEO_MIME_PREFIXES: [&str; 5] = [
    "audio/",
    "video/",
    "application/octet-stream",
    "application/ogg",
    "application/mp4",
];

const AUDIO_VIDEO_EXTENSIONS: [&str; 12] = [
    ".mp3", ".wav", ".mp4", ".m4a", ".ogg", ".opus", ".flac", ".aac", ".webm", ".avi", ".mov",
    ".mkv",
];

/// Single-shot GET downloader with a bounded timeout and browser-like
/// User-Agent. No retries.
pub struct HttpContentFetcher {
    client: reqwest::Client,
}

impl HttpContentFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, DownloadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| DownloadError::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn from_settings(settings: &DownloadSettings) -> Result<Self, DownloadError> {
        Self::new(
            Duration::from_secs(settings.timeout_secs),
            &settings.user_agent,
        )
    }
}

/// True when either the declared content type or the URL hints at audio or
/// video. Servers often mislabel media, so a miss is only worth a warning.
pub fn is_audio_video_content(content_type: &str, url: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    let url = url.to_ascii_lowercase();

    AUDIO_VIDEO_MIME_PREFIXES
        .iter()
        .any(|prefix| content_type.contains(prefix))
        || AUDIO_VIDEO_EXTENSIONS.iter().any(|ext| url.contains(ext))
}

fn map_request_error(e: reqwest::Error) -> DownloadError {
    if e.is_timeout() {
        DownloadError::Timeout
    } else {
        // reqwest renders the full URL, query secrets included.
        DownloadError::RequestFailed(e.without_url().to_string())
    }
}

#[async_trait]
impl ContentFetcher for HttpContentFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, DownloadError> {
        let parsed = parse_absolute_url(url)?;
        let safe_url = sanitize_url(url);

        tracing::debug!(url = %safe_url, "Making HTTP request");

        let response = self.client.get(parsed).send().await.map_err(|e| {
            let err = map_request_error(e);
            tracing::error!(url = %safe_url, error = %err, "HTTP request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url = %safe_url, status = status.as_u16(), "Download rejected");
            return Err(DownloadError::Status {
                status: status.as_u16(),
                url: safe_url,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        tracing::info!(
            content_type = %content_type,
            content_length = response.content_length().unwrap_or(0),
            "Download response received"
        );

        if !is_audio_video_content(&content_type, url) {
            tracing::warn!(
                content_type = %content_type,
                url = %safe_url,
                "Content type may not be audio or video"
            );
        }

        let body = response.bytes().await.map_err(map_request_error)?;

        tracing::info!(bytes = body.len(), "Download completed");

        Ok(body)
    }
}
