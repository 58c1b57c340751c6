use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

/// Downloads a remote resource fully into memory.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Bytes, DownloadError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DownloadError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Download timed out")]
    Timeout,
    #[error("server responded with status {status}")]
    Status { status: u16, url: String },
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("http client setup failed: {0}")]
    ClientBuild(String),
}

/// Parses `raw` as an absolute URL. Relative references and garbage are
/// rejected without touching the network.
pub fn parse_absolute_url(raw: &str) -> Result<Url, DownloadError> {
    Url::parse(raw.trim()).map_err(|e| DownloadError::InvalidUrl(e.to_string()))
}
