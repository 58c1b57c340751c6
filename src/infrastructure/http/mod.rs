mod http_content_fetcher;
mod mock_content_fetcher;

pub use http_content_fetcher::{
    DEFAULT_DOWNLOAD_TIMEOUT, DEFAULT_USER_AGENT, HttpContentFetcher, is_audio_video_content,
};
pub use mock_content_fetcher::MockContentFetcher;
