use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{ContentFetcher, DownloadError};

pub struct MockContentFetcher {
    response: Result<Bytes, DownloadError>,
    calls: AtomicUsize,
}

impl MockContentFetcher {
    pub fn returning(data: impl Into<Bytes>) -> Self {
        Self {
            response: Ok(data.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DownloadError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentFetcher for MockContentFetcher {
    async fn fetch(&self, _url: &str) -> Result<Bytes, DownloadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
