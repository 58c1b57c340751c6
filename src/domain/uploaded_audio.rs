use bytes::Bytes;

/// An audio file received through a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedAudio {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedAudio {
    pub fn new(file_name: Option<String>, content_type: Option<String>, data: Bytes) -> Self {
        Self {
            file_name,
            content_type,
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
