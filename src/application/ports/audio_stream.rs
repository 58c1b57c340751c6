use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::StreamExt;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::stream::Stream;

/// Creates a connected push-stream pair. Bytes written to the
/// [`PushAudioStream`] come out of the [`AudioInputStream`] in order; the
/// input stream ends once the push side is closed or dropped.
pub fn push_audio_stream() -> (PushAudioStream, AudioInputStream) {
    let (sender, receiver) = mpsc::unbounded();
    (
        PushAudioStream {
            sender,
            bytes_written: 0,
        },
        AudioInputStream { receiver },
    )
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStreamError {
    #[error("audio stream closed by reader")]
    ReaderClosed,
}

/// Write half handed to the producer of audio.
pub struct PushAudioStream {
    sender: UnboundedSender<Bytes>,
    bytes_written: usize,
}

impl PushAudioStream {
    pub fn write(&mut self, chunk: &[u8]) -> Result<(), AudioStreamError> {
        if chunk.is_empty() {
            return Ok(());
        }
        self.sender
            .unbounded_send(Bytes::copy_from_slice(chunk))
            .map_err(|_| AudioStreamError::ReaderClosed)?;
        self.bytes_written += chunk.len();
        Ok(())
    }

    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Signals end-of-audio to the reader.
    pub fn close(self) {
        self.sender.close_channel();
    }
}

/// Read half consumed by a speech recognizer.
pub struct AudioInputStream {
    receiver: UnboundedReceiver<Bytes>,
}

impl AudioInputStream {
    /// Drains the stream into a single buffer.
    pub async fn read_to_end(mut self) -> Vec<u8> {
        let mut buffer = Vec::new();
        while let Some(chunk) = self.receiver.next().await {
            buffer.extend_from_slice(&chunk);
        }
        buffer
    }
}

impl Stream for AudioInputStream {
    type Item = Bytes;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }
}
