use futures::StreamExt;

use transcription_api::application::ports::{AudioStreamError, push_audio_stream};

#[tokio::test]
async fn given_written_chunks_when_closed_then_reader_receives_all_bytes_in_order() {
    let (mut push, input) = push_audio_stream();

    push.write(b"hello ").unwrap();
    push.write(b"world").unwrap();
    assert_eq!(push.bytes_written(), 11);
    push.close();

    assert_eq!(input.read_to_end().await, b"hello world");
}

#[tokio::test]
async fn given_push_side_dropped_when_reading_then_stream_ends() {
    let (mut push, mut input) = push_audio_stream();

    push.write(b"abc").unwrap();
    drop(push);

    assert_eq!(input.next().await.as_deref(), Some(&b"abc"[..]));
    assert!(input.next().await.is_none());
}

#[tokio::test]
async fn given_empty_chunk_when_writing_then_nothing_is_emitted() {
    let (mut push, input) = push_audio_stream();

    push.write(b"").unwrap();
    push.close();

    assert!(input.read_to_end().await.is_empty());
}

#[test]
fn given_reader_dropped_when_writing_then_returns_reader_closed() {
    let (mut push, input) = push_audio_stream();
    drop(input);

    let result = push.write(b"data");

    assert!(matches!(result, Err(AudioStreamError::ReaderClosed)));
}
