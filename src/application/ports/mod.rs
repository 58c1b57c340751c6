mod audio_stream;
mod content_fetcher;
mod speech_recognizer;

pub use audio_stream::{AudioInputStream, AudioStreamError, PushAudioStream, push_audio_stream};
pub use content_fetcher::{ContentFetcher, DownloadError, parse_absolute_url};
pub use speech_recognizer::{
    CancellationReason, RecognitionOutcome, RecognizerError, SpeechRecognizer,
};
