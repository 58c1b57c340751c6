mod audio_format;
mod format_sniffer;
mod transcription_result;
mod uploaded_audio;

pub use audio_format::AudioFormat;
pub use format_sniffer::detect_audio_format;
pub use transcription_result::{
    DEFAULT_LANGUAGE, InconsistentResultError, PLACEHOLDER_CONFIDENCE, TranscriptionResult,
};
pub use uploaded_audio::UploadedAudio;
