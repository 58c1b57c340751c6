mod health;
mod raw_audio;
mod transcribe;
mod upload;

pub use health::health_handler;
pub use raw_audio::raw_audio_handler;
pub use transcribe::{ServerErrorResponse, VideoUrlRequest, transcribe_handler};
pub use upload::{AUDIO_FILE_FIELD, upload_handler};

use std::any::Any;

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown error".to_string()
    }
}
