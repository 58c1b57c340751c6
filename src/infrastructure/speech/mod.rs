mod azure_speech_recognizer;
mod mock_speech_recognizer;

pub use azure_speech_recognizer::AzureSpeechRecognizer;
pub use mock_speech_recognizer::MockSpeechRecognizer;
