//! Audio capabilities: text-to-speech.

pub mod cartesia;
pub mod tts;
pub mod types;

pub use cartesia::CartesiaTtsProvider;
pub use tts::SpeechProvider;
pub use types::*;
