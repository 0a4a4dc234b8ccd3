//! Audio-related types and the Cartesia request payload.

use serde::Serialize;

/// Audio container requested from the API.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    Wav,
    Mp3,
    Raw,
}

/// Sample encoding requested from the API.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    PcmF32le,
    PcmS16le,
    PcmMulaw,
    PcmAlaw,
}

/// Output format of the synthesized audio.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OutputFormat {
    pub container: Container,
    pub encoding: Encoding,
    pub sample_rate: u32,
}

impl Default for OutputFormat {
    /// 44.1 kHz float32 WAV.
    fn default() -> Self {
        Self {
            container: Container::Wav,
            encoding: Encoding::PcmF32le,
            sample_rate: 44_100,
        }
    }
}

/// How the voice is selected.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum VoiceSpecifier {
    Id { id: String },
}

impl VoiceSpecifier {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id { id: id.into() }
    }
}

/// Request for speech synthesis.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub text: String,
    pub voice_id: String,
    pub format: OutputFormat,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_id: voice_id.into(),
            format: OutputFormat::default(),
        }
    }
}

/// JSON body of `POST /tts/bytes`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TtsPayload<'a> {
    pub model_id: &'a str,
    pub transcript: &'a str,
    pub voice: VoiceSpecifier,
    pub output_format: OutputFormat,
}

impl<'a> TtsPayload<'a> {
    pub fn new(model_id: &'a str, request: &'a SpeechRequest) -> Self {
        Self {
            model_id,
            transcript: &request.text,
            voice: VoiceSpecifier::id(request.voice_id.clone()),
            output_format: request.format,
        }
    }
}
