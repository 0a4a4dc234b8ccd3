//! The synthesis requester: one request, one audio file, console reporting.

use std::io::Write;
use std::path::Path;

use crate::audio::{CartesiaTtsProvider, SpeechProvider, SpeechRequest};
use crate::config::{SynthConfig, DEFAULT_TEXT, DEFAULT_VOICE_ID};
use crate::error::{ErrorKind, SynthError};

/// Runs synthesis requests and reports their progress to a writer (stdout by default).
///
/// Every failure is caught and printed; [`Synthesizer::synthesize`] always
/// returns normally.
#[derive(Debug)]
pub struct Synthesizer<W = std::io::Stdout> {
    config: SynthConfig,
    out: W,
}

impl Synthesizer<std::io::Stdout> {
    pub fn new(config: SynthConfig) -> Self {
        Self {
            config,
            out: std::io::stdout(),
        }
    }

    /// Synthesizer configured from the environment, printing to stdout.
    pub fn from_env() -> Self {
        Self::new(SynthConfig::from_env())
    }
}

impl<W: Write> Synthesizer<W> {
    /// Synthesizer printing its status lines to `out`.
    pub fn with_writer(config: SynthConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Synthesize the default greeting with the default voice.
    pub async fn synthesize_default(&mut self) {
        self.synthesize(DEFAULT_TEXT, DEFAULT_VOICE_ID).await;
    }

    /// Synthesize `text` with `voice_id` and save the audio to the configured path.
    ///
    /// The API key is read when this is called. Without one, nothing is sent.
    pub async fn synthesize(&mut self, text: &str, voice_id: &str) {
        let api_key = match self.config.resolve_api_key() {
            Ok(key) => key,
            Err(err) => {
                self.say(format_args!("Error: {err}"));
                return;
            }
        };

        let provider = CartesiaTtsProvider::from_config(&self.config, api_key);
        let request = SpeechRequest::new(text, voice_id);

        self.say(format_args!("Sending synthesis request for: '{text}'..."));

        match synthesize_to_file(&provider, &request, &self.config.output_path).await {
            Ok(len) => {
                let path = self.config.output_path.display().to_string();
                self.say(format_args!("Success! Audio saved to {path} ({len} bytes)"));
            }
            Err(err) => self.report_failure(&err),
        }
    }

    fn report_failure(&mut self, err: &SynthError) {
        if err.kind() == ErrorKind::RequestFailed {
            tracing::warn!(error = %err, status = ?err.status(), "synthesis failed");
        }
        self.say(format_args!("Synthesis failed: {err}"));
        if let Some(body) = err.response_body() {
            self.say(format_args!("Details: {body}"));
        }
    }

    fn say(&mut self, line: std::fmt::Arguments<'_>) {
        // A closed stdout must not abort the run.
        let _ = writeln!(self.out, "{line}");
    }
}

/// Send `request` through `provider` and write the audio to `path`, replacing
/// any existing file. Returns the number of bytes written.
///
/// Nothing is written unless the provider succeeds.
pub async fn synthesize_to_file(
    provider: &dyn SpeechProvider,
    request: &SpeechRequest,
    path: &Path,
) -> Result<usize, SynthError> {
    let audio = provider.generate_speech(request).await?;
    tokio::fs::write(path, &audio).await?;
    tracing::debug!(path = %path.display(), bytes = audio.len(), "audio saved");
    Ok(audio.len())
}
