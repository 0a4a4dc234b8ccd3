//! Cartesia TTS provider (`/tts/bytes`).

use async_trait::async_trait;

use super::tts::SpeechProvider;
use super::types::{SpeechRequest, TtsPayload};
use crate::config::{
    SynthConfig, API_KEY_ENV, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_MODEL_ID,
};
use crate::error::SynthError;
use crate::provider::http::{build_client, cartesia_headers, is_failure_status, status_to_error};

/// Cartesia TTS provider returning the raw audio bytes of one request.
#[derive(Debug, Clone)]
pub struct CartesiaTtsProvider {
    api_key: String,
    base_url: String,
    api_version: String,
    model: String,
}

impl CartesiaTtsProvider {
    pub fn new(api_key: String) -> Self {
        Self::new_with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn new_with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            model: DEFAULT_MODEL_ID.to_string(),
        }
    }

    /// Provider for `config`, authenticated with an already-resolved key.
    pub fn from_config(config: &SynthConfig, api_key: String) -> Self {
        Self::new_with_base_url(api_key, config.base_url.clone())
            .with_api_version(config.api_version.clone())
            .with_model(config.model_id.clone())
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/tts/bytes", self.base_url.trim_end_matches('/'))
    }

    /// Build the JSON body for `request`. The transcript is sent as-is.
    pub fn payload<'a>(&'a self, request: &'a SpeechRequest) -> TtsPayload<'a> {
        TtsPayload::new(&self.model, request)
    }
}

#[async_trait]
impl SpeechProvider for CartesiaTtsProvider {
    async fn generate_speech(&self, request: &SpeechRequest) -> Result<Vec<u8>, SynthError> {
        if self.api_key.is_empty() {
            return Err(SynthError::MissingCredential {
                var: API_KEY_ENV.to_string(),
            });
        }

        let headers = cartesia_headers(&self.api_key, &self.api_version)?;
        let url = self.endpoint();
        tracing::debug!(
            url = %url,
            model = %self.model,
            voice_id = %request.voice_id,
            "sending Cartesia synthesis request"
        );

        let response = build_client()?
            .post(url)
            .headers(headers)
            .json(&self.payload(request))
            .send()
            .await?;

        parse_tts_response(response).await
    }
}

async fn parse_tts_response(response: reqwest::Response) -> Result<Vec<u8>, SynthError> {
    let status = response.status().as_u16();
    if is_failure_status(status) {
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(status, error = %e, "failed to read error response body");
                String::new()
            }
        };
        tracing::warn!(status, "Cartesia rejected synthesis request");
        return Err(status_to_error(status, &body));
    }

    let bytes = response.bytes().await?;
    tracing::debug!(bytes = bytes.len(), "received synthesized audio");
    Ok(bytes.to_vec())
}
