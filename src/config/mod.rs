//! Configuration (layered: code > env > built-in defaults).

use std::env::VarError;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::SynthError;

/// Environment variable holding the Cartesia API key.
pub const API_KEY_ENV: &str = "CARTESIA_API_KEY";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "CARTESIA_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.cartesia.ai";
pub const DEFAULT_API_VERSION: &str = "2025-04-16";
pub const DEFAULT_MODEL_ID: &str = "sonic-3-latest";
pub const DEFAULT_OUTPUT_PATH: &str = "test_output.wav";
pub const DEFAULT_TEXT: &str = "Hello, Orbit is ready.";
pub const DEFAULT_VOICE_ID: &str = "dda33d93-9f12-4a59-806e-a98279ebf050";

/// Settings for one synthesis run.
///
/// The API key is never cached from the environment: unless set explicitly
/// with [`SynthConfig::with_api_key`], it is read from `CARTESIA_API_KEY`
/// each time [`SynthConfig::resolve_api_key`] is called.
#[derive(Clone)]
pub struct SynthConfig {
    api_key: Option<String>,
    pub base_url: String,
    pub api_version: String,
    pub model_id: String,
    pub output_path: PathBuf,
}

impl fmt::Debug for SynthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynthConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("model_id", &self.model_id)
            .field("output_path", &self.output_path)
            .finish()
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SynthConfig {
    /// Built-in defaults, ignoring the environment (except the key, read later).
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    /// Defaults with environment overrides applied (currently `CARTESIA_BASE_URL`).
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        config
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Resolve the API key: explicit value first, then `CARTESIA_API_KEY`.
    ///
    /// Empty values count as absent. A value that is not valid Unicode is a
    /// configuration error rather than a missing key.
    pub fn resolve_api_key(&self) -> Result<String, SynthError> {
        let key = match &self.api_key {
            Some(key) => Some(key.clone()),
            None => match std::env::var(API_KEY_ENV) {
                Ok(key) => Some(key),
                Err(VarError::NotPresent) => None,
                Err(VarError::NotUnicode(_)) => {
                    return Err(SynthError::Configuration(format!(
                        "{API_KEY_ENV} is not valid Unicode"
                    )))
                }
            },
        };
        key.filter(|k| !k.is_empty())
            .ok_or_else(|| SynthError::MissingCredential {
                var: API_KEY_ENV.to_string(),
            })
    }
}

/// Load variables from a dotenv file into the process environment.
///
/// Opt-in only; nothing in this crate loads `.env` files implicitly.
/// Variables already set in the environment are not overridden.
pub fn load_env_file(path: &Path) -> Result<(), SynthError> {
    dotenvy::from_path(path).map_err(|e| {
        SynthError::Configuration(format!(
            "failed to load env file {}: {e}",
            path.display()
        ))
    })
}
