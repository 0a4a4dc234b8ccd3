//! HTTP client, Cartesia headers, and status mapping.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::error::SynthError;

pub const CARTESIA_VERSION_HEADER: &str = "cartesia-version";
pub const API_KEY_HEADER: &str = "x-api-key";

/// Build an HTTP client with the library's default settings (no timeout override).
pub fn build_client() -> Result<reqwest::Client, SynthError> {
    Ok(reqwest::Client::builder().build()?)
}

/// Build Cartesia-style headers (`X-API-Key` plus a pinned API version).
pub fn cartesia_headers(api_key: &str, version: &str) -> Result<HeaderMap, SynthError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        CARTESIA_VERSION_HEADER,
        HeaderValue::from_str(version).map_err(|e| {
            SynthError::InvalidArgument(format!("Invalid Cartesia-Version header: {e}"))
        })?,
    );
    let mut key = HeaderValue::from_str(api_key)
        .map_err(|e| SynthError::InvalidArgument(format!("Invalid API key header: {e}")))?;
    key.set_sensitive(true);
    headers.insert(API_KEY_HEADER, key);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Turn a non-success status and its body into an error.
pub fn status_to_error(status: u16, body: &str) -> SynthError {
    SynthError::api(status, body)
}

/// Whether a status code should be treated as a failed request.
pub fn is_failure_status(status: u16) -> bool {
    !(200..300).contains(&status)
}
