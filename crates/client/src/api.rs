//! REST helpers for the Chainlink node HTTP endpoints.
//!
//! URL resolution, status checking and JSON decoding shared by the
//! session and job-submission steps, built on [`reqwest`].

use reqwest::Url;
use serde::Deserialize;

/// Login endpoint; a successful POST sets the session cookie.
pub const SESSIONS_PATH: &str = "/sessions";

/// Job specification endpoint.
pub const SPECS_PATH: &str = "/v2/specs";

/// Errors from the node REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ChainlinkApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The node returned a non-2xx status code.
    #[error("Chainlink API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The base URL or a path resolved against it is unusable.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// JSON:API document returned by `POST /v2/specs`.
#[derive(Debug, Deserialize)]
pub struct SpecResponse {
    pub data: SpecResource,
}

#[derive(Debug, Deserialize)]
pub struct SpecResource {
    /// Identifier of the created job.
    pub id: String,
}

/// Parse the configured base URL. Only `http` and `https` URLs are
/// accepted.
pub fn parse_base_url(raw: &str) -> Result<Url, ChainlinkApiError> {
    let url = Url::parse(raw).map_err(|e| ChainlinkApiError::InvalidUrl(format!("{raw}: {e}")))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ChainlinkApiError::InvalidUrl(format!(
            "{raw}: expected an http(s) base URL"
        )));
    }

    Ok(url)
}

/// Resolve `path` against `base` with URL-reference semantics, so an
/// absolute path replaces whatever path the base carries.
pub fn resolve(base: &Url, path: &str) -> Result<Url, ChainlinkApiError> {
    base.join(path)
        .map_err(|e| ChainlinkApiError::InvalidUrl(format!("{base} + {path}: {e}")))
}

/// Ensure the response has a success status code. Returns the
/// response unchanged on success, or a [`ChainlinkApiError::ApiError`]
/// containing the status and body text on failure.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ChainlinkApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(ChainlinkApiError::ApiError {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Parse a successful JSON response body into the expected type.
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ChainlinkApiError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}
