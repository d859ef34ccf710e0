//! Authenticated session with a Chainlink node.
//!
//! [`establish_session`] logs in with the configured credentials and
//! returns a [`Session`] that owns the cookie jar the node's session
//! cookie was stored in. Every request made through the session sends
//! that cookie back.

use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::Url;

use ei_core::config::ClientConfig;

use crate::api::{self, ChainlinkApiError, SESSIONS_PATH};

/// A logged-in HTTP client bound to one node.
pub struct Session {
    client: reqwest::Client,
    jar: Arc<Jar>,
    base_url: Url,
}

impl Session {
    /// Base URL every endpoint path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `Cookie` header value the session would send to the node, if the
    /// login set any cookies.
    pub fn cookie_header(&self) -> Option<String> {
        self.jar
            .cookies(&self.base_url)
            .and_then(|value| value.to_str().ok().map(str::to_owned))
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

/// Log in to the node at `config.base_url`.
///
/// Sends a `POST /sessions` request with the credentials as JSON. Fails
/// on an unusable base URL, a network error, or a non-2xx response.
pub async fn establish_session(config: &ClientConfig) -> Result<Session, ChainlinkApiError> {
    let base_url = api::parse_base_url(&config.base_url)?;
    let sessions_url = api::resolve(&base_url, SESSIONS_PATH)?;

    let jar = Arc::new(Jar::default());
    let client = reqwest::Client::builder()
        .cookie_provider(Arc::clone(&jar))
        .timeout(config.request_timeout)
        .build()?;

    tracing::debug!(url = %sessions_url, email = %config.credentials.email, "Logging in");

    let response = client
        .post(sessions_url)
        .json(&config.credentials)
        .send()
        .await?;
    api::ensure_success(response).await?;

    let session = Session {
        client,
        jar,
        base_url,
    };

    tracing::info!(
        node = %session.base_url,
        has_cookie = session.cookie_header().is_some(),
        "Session established",
    );

    Ok(session)
}
