//! HTTP access to the status endpoint.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use rustls::{ClientConfig, crypto::ring};
use rustls_platform_verifier::BuilderVerifierExt;
use tracing::debug;
use url::Url;

use crate::error::StatusError;
use crate::status::{IceStats, StatusDocument};

/// Default timeout for one status poll.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the reqwest client used for status polls.
///
/// TLS is preconfigured with the platform verifier so https endpoints work
/// without bundled roots.
pub fn default_client(timeout: Duration) -> Client {
    let provider = Arc::new(ring::default_provider());
    let tls_config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .expect("Failed to configure default TLS protocol versions")
        .with_platform_verifier()
        .unwrap()
        .with_no_client_auth();

    Client::builder()
        .use_preconfigured_tls(tls_config)
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client")
}

/// Polls one Icecast status endpoint.
#[derive(Debug, Clone)]
pub struct StatusClient {
    endpoint: Url,
    client: Client,
}

impl StatusClient {
    pub fn new(endpoint: Url, client: Client) -> Self {
        Self { endpoint, client }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch and decode the current status document.
    ///
    /// Non-2xx responses and undecodable bodies are errors; a document with
    /// no sources is not.
    pub async fn fetch_status(&self) -> Result<IceStats, StatusError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let document = StatusDocument::from_json(&body)?;

        debug!(
            endpoint = %self.endpoint,
            sources = document.icestats.sources().len(),
            "Fetched status document"
        );

        Ok(document.icestats)
    }
}
