//! reqwest-backed attestation client.
//!
//! Posts the empty JSON object to the attestation endpoint for one context
//! and surfaces the raw response as an [`AttestationOutcome`]. Connection
//! and protocol-level failures are transport faults; anything that produced
//! a response is left for the resolver to interpret.

use crate::client::AttestationClient;
use crate::error::{AttestationError, AttestationResult};
use async_trait::async_trait;
use bounty_types::{AttestationOutcome, QueryContext};
use std::time::Duration;
use tracing::debug;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpAttestationClientConfig {
    /// Base URL of the attestation service
    pub endpoint: String,

    /// Per-request timeout, if the embedder wants one. Timeouts are the
    /// transport's concern; the resolver enforces none of its own.
    pub timeout: Option<Duration>,
}

/// reqwest-backed attestation client
pub struct HttpAttestationClient {
    config: HttpAttestationClientConfig,
    client: reqwest::Client,
}

impl HttpAttestationClient {
    pub fn new(config: HttpAttestationClientConfig) -> AttestationResult<Self> {
        if config.endpoint.is_empty() {
            return Err(AttestationError::InvalidEndpoint(
                "attestation endpoint must not be empty".to_string(),
            ));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AttestationError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn request_url(&self, context: QueryContext) -> String {
        format!(
            "{}/attestation/{}",
            self.config.endpoint.trim_end_matches('/'),
            context.request_id()
        )
    }
}

#[async_trait]
impl AttestationClient for HttpAttestationClient {
    async fn send(
        &self,
        context: QueryContext,
        body: &str,
    ) -> AttestationResult<AttestationOutcome> {
        let url = self.request_url(context);
        debug!(context = %context, url = %url, "sending attestation request");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| AttestationError::Transport(e.to_string()))?;

        let status_code = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AttestationError::Transport(e.to_string()))?;

        debug!(
            context = %context,
            status_code,
            body_len = body.len(),
            "attestation response received"
        );

        // The platform extended error code has no HTTP equivalent here.
        Ok(AttestationOutcome::new(status_code, body, None))
    }
}
