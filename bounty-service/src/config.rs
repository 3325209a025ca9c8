//! Configuration for the bounty service

use bounty_attestation::HttpAttestationClientConfig;
use bounty_campaign::{CampaignSurface, LegacyCampaignClient, StoreCollectionClient};
use std::sync::Arc;
use std::time::Duration;

/// Service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Attestation service base URL
    pub attestation_endpoint: String,

    /// Per-request timeout in seconds (transport-level; no timeout when unset)
    pub request_timeout_secs: Option<u64>,

    /// Whether the modern store capability is present on this environment
    pub modern_store_capability: bool,

    /// Log level
    pub log_level: String,
}

impl ServiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let attestation_endpoint = std::env::var("BOUNTY_ATTESTATION_ENDPOINT")
            .unwrap_or_default();

        let request_timeout_secs = std::env::var("BOUNTY_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());

        let modern_store_capability = std::env::var("BOUNTY_MODERN_STORE_CAPABILITY")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            attestation_endpoint,
            request_timeout_secs,
            modern_store_capability,
            log_level,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.attestation_endpoint.is_empty() {
            anyhow::bail!("Attestation endpoint is required");
        }

        Ok(())
    }

    /// Build the HTTP attestation client configuration from this config
    pub fn attestation_client_config(&self) -> HttpAttestationClientConfig {
        HttpAttestationClientConfig {
            endpoint: self.attestation_endpoint.clone(),
            timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }

    /// Pick the campaign surface for this environment.
    ///
    /// This is the single place the capability flag is consulted; both
    /// clients are handed in so the decision stays a pure selection.
    pub fn campaign_surface(
        &self,
        store: Arc<dyn StoreCollectionClient>,
        legacy: Arc<dyn LegacyCampaignClient>,
    ) -> CampaignSurface {
        if self.modern_store_capability {
            CampaignSurface::Modern(store)
        } else {
            CampaignSurface::Legacy(legacy)
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            attestation_endpoint: String::new(),
            request_timeout_secs: None,
            modern_store_capability: true,
            log_level: "info".to_string(),
        }
    }
}
