//! Legacy campaign API seam.
//!
//! Used only when the modern store capability is unavailable. The production
//! variant is platform-provided and injected by the embedder; the simulator
//! variant stands in for diagnostic builds.

use crate::error::CampaignResult;
use async_trait::async_trait;
use std::sync::Arc;

/// The legacy campaign-id API: one call, no arguments.
#[async_trait]
pub trait LegacyCampaignClient: Send + Sync {
    async fn campaign_id(&self) -> CampaignResult<String>;
}

#[async_trait]
impl<L: LegacyCampaignClient + ?Sized> LegacyCampaignClient for Arc<L> {
    async fn campaign_id(&self) -> CampaignResult<String> {
        (**self).campaign_id().await
    }
}

/// Simulator variant of the legacy API for diagnostic builds.
///
/// Replays a fixed campaign id the way the platform simulator replays its
/// configured test data.
#[derive(Debug, Clone, Default)]
pub struct SimulatorCampaignClient {
    campaign_id: String,
}

impl SimulatorCampaignClient {
    pub fn new(campaign_id: impl Into<String>) -> Self {
        Self {
            campaign_id: campaign_id.into(),
        }
    }
}

#[async_trait]
impl LegacyCampaignClient for SimulatorCampaignClient {
    async fn campaign_id(&self) -> CampaignResult<String> {
        Ok(self.campaign_id.clone())
    }
}

/// Pick the legacy client for the current build: the simulator in debug
/// builds, the production client otherwise.
pub fn legacy_client_for_build<C>(
    production: C,
    simulator: SimulatorCampaignClient,
) -> Arc<dyn LegacyCampaignClient>
where
    C: LegacyCampaignClient + 'static,
{
    if cfg!(debug_assertions) {
        Arc::new(simulator)
    } else {
        Arc::new(production)
    }
}
