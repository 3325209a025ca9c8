//! Campaign-id resolver: one strategy, selected once.

use crate::legacy::LegacyCampaignClient;
use crate::source::{CampaignSource, LegacyCampaignSource, ModernCampaignSource};
use crate::store::StoreCollectionClient;
use bounty_types::CampaignId;
use std::sync::Arc;
use tracing::debug;

/// Which campaign surface the running environment offers.
///
/// The capability decision is made exactly once, by whoever constructs this
/// value; no strategy branching happens later.
pub enum CampaignSurface {
    /// The modern store capability is present
    Modern(Arc<dyn StoreCollectionClient>),
    /// The modern capability is unavailable; only the legacy API exists
    Legacy(Arc<dyn LegacyCampaignClient>),
}

/// Resolves the campaign id for this acquisition. Never raises.
pub struct CampaignIdResolver {
    source: Box<dyn CampaignSource>,
}

impl CampaignIdResolver {
    /// Select the strategy for the given surface.
    pub fn select(surface: CampaignSurface) -> Self {
        let source: Box<dyn CampaignSource> = match surface {
            CampaignSurface::Modern(store) => {
                debug!("modern store capability present, using collection/license strategy");
                Box::new(ModernCampaignSource::new(store))
            }
            CampaignSurface::Legacy(client) => {
                debug!("modern store capability unavailable, using legacy API");
                Box::new(LegacyCampaignSource::new(client))
            }
        };
        Self { source }
    }

    /// Resolve the campaign id. Empty means "no campaign attributed."
    pub async fn resolve(&self) -> CampaignId {
        self.source.resolve().await
    }
}
