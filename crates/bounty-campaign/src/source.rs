//! Campaign-id strategies.
//!
//! A strategy answers with a [`CampaignId`] and nothing else: faults inside
//! a strategy are logged and degrade to the empty id so the next sub-step
//! (or the caller's "no campaign attributed" handling) can proceed.

use crate::error::CampaignResult;
use crate::legacy::LegacyCampaignClient;
use crate::store::{StoreCollectionClient, CUSTOM_POLICY_FIELD};
use async_trait::async_trait;
use bounty_types::CampaignId;
use tracing::{debug, warn};

/// One way of attributing a campaign id. Infallible by contract.
#[async_trait]
pub trait CampaignSource: Send + Sync {
    async fn resolve(&self) -> CampaignId;
}

/// Modern strategy: collection SKU first, license extended JSON second.
pub struct ModernCampaignSource<S> {
    store: S,
}

impl<S: StoreCollectionClient> ModernCampaignSource<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Campaign id recorded against an in-collection SKU, empty when the
    /// store has no product or no SKU is in the caller's collection.
    async fn collection_campaign_id(&self) -> CampaignResult<CampaignId> {
        let product = self.store.store_product().await?;
        let id = product
            .as_ref()
            .and_then(|p| p.collection_campaign_id())
            .unwrap_or_default();
        Ok(CampaignId::from(id))
    }

    /// Campaign id carried in the license's extended JSON payload, empty
    /// when the field is absent or not a string.
    async fn license_campaign_id(&self) -> CampaignResult<CampaignId> {
        let license = self.store.app_license().await?;
        let json: serde_json::Value = serde_json::from_str(&license.extended_json)?;
        let id = json
            .get(CUSTOM_POLICY_FIELD)
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        Ok(CampaignId::from(id))
    }
}

#[async_trait]
impl<S: StoreCollectionClient> CampaignSource for ModernCampaignSource<S> {
    async fn resolve(&self) -> CampaignId {
        let from_collection = match self.collection_campaign_id().await {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, "collection lookup failed, degrading to empty campaign id");
                CampaignId::empty()
            }
        };
        if !from_collection.is_empty() {
            debug!(campaign_id = %from_collection, "campaign id attributed from collection SKU");
            return from_collection;
        }

        match self.license_campaign_id().await {
            Ok(id) => {
                if !id.is_empty() {
                    debug!(campaign_id = %id, "campaign id attributed from license data");
                }
                id
            }
            Err(e) => {
                warn!(error = %e, "license lookup failed, degrading to empty campaign id");
                CampaignId::empty()
            }
        }
    }
}

/// Legacy strategy: the legacy API's answer, unmodified.
pub struct LegacyCampaignSource<L> {
    client: L,
}

impl<L: LegacyCampaignClient> LegacyCampaignSource<L> {
    pub fn new(client: L) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<L: LegacyCampaignClient> CampaignSource for LegacyCampaignSource<L> {
    async fn resolve(&self) -> CampaignId {
        match self.client.campaign_id().await {
            Ok(id) => CampaignId::from(id),
            Err(e) => {
                warn!(error = %e, "legacy campaign API failed, degrading to empty campaign id");
                CampaignId::empty()
            }
        }
    }
}
