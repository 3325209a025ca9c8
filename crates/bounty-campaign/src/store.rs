//! Modern store surface: product/collection and license records.

use crate::error::CampaignResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Name of the license extended-JSON field that may carry a campaign id
pub const CUSTOM_POLICY_FIELD: &str = "customPolicyField1";

/// One SKU of the current app's store product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSku {
    /// Whether this SKU is in the caller's collection
    pub is_in_user_collection: bool,

    /// Campaign id recorded against the SKU's collection data (may be empty)
    pub campaign_id: String,
}

/// Ownership record for the current app
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreProduct {
    pub skus: Vec<StoreSku>,
}

impl StoreProduct {
    /// Campaign id of the first SKU in the caller's collection, if any
    pub fn collection_campaign_id(&self) -> Option<&str> {
        self.skus
            .iter()
            .find(|sku| sku.is_in_user_collection)
            .map(|sku| sku.campaign_id.as_str())
    }
}

/// App license record carrying opaque extended JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppLicense {
    pub extended_json: String,
}

/// Product/license query surface of the modern store capability.
///
/// Both calls may fail; the campaign strategies degrade such faults to an
/// empty id rather than surfacing them.
#[async_trait]
pub trait StoreCollectionClient: Send + Sync {
    /// Ownership record for the current app, when the store knows one
    async fn store_product(&self) -> CampaignResult<Option<StoreProduct>>;

    /// The app's license record
    async fn app_license(&self) -> CampaignResult<AppLicense>;
}

#[async_trait]
impl<S: StoreCollectionClient + ?Sized> StoreCollectionClient for std::sync::Arc<S> {
    async fn store_product(&self) -> CampaignResult<Option<StoreProduct>> {
        (**self).store_product().await
    }

    async fn app_license(&self) -> CampaignResult<AppLicense> {
        (**self).app_license().await
    }
}
