//! # Bounty Campaign
//!
//! Resolves the marketing campaign id credited with an app acquisition.
//!
//! Two independent strategies exist, and exactly one is selected up front
//! from the running environment's capability:
//!
//! - **Modern** (store capability present): a SKU in the caller's collection
//!   carries the campaign id; if none does, the app license's extended JSON
//!   payload may carry it in `customPolicyField1`.
//! - **Legacy** (capability absent): the legacy campaign API answers
//!   directly; non-production builds use its simulator variant.
//!
//! Resolution never raises. Every internal fault degrades to an empty id,
//! and an empty final id is a valid terminal state meaning "no campaign
//! could be attributed."

pub mod error;
pub mod legacy;
pub mod resolver;
pub mod source;
pub mod store;

// Re-export main types
pub use error::{CampaignError, CampaignResult};
pub use legacy::{legacy_client_for_build, LegacyCampaignClient, SimulatorCampaignClient};
pub use resolver::{CampaignIdResolver, CampaignSurface};
pub use source::{CampaignSource, LegacyCampaignSource, ModernCampaignSource};
pub use store::{AppLicense, StoreCollectionClient, StoreProduct, StoreSku};
