//! Display report for the presentation layer.

use crate::service::EligibilityService;
use bounty_attestation::AttestationClient;
use bounty_campaign::CampaignIdResolver;
use serde::Serialize;
use tracing::info;

/// Shown when no campaign could be attributed to the acquisition
pub const NO_CAMPAIGN_PLACEHOLDER: &str = "No Campaign ID Found";

/// The two strings the presentation layer displays. Nothing else is
/// externally observable.
#[derive(Debug, Clone, Serialize)]
pub struct BountyReport {
    /// Resolved campaign id, or [`NO_CAMPAIGN_PLACEHOLDER`]
    pub campaign_id: String,

    /// `"Yes"`, `"No"`, or the formatted error string
    pub eligibility: String,
}

/// Run one full resolution: campaign attribution first, then eligibility,
/// sequentially. Both halves are independent; neither feeds the other.
pub async fn resolve_report<C: AttestationClient>(
    service: &EligibilityService<C>,
    campaigns: &CampaignIdResolver,
) -> BountyReport {
    let id = campaigns.resolve().await;
    let campaign_id = if id.is_empty() {
        NO_CAMPAIGN_PLACEHOLDER.to_string()
    } else {
        id.into_inner()
    };

    let eligibility = service.get_bounty_eligibility().await;

    info!(
        campaign_id = %campaign_id,
        eligibility = %eligibility,
        "bounty report resolved"
    );

    BountyReport {
        campaign_id,
        eligibility,
    }
}
