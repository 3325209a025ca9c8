// ========== Core Modules ==========
pub mod attestation;
pub mod campaign; // Campaign attribution types
pub mod eligibility; // Final eligibility outcome

// Export from attestation module
pub use attestation::{
    AttestationOutcome, AttestationState, QueryContext, ERROR_NO_SUCH_USER, STATUS_NONE,
};

// Export from campaign module
pub use campaign::CampaignId;

// Export from eligibility module
pub use eligibility::EligibilityResult;
