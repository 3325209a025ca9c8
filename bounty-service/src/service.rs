//! Eligibility orchestration and the single fault catch point.

use bounty_attestation::{AttestationClient, AttestationResolver};
use bounty_types::EligibilityResult;
use tracing::{info, warn};

/// Determines bounty eligibility for one acquisition.
///
/// This is the only place attestation faults are caught; below this boundary
/// they propagate unshaped so their diagnostic detail survives.
pub struct EligibilityService<C> {
    resolver: AttestationResolver<C>,
}

impl<C: AttestationClient> EligibilityService<C> {
    pub fn new(client: C) -> Self {
        Self {
            resolver: AttestationResolver::new(client),
        }
    }

    /// Typed eligibility outcome: a boolean answer or the fault description.
    pub async fn eligibility(&self) -> EligibilityResult {
        match self.resolver.resolve_eligible().await {
            Ok(eligible) => {
                info!(eligible, "bounty eligibility resolved");
                EligibilityResult::Eligible(eligible)
            }
            Err(e) => {
                warn!(error = %e, "bounty eligibility request failed");
                EligibilityResult::Failed(e.to_string())
            }
        }
    }

    /// Eligibility rendered for display: `"Yes"`, `"No"`, or
    /// `"No - Error requesting: {message}"`. Never raises.
    pub async fn get_bounty_eligibility(&self) -> String {
        match self.eligibility().await {
            EligibilityResult::Eligible(true) => "Yes".to_string(),
            EligibilityResult::Eligible(false) => "No".to_string(),
            EligibilityResult::Failed(message) => {
                format!("No - Error requesting: {}", message)
            }
        }
    }
}
