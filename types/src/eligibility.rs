//! Final eligibility outcome.

use serde::{Deserialize, Serialize};

/// Terminal result of one eligibility resolution run.
///
/// Either a boolean answer or a failure description, never both. The
/// failure variant carries the fault message exactly as it will be shown
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityResult {
    /// Resolution completed with an authoritative answer
    Eligible(bool),
    /// Resolution failed; the message describes the triggering fault
    Failed(String),
}

impl EligibilityResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, EligibilityResult::Failed(_))
    }
}
