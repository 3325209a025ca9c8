//! Tri-state attestation resolution and the user → device fallback.

use crate::client::{AttestationClient, EMPTY_REQUEST_BODY};
use crate::error::AttestationResult;
use bounty_types::{AttestationState, QueryContext};
use serde::Deserialize;
use tracing::debug;

/// Well-formed attestation response body.
///
/// The field is required: a body missing it is malformed and raises, it does
/// not default to a negative answer.
#[derive(Debug, Deserialize)]
struct AttestationBody {
    #[serde(rename = "IsMicrosoftAccrued")]
    is_microsoft_accrued: bool,
}

/// Resolves attestation states per context and orchestrates the
/// user → device fallback.
///
/// Holds no state across calls; every resolution run queries fresh.
pub struct AttestationResolver<C> {
    client: C,
}

impl<C: AttestationClient> AttestationResolver<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Resolve the tri-state attestation answer for one context.
    ///
    /// `Unknown` is returned iff the outcome is the exact "no such user"
    /// triple; any other outcome must carry a parseable body with the
    /// accrual field, or the fault propagates to the caller.
    pub async fn resolve_context(
        &self,
        context: QueryContext,
    ) -> AttestationResult<AttestationState> {
        let outcome = self.client.send(context, EMPTY_REQUEST_BODY).await?;

        if outcome.is_no_such_user() {
            debug!(context = %context, "attestation service has no notion of this context");
            return Ok(AttestationState::Unknown);
        }

        let body: AttestationBody = serde_json::from_str(&outcome.body)?;
        let state = if body.is_microsoft_accrued {
            AttestationState::Eligible
        } else {
            AttestationState::NonEligible
        };

        debug!(
            context = %context,
            status_code = outcome.status_code,
            state = %state,
            "attestation context resolved"
        );

        Ok(state)
    }

    /// Resolve the final boolean eligibility.
    ///
    /// A recognized user identity is authoritative; the device context is
    /// consulted at most once, only when the service has no notion of the
    /// user, and never overrides an authoritative user answer.
    pub async fn resolve_eligible(&self) -> AttestationResult<bool> {
        let user = self.resolve_context(QueryContext::User).await?;
        if user != AttestationState::Unknown {
            return Ok(user == AttestationState::Eligible);
        }

        let device = self.resolve_context(QueryContext::Device).await?;
        Ok(device == AttestationState::Eligible)
    }
}
