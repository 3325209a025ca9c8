//! Attestation query types.
//!
//! An attestation query asks the remote store service whether a single
//! acquisition accrues to a sponsored campaign, on behalf of one entity
//! (the acquiring user or the acquiring device). The answer is tri-state:
//! the service can say yes, say no, or have no notion of the entity at all.

use serde::{Deserialize, Serialize};

/// Status code sentinel meaning "no content / no status was produced".
///
/// The platform reports this (rather than a real HTTP status) when the
/// request never yielded a protocol-level response.
pub const STATUS_NONE: u16 = 0;

/// Extended error code for "no such user" (platform HRESULT 0x80070525).
///
/// Combined with [`STATUS_NONE`] and an empty body, this is the one signal
/// that the queried entity does not exist for the caller.
pub const ERROR_NO_SUCH_USER: i32 = 0x8007_0525_u32 as i32;

/// Tri-state answer to one attestation query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttestationState {
    /// Authoritative yes: the acquisition accrues to a sponsored campaign
    Eligible,
    /// Authoritative no
    NonEligible,
    /// No authoritative answer exists for this context (the entity is not
    /// known to the service). Distinct from [`AttestationState::NonEligible`].
    Unknown,
}

impl std::fmt::Display for AttestationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttestationState::Eligible => write!(f, "eligible"),
            AttestationState::NonEligible => write!(f, "non_eligible"),
            AttestationState::Unknown => write!(f, "unknown"),
        }
    }
}

/// The entity on whose behalf an attestation query is made.
///
/// Exactly two contexts exist in this domain. Each carries an opaque numeric
/// request id that is passed through to the remote call unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryContext {
    /// The acquiring user (recognized account)
    User,
    /// The acquiring device
    Device,
}

impl QueryContext {
    /// Numeric request id understood by the remote service
    pub fn request_id(&self) -> u32 {
        match self {
            QueryContext::User => 27,
            QueryContext::Device => 28,
        }
    }
}

impl std::fmt::Display for QueryContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryContext::User => write!(f, "user"),
            QueryContext::Device => write!(f, "device"),
        }
    }
}

/// Raw result of one remote attestation query.
///
/// Produced once per call and never retried. Interpretation (tri-state
/// mapping, body parsing) belongs to the resolver, not to this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttestationOutcome {
    /// HTTP-like status code; [`STATUS_NONE`] when no status was produced
    pub status_code: u16,

    /// Response body (JSON text, possibly empty)
    pub body: String,

    /// Platform extended error code, when the platform reported one
    pub extended_error: Option<i32>,
}

impl AttestationOutcome {
    pub fn new(status_code: u16, body: impl Into<String>, extended_error: Option<i32>) -> Self {
        Self {
            status_code,
            body: body.into(),
            extended_error,
        }
    }

    /// True iff this outcome is the exact "no such user" signal triple:
    /// no status, empty body, and the well-known extended error code.
    ///
    /// The check is deliberately narrow; no other error code participates.
    pub fn is_no_such_user(&self) -> bool {
        self.status_code == STATUS_NONE
            && self.body.is_empty()
            && self.extended_error == Some(ERROR_NO_SUCH_USER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_such_user_requires_full_triple() {
        let signal = AttestationOutcome::new(STATUS_NONE, "", Some(ERROR_NO_SUCH_USER));
        assert!(signal.is_no_such_user());

        // Each leg broken in turn
        let wrong_status = AttestationOutcome::new(200, "", Some(ERROR_NO_SUCH_USER));
        assert!(!wrong_status.is_no_such_user());

        let nonempty_body = AttestationOutcome::new(STATUS_NONE, "{}", Some(ERROR_NO_SUCH_USER));
        assert!(!nonempty_body.is_no_such_user());

        let other_error = AttestationOutcome::new(STATUS_NONE, "", Some(-1));
        assert!(!other_error.is_no_such_user());

        let no_error = AttestationOutcome::new(STATUS_NONE, "", None);
        assert!(!no_error.is_no_such_user());
    }

    #[test]
    fn context_request_ids_are_stable() {
        assert_eq!(QueryContext::User.request_id(), 27);
        assert_eq!(QueryContext::Device.request_id(), 28);
    }

    #[test]
    fn state_serde_round_trip() {
        let json = serde_json::to_string(&AttestationState::NonEligible).unwrap();
        assert_eq!(json, "\"non_eligible\"");
        let back: AttestationState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AttestationState::NonEligible);
    }
}
