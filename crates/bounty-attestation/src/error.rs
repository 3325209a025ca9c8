//! Attestation error types

use thiserror::Error;

/// Faults raised by the attestation client or resolver.
///
/// These propagate unshaped to the single catch point in the eligibility
/// service; nothing in this crate converts them into default answers.
#[derive(Debug, Error)]
pub enum AttestationError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed attestation body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

pub type AttestationResult<T> = Result<T, AttestationError>;
