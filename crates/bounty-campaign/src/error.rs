//! Campaign strategy error types.
//!
//! These never escape the resolver: strategies use them internally and the
//! resolver boundary degrades every fault to an empty campaign id.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("Store query failed: {0}")]
    Store(String),

    #[error("Legacy campaign API failed: {0}")]
    Legacy(String),

    #[error("Malformed license data: {0}")]
    MalformedLicense(#[from] serde_json::Error),
}

pub type CampaignResult<T> = Result<T, CampaignError>;
