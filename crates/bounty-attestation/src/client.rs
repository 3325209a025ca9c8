//! Attestation client seam.
//!
//! The remote call itself (request signing, HTTP, platform SDK details) is
//! outside this crate's decision logic; implementations only have to honor
//! the contract below.

use crate::error::AttestationResult;
use async_trait::async_trait;
use bounty_types::{AttestationOutcome, QueryContext};
use std::sync::Arc;

/// Request body sent with every attestation query
pub const EMPTY_REQUEST_BODY: &str = "{}";

/// One remote attestation query for one context.
///
/// Implementations perform no retries; transport-level faults are `Err`,
/// never encoded inside a returned [`AttestationOutcome`].
#[async_trait]
pub trait AttestationClient: Send + Sync {
    /// Send one attestation request on behalf of `context`.
    ///
    /// `body` is always the empty JSON object in this system; it is part of
    /// the signature because the remote surface accepts one.
    async fn send(
        &self,
        context: QueryContext,
        body: &str,
    ) -> AttestationResult<AttestationOutcome>;
}

#[async_trait]
impl<C: AttestationClient + ?Sized> AttestationClient for Arc<C> {
    async fn send(
        &self,
        context: QueryContext,
        body: &str,
    ) -> AttestationResult<AttestationOutcome> {
        (**self).send(context, body).await
    }
}
