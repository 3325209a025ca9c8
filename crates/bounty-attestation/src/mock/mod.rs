//! Scripted attestation client for development and testing.
//!
//! The mock replays per-context outcomes (or errors) without any remote
//! service, and records how many times each context was queried so tests can
//! assert the fallback policy's call counts.

use crate::client::AttestationClient;
use crate::error::{AttestationError, AttestationResult};
use async_trait::async_trait;
use bounty_types::{AttestationOutcome, QueryContext};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// What the mock replays for one context
#[derive(Debug, Clone)]
enum Scripted {
    Outcome(AttestationOutcome),
    TransportError(String),
}

/// Scripted attestation client
#[derive(Default)]
pub struct MockAttestationClient {
    scripts: Arc<RwLock<HashMap<QueryContext, Scripted>>>,
    calls: Arc<RwLock<HashMap<QueryContext, u64>>>,
}

impl MockAttestationClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script an outcome to replay for `context`
    pub async fn script_outcome(&self, context: QueryContext, outcome: AttestationOutcome) {
        self.scripts
            .write()
            .await
            .insert(context, Scripted::Outcome(outcome));
    }

    /// Script a transport-level fault for `context`
    pub async fn script_error(&self, context: QueryContext, message: impl Into<String>) {
        self.scripts
            .write()
            .await
            .insert(context, Scripted::TransportError(message.into()));
    }

    /// Number of queries the mock has seen for `context`
    pub async fn calls(&self, context: QueryContext) -> u64 {
        self.calls.read().await.get(&context).copied().unwrap_or(0)
    }
}

#[async_trait]
impl AttestationClient for MockAttestationClient {
    async fn send(
        &self,
        context: QueryContext,
        _body: &str,
    ) -> AttestationResult<AttestationOutcome> {
        *self.calls.write().await.entry(context).or_insert(0) += 1;

        match self.scripts.read().await.get(&context) {
            Some(Scripted::Outcome(outcome)) => Ok(outcome.clone()),
            Some(Scripted::TransportError(message)) => {
                Err(AttestationError::Transport(message.clone()))
            }
            None => Err(AttestationError::Transport(format!(
                "no scripted outcome for context {}",
                context
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_calls_per_context() {
        let mock = MockAttestationClient::new();
        mock.script_outcome(
            QueryContext::User,
            AttestationOutcome::new(200, "{}", None),
        )
        .await;

        assert_eq!(mock.calls(QueryContext::User).await, 0);
        let _ = mock.send(QueryContext::User, "{}").await;
        let _ = mock.send(QueryContext::User, "{}").await;
        assert_eq!(mock.calls(QueryContext::User).await, 2);
        assert_eq!(mock.calls(QueryContext::Device).await, 0);
    }

    #[tokio::test]
    async fn unscripted_context_is_a_transport_fault() {
        let mock = MockAttestationClient::new();
        let err = mock.send(QueryContext::Device, "{}").await.unwrap_err();
        assert!(matches!(err, AttestationError::Transport(_)));
    }
}
