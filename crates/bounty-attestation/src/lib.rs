//! # Bounty Attestation
//!
//! Attestation resolution for bounty eligibility.
//!
//! This crate asks the remote store attestation service whether a single app
//! acquisition accrues to a sponsored campaign, and reconciles the per-context
//! answers into one boolean. Two query contexts exist: the acquiring user and
//! the acquiring device.
//!
//! ## Resolution flow
//!
//! ```text
//! resolve_eligible()
//!        │
//!        ▼
//! ┌──────────────────────────────────────────────┐
//! │ 1. Query the USER context                    │
//! │ 2. Eligible/NonEligible → that is the answer │
//! │ 3. Unknown (no such user) → query DEVICE     │
//! │ 4. Device Eligible → yes, otherwise no       │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! `Unknown` is produced by exactly one signal: the "no such user" triple
//! (no status, empty body, the well-known extended error). Every other
//! anomaly either parses into an authoritative answer or raises, so the
//! caller can surface diagnostic detail.
//!
//! Client backends:
//!
//! - **MockAttestationClient** (feature `mock`): scripted outcomes for
//!   development and testing
//! - **HttpAttestationClient** (feature `http`): reqwest-backed client for
//!   production

pub mod client;
pub mod error;
pub mod resolver;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "mock")]
pub mod mock;

// Re-export main types
pub use client::{AttestationClient, EMPTY_REQUEST_BODY};
pub use error::{AttestationError, AttestationResult};
pub use resolver::AttestationResolver;

#[cfg(feature = "http")]
pub use http::{HttpAttestationClient, HttpAttestationClientConfig};

#[cfg(feature = "mock")]
pub use mock::MockAttestationClient;
