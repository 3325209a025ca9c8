//! # Bounty Service
//!
//! Top-level orchestration for one acquisition's bounty determination.
//!
//! Composes two independent paths and renders both for the presentation
//! layer:
//!
//! - the attestation path (user → device fallback), whose faults are caught
//!   exactly once here and rendered as a negative-with-explanation string;
//! - the campaign attribution path, which never faults and degrades to the
//!   "no campaign found" placeholder.
//!
//! Nothing above this crate ever observes a raised fault: the output is
//! always two benign display strings.

pub mod config;
pub mod report;
pub mod service;

// Re-export main types
pub use config::ServiceConfig;
pub use report::{resolve_report, BountyReport, NO_CAMPAIGN_PLACEHOLDER};
pub use service::EligibilityService;
