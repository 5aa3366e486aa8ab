//! Application Layer
//!
//! Orchestrates between the CLI and the domain/infrastructure layers:
//! - `proposal_service`: ROI calculation and proposal lifecycle
//! - `query_service`: read-side views over companies, proposals and stats

pub mod proposal_service;
pub mod query_service;

pub use proposal_service::{calculate, ProposalRecord, ProposalService};
