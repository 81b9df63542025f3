//! Token-weighted binary governance for Agora.
//!
//! Holders propose binary-choice decisions, cast weighted votes, and have
//! outcomes finalized deterministically once the deadline passes — or early,
//! when against-votes exceed a proposal's cancel threshold.
//!
//! State machine: `Pending → {Approved, Rejected, Canceled}`, all terminal.
//! Each voter counts exactly once per proposal; all vote arithmetic is
//! integer-only and checked.
//!
//! The engine assumes a single logical writer: mutating operations take
//! `&mut self`, so their total order is enforced by ownership. Reads borrow
//! immutably and may run concurrently.

pub mod engine;
pub mod error;
pub mod oracle;
pub mod params;
pub mod query;

pub use engine::GovernanceEngine;
pub use error::GovernanceError;
pub use oracle::{AnyCaller, ApprovalHook, ExecutorPolicy, SoleExecutor, TableWeightOracle, VoteWeightOracle};
pub use params::EngineParams;
pub use query::ProposalQuery;
