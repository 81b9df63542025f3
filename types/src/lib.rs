//! Fundamental types for the Agora governance engine.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account addresses, timestamps, and the proposal/ballot records
//! that make up the governance state.

pub mod address;
pub mod proposal;
pub mod time;

pub use address::AccountAddress;
pub use proposal::{
    Ballot, BallotChoice, Proposal, ProposalDraft, ProposalId, ProposalStatus, VoteWeight,
};
pub use time::Timestamp;
