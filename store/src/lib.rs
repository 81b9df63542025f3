//! Proposal storage for the Agora governance engine.
//!
//! Every storage backend implements the [`ProposalStore`] trait; the rest of
//! the workspace depends only on the trait. [`MemoryProposalStore`] is the
//! reference backend: an id-ordered in-memory map with bincode
//! snapshot/restore for persistence across restarts.
//!
//! All mutating operations are expected to be serialized by the caller (the
//! engine takes `&mut self`); see the trait docs for the exact contract.

pub mod error;
pub mod memory;
pub mod proposal_store;

pub use error::StoreError;
pub use memory::MemoryProposalStore;
pub use proposal_store::ProposalStore;
