//! Proposal storage trait.

use crate::StoreError;
use agora_types::{AccountAddress, Ballot, Proposal, ProposalId};

/// Data authority for proposals and their per-voter ballot sets.
///
/// Implementations must serialize all mutating operations relative to each
/// other: one operation fully completes before the next begins, and two
/// updates to the same proposal never interleave. The engine enforces this
/// by taking `&mut self`; backends with interior mutability must provide an
/// equivalent guarantee themselves.
pub trait ProposalStore {
    /// Store a new proposal, allocating the next id.
    ///
    /// The store owns id assignment: the `id` field of the passed record is
    /// overwritten with the allocated value, which is returned. Ids start at
    /// 1 and are strictly increasing, never reused.
    fn insert(&mut self, proposal: Proposal) -> Result<ProposalId, StoreError>;

    /// Get a proposal by id.
    fn get(&self, id: ProposalId) -> Result<Proposal, StoreError>;

    /// Apply `mutator` to the stored record atomically.
    ///
    /// Either the closure runs against the live record and every change it
    /// makes is committed together, or (unknown id) nothing is touched. No
    /// partial write is ever observable.
    fn update(
        &mut self,
        id: ProposalId,
        mutator: &mut dyn FnMut(&mut Proposal),
    ) -> Result<(), StoreError>;

    /// Record a voter's ballot for a proposal.
    ///
    /// Fails with [`StoreError::DuplicateBallot`] if the voter already has a
    /// ballot for this id; the existing ballot is left untouched.
    fn record_ballot(&mut self, id: ProposalId, ballot: Ballot) -> Result<(), StoreError>;

    /// Get a specific voter's ballot on a proposal, if any.
    fn ballot(
        &self,
        id: ProposalId,
        voter: &AccountAddress,
    ) -> Result<Option<Ballot>, StoreError>;

    /// Get all ballots for a proposal, in voter order.
    fn ballots(&self, id: ProposalId) -> Result<Vec<Ballot>, StoreError>;

    /// All stored proposal ids, ascending.
    fn ids(&self) -> Vec<ProposalId>;

    /// Number of stored proposals.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
