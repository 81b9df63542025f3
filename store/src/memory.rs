//! In-memory reference backend.

use crate::error::StoreError;
use crate::proposal_store::ProposalStore;
use agora_types::{AccountAddress, Ballot, Proposal, ProposalId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Id-ordered in-memory proposal store.
///
/// Proposals live in a `BTreeMap`, so ascending-id enumeration (creation
/// order) falls out of iteration. The whole store serializes with bincode
/// via [`snapshot`](Self::snapshot) / [`restore`](Self::restore), including
/// the id allocator, so a restored store continues the id sequence instead
/// of reusing ids.
#[derive(Debug, Serialize, Deserialize)]
pub struct MemoryProposalStore {
    next_id: ProposalId,
    proposals: BTreeMap<ProposalId, Proposal>,
    ballots: BTreeMap<ProposalId, BTreeMap<AccountAddress, Ballot>>,
}

impl MemoryProposalStore {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            proposals: BTreeMap::new(),
            ballots: BTreeMap::new(),
        }
    }

    /// Serialize the full store state to bytes.
    pub fn snapshot(&self) -> Result<Vec<u8>, StoreError> {
        bincode::serialize(self).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Rebuild a store from a [`snapshot`](Self::snapshot) byte image.
    pub fn restore(bytes: &[u8]) -> Result<Self, StoreError> {
        bincode::deserialize(bytes).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

impl Default for MemoryProposalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProposalStore for MemoryProposalStore {
    fn insert(&mut self, mut proposal: Proposal) -> Result<ProposalId, StoreError> {
        let id = self.next_id;
        self.next_id = self.next_id.checked_add(1).ok_or(StoreError::IdExhausted)?;
        proposal.id = id;
        self.proposals.insert(id, proposal);
        Ok(id)
    }

    fn get(&self, id: ProposalId) -> Result<Proposal, StoreError> {
        self.proposals
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update(
        &mut self,
        id: ProposalId,
        mutator: &mut dyn FnMut(&mut Proposal),
    ) -> Result<(), StoreError> {
        let proposal = self.proposals.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        mutator(proposal);
        Ok(())
    }

    fn record_ballot(&mut self, id: ProposalId, ballot: Ballot) -> Result<(), StoreError> {
        if !self.proposals.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        let ballots = self.ballots.entry(id).or_default();
        if ballots.contains_key(&ballot.voter) {
            return Err(StoreError::DuplicateBallot {
                proposal: id,
                voter: ballot.voter,
            });
        }
        ballots.insert(ballot.voter.clone(), ballot);
        Ok(())
    }

    fn ballot(
        &self,
        id: ProposalId,
        voter: &AccountAddress,
    ) -> Result<Option<Ballot>, StoreError> {
        if !self.proposals.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        Ok(self
            .ballots
            .get(&id)
            .and_then(|b| b.get(voter))
            .cloned())
    }

    fn ballots(&self, id: ProposalId) -> Result<Vec<Ballot>, StoreError> {
        if !self.proposals.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        Ok(self
            .ballots
            .get(&id)
            .map(|b| b.values().cloned().collect())
            .unwrap_or_default())
    }

    fn ids(&self) -> Vec<ProposalId> {
        self.proposals.keys().copied().collect()
    }

    fn len(&self) -> usize {
        self.proposals.len()
    }
}
