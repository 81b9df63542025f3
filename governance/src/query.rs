//! Read-only projections over the proposal store.

use agora_store::ProposalStore;
use agora_types::{Proposal, ProposalStatus, Timestamp};

/// Immutable-borrow view for presentation-layer enumeration.
///
/// Holding a `ProposalQuery` borrows the store for reading only, so queries
/// may run alongside each other and always observe a consistent snapshot of
/// committed state.
pub struct ProposalQuery<'a, S: ProposalStore> {
    store: &'a S,
}

impl<'a, S: ProposalStore> ProposalQuery<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// All proposals still open for voting at `now`: pending status and a
    /// deadline at or after `now`. Ascending id order (creation order).
    pub fn active(&self, now: Timestamp) -> Vec<Proposal> {
        self.collect(|p| p.status == ProposalStatus::Pending && p.deadline >= now)
    }

    /// Every proposal ever created, ascending id order.
    pub fn all(&self) -> Vec<Proposal> {
        self.collect(|_| true)
    }

    /// Proposals in a given state, ascending id order.
    pub fn by_status(&self, status: ProposalStatus) -> Vec<Proposal> {
        self.collect(|p| p.status == status)
    }

    fn collect(&self, mut keep: impl FnMut(&Proposal) -> bool) -> Vec<Proposal> {
        // ids() is ascending, so the output is in creation order for free.
        self.store
            .ids()
            .into_iter()
            .filter_map(|id| self.store.get(id).ok())
            .filter(|p| keep(p))
            .collect()
    }
}
