//! Core lifecycle engine — manages proposals from creation to a terminal
//! state.
//!
//! All mutating methods take `&mut self`: the single-writer total order the
//! vote-accounting invariants depend on is enforced by ownership, not by an
//! internal lock.

use crate::error::GovernanceError;
use crate::oracle::{ApprovalHook, ExecutorPolicy, VoteWeightOracle};
use crate::params::EngineParams;
use crate::query::ProposalQuery;
use agora_store::{ProposalStore, StoreError};
use agora_types::{
    AccountAddress, Ballot, BallotChoice, Proposal, ProposalDraft, ProposalId, ProposalStatus,
    Timestamp,
};

/// The governance engine — creates proposals, accounts votes, finalizes
/// outcomes.
///
/// Owns the injected [`ProposalStore`] and consults the weight oracle and
/// executor policy through trait seams. Every operation is all-or-nothing:
/// a rejected precondition leaves the stored proposal untouched.
pub struct GovernanceEngine<S: ProposalStore> {
    store: S,
    params: EngineParams,
    weight_oracle: Box<dyn VoteWeightOracle>,
    executor_policy: Box<dyn ExecutorPolicy>,
    approval_hook: Option<Box<dyn ApprovalHook>>,
}

impl<S: ProposalStore> GovernanceEngine<S> {
    pub fn new(
        store: S,
        params: EngineParams,
        weight_oracle: Box<dyn VoteWeightOracle>,
        executor_policy: Box<dyn ExecutorPolicy>,
    ) -> Self {
        Self {
            store,
            params,
            weight_oracle,
            executor_policy,
            approval_hook: None,
        }
    }

    /// Attach the post-commit hook fired on `Pending → Approved`.
    pub fn with_approval_hook(mut self, hook: Box<dyn ApprovalHook>) -> Self {
        self.approval_hook = Some(hook);
        self
    }

    /// Create a proposal from a validated draft. Returns the new id.
    ///
    /// Ids are allocated by the store under the single-writer order, so
    /// they are strictly increasing with no gaps or repeats.
    pub fn create_proposal(
        &mut self,
        draft: ProposalDraft,
        now: Timestamp,
    ) -> Result<ProposalId, GovernanceError> {
        self.validate_draft(&draft)?;

        let deadline = now
            .checked_add_secs(draft.duration_secs)
            .ok_or_else(|| GovernanceError::InvalidArgument("deadline overflows".into()))?;
        let cancel_threshold = self
            .params
            .cancel_threshold
            .unwrap_or(draft.minimum_votes);
        let proposer = draft.proposer.clone();

        let proposal = Proposal {
            id: 0, // assigned by the store
            proposer: draft.proposer,
            title: draft.title,
            description: draft.description,
            option_a: draft.option_a,
            option_b: draft.option_b,
            created_at: now,
            deadline,
            minimum_votes: draft.minimum_votes,
            cancel_threshold,
            votes_for: 0,
            votes_against: 0,
            status: ProposalStatus::Pending,
        };
        let id = self.store.insert(proposal)?;
        tracing::info!(id, proposer = %proposer, deadline = %deadline, "proposal created");
        Ok(id)
    }

    /// Cast a weighted vote on a pending proposal.
    ///
    /// `in_favor = true` counts toward option A, `false` toward option B.
    /// Each identity votes at most once per proposal; recording the ballot
    /// and updating the tally (including the early-cancellation check on
    /// against-votes) commit as one logical operation.
    pub fn cast_vote(
        &mut self,
        id: ProposalId,
        voter: &AccountAddress,
        in_favor: bool,
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        let proposal = self.fetch(id)?;
        if proposal.status.is_terminal() {
            return Err(GovernanceError::InvalidState {
                id,
                status: proposal.status,
            });
        }
        if now > proposal.deadline {
            return Err(GovernanceError::Expired {
                id,
                deadline: proposal.deadline,
                now,
            });
        }
        if self.store.ballot(id, voter)?.is_some() {
            return Err(GovernanceError::AlreadyVoted {
                id,
                voter: voter.clone(),
            });
        }
        let weight = self.weight_oracle.weight_of(voter, now);
        if weight == 0 {
            return Err(GovernanceError::NoVotingPower {
                voter: voter.clone(),
            });
        }

        // Checked before any write so a rejected vote mutates nothing.
        let (new_for, new_against) = if in_favor {
            let tally = proposal
                .votes_for
                .checked_add(weight)
                .ok_or(GovernanceError::Overflow(id))?;
            (tally, proposal.votes_against)
        } else {
            let tally = proposal
                .votes_against
                .checked_add(weight)
                .ok_or(GovernanceError::Overflow(id))?;
            (proposal.votes_for, tally)
        };
        let cancels = !in_favor && new_against >= proposal.cancel_threshold;

        let ballot = Ballot {
            voter: voter.clone(),
            choice: if in_favor {
                BallotChoice::For
            } else {
                BallotChoice::Against
            },
            weight,
            cast_at: now,
        };
        match self.store.record_ballot(id, ballot) {
            Ok(()) => {}
            Err(StoreError::DuplicateBallot { .. }) => {
                return Err(GovernanceError::AlreadyVoted {
                    id,
                    voter: voter.clone(),
                })
            }
            Err(e) => return Err(e.into()),
        }
        self.store.update(id, &mut |p| {
            p.votes_for = new_for;
            p.votes_against = new_against;
            if cancels {
                p.status = ProposalStatus::Canceled;
            }
        })?;

        tracing::debug!(id, voter = %voter, weight, in_favor, "vote recorded");
        if cancels {
            tracing::info!(id, votes_against = new_against, "proposal canceled early");
        }
        Ok(())
    }

    /// Finalize an expired pending proposal.
    ///
    /// The outcome is a pure function of the stored counts: below quorum is
    /// rejected; at or above quorum, option A must strictly outweigh option
    /// B to be approved. A second call on the same proposal fails with
    /// `InvalidState` and mutates nothing.
    pub fn execute_proposal(
        &mut self,
        id: ProposalId,
        caller: &AccountAddress,
        now: Timestamp,
    ) -> Result<ProposalStatus, GovernanceError> {
        // Authorization precedes every state read and write, fail-closed.
        if !self.executor_policy.may_execute(caller) {
            return Err(GovernanceError::Unauthorized {
                caller: caller.clone(),
            });
        }

        let proposal = self.fetch(id)?;
        if proposal.status.is_terminal() {
            return Err(GovernanceError::InvalidState {
                id,
                status: proposal.status,
            });
        }
        if now <= proposal.deadline {
            return Err(GovernanceError::NotYetExpired {
                id,
                deadline: proposal.deadline,
                now,
            });
        }

        let total = proposal.total_votes().ok_or(GovernanceError::Overflow(id))?;
        let outcome = if total < proposal.minimum_votes {
            ProposalStatus::Rejected
        } else if proposal.votes_for > proposal.votes_against {
            ProposalStatus::Approved
        } else {
            ProposalStatus::Rejected
        };

        self.store.update(id, &mut |p| p.status = outcome)?;
        tracing::info!(
            id,
            outcome = %outcome,
            votes_for = proposal.votes_for,
            votes_against = proposal.votes_against,
            "proposal executed"
        );

        // Post-commit only: the hook never interleaves with the mutation
        // and cannot roll it back.
        if outcome == ProposalStatus::Approved {
            if let Some(hook) = &self.approval_hook {
                hook.on_approved(id);
            }
        }
        Ok(outcome)
    }

    /// Get a proposal by id.
    pub fn proposal(&self, id: ProposalId) -> Result<Proposal, GovernanceError> {
        self.fetch(id)
    }

    /// A specific voter's ballot on a proposal, if any.
    pub fn ballot(
        &self,
        id: ProposalId,
        voter: &AccountAddress,
    ) -> Result<Option<Ballot>, GovernanceError> {
        match self.store.ballot(id, voter) {
            Ok(b) => Ok(b),
            Err(StoreError::NotFound(_)) => Err(GovernanceError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// All ballots recorded for a proposal (audit surface).
    pub fn ballots(&self, id: ProposalId) -> Result<Vec<Ballot>, GovernanceError> {
        match self.store.ballots(id) {
            Ok(b) => Ok(b),
            Err(StoreError::NotFound(_)) => Err(GovernanceError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Number of proposals ever created.
    pub fn proposal_count(&self) -> usize {
        self.store.len()
    }

    /// Read-only projection over the store.
    pub fn query(&self) -> ProposalQuery<'_, S> {
        ProposalQuery::new(&self.store)
    }

    /// Borrow the underlying store (e.g. for snapshots).
    pub fn store(&self) -> &S {
        &self.store
    }

    fn fetch(&self, id: ProposalId) -> Result<Proposal, GovernanceError> {
        match self.store.get(id) {
            Ok(p) => Ok(p),
            Err(StoreError::NotFound(_)) => Err(GovernanceError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    fn validate_draft(&self, draft: &ProposalDraft) -> Result<(), GovernanceError> {
        if draft.title.trim().is_empty() {
            return Err(GovernanceError::InvalidArgument(
                "title must not be empty".into(),
            ));
        }
        if draft.option_a.trim().is_empty() || draft.option_b.trim().is_empty() {
            return Err(GovernanceError::InvalidArgument(
                "both option labels must be non-empty".into(),
            ));
        }
        if draft.minimum_votes == 0 {
            return Err(GovernanceError::InvalidArgument(
                "minimum_votes must be positive".into(),
            ));
        }
        if draft.duration_secs < self.params.min_duration_secs.max(1) {
            return Err(GovernanceError::InvalidArgument(format!(
                "duration {}s below minimum {}s",
                draft.duration_secs,
                self.params.min_duration_secs.max(1)
            )));
        }
        if let Some(max) = self.params.max_duration_secs {
            if draft.duration_secs > max {
                return Err(GovernanceError::InvalidArgument(format!(
                    "duration {}s above maximum {}s",
                    draft.duration_secs, max
                )));
            }
        }
        Ok(())
    }
}
