//! Proposal and ballot records.

use crate::address::AccountAddress;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonically increasing proposal identifier, starting at 1.
pub type ProposalId = u64;

/// Integer voting power attributed to an identity by the weight oracle.
pub type VoteWeight = u128;

/// Lifecycle state of a proposal.
///
/// `Pending` is the only non-terminal state; every transition out of it is
/// final.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Open for voting until the deadline passes.
    Pending,
    /// Quorum met and option A won; the approval hook has fired.
    Approved,
    /// Quorum missed, or option A did not win.
    Rejected,
    /// Against-votes exceeded the cancel threshold before the deadline.
    Canceled,
}

impl ProposalStatus {
    /// Whether this state admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Canceled => "canceled",
        };
        write!(f, "{}", s)
    }
}

/// The two sides of a binary proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallotChoice {
    /// A vote for option A.
    For,
    /// A vote for option B.
    Against,
}

/// A single binary-choice governance item with a deadline and quorum
/// requirement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Unique id, assigned at creation, never reused.
    pub id: ProposalId,
    /// Who proposed it.
    pub proposer: AccountAddress,
    pub title: String,
    pub description: String,
    /// Label for the "for" side.
    pub option_a: String,
    /// Label for the "against" side.
    pub option_b: String,
    pub created_at: Timestamp,
    /// Voting closes after this instant (`created_at` + requested duration).
    pub deadline: Timestamp,
    /// Minimum total weighted vote count for the proposal to be eligible
    /// for approval.
    pub minimum_votes: VoteWeight,
    /// Against-weight that, once reached, cancels the proposal before its
    /// deadline.
    pub cancel_threshold: VoteWeight,
    /// Weighted sum of votes for option A. Only ever increases.
    pub votes_for: VoteWeight,
    /// Weighted sum of votes for option B. Only ever increases.
    pub votes_against: VoteWeight,
    pub status: ProposalStatus,
}

impl Proposal {
    /// Total weighted votes cast so far, or `None` on overflow.
    pub fn total_votes(&self) -> Option<VoteWeight> {
        self.votes_for.checked_add(self.votes_against)
    }

    /// Whether the proposal has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Caller-supplied creation parameters, before validation and id assignment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposalDraft {
    pub title: String,
    pub description: String,
    /// Voting window length in seconds, added to the creation time.
    pub duration_secs: u64,
    pub minimum_votes: VoteWeight,
    pub option_a: String,
    pub option_b: String,
    pub proposer: AccountAddress,
}

/// A single voter's recorded choice and weight for one proposal.
///
/// Exists to enforce the one-vote-per-identity invariant; never mutated
/// after insertion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pub voter: AccountAddress,
    pub choice: BallotChoice,
    pub weight: VoteWeight,
    pub cast_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_is_non_terminal() {
        assert!(!ProposalStatus::Pending.is_terminal());
        assert!(ProposalStatus::Approved.is_terminal());
        assert!(ProposalStatus::Rejected.is_terminal());
        assert!(ProposalStatus::Canceled.is_terminal());
    }

    #[test]
    fn test_total_votes_detects_overflow() {
        let mut proposal = Proposal {
            id: 1,
            proposer: AccountAddress::new("agr_alice"),
            title: "t".to_string(),
            description: String::new(),
            option_a: "A".to_string(),
            option_b: "B".to_string(),
            created_at: Timestamp::new(0),
            deadline: Timestamp::new(100),
            minimum_votes: 1,
            cancel_threshold: 1,
            votes_for: u128::MAX,
            votes_against: 0,
            status: ProposalStatus::Pending,
        };
        assert_eq!(proposal.total_votes(), Some(u128::MAX));
        proposal.votes_against = 1;
        assert_eq!(proposal.total_votes(), None);
    }
}
