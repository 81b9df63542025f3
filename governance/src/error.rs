use agora_store::StoreError;
use agora_types::{AccountAddress, ProposalId, ProposalStatus, Timestamp};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("invalid proposal argument: {0}")]
    InvalidArgument(String),

    #[error("proposal {0} not found")]
    NotFound(ProposalId),

    #[error("proposal {id} is {status}, expected pending")]
    InvalidState {
        id: ProposalId,
        status: ProposalStatus,
    },

    #[error("voting on proposal {id} closed at {deadline}, now {now}")]
    Expired {
        id: ProposalId,
        deadline: Timestamp,
        now: Timestamp,
    },

    #[error("proposal {id} deadline {deadline} has not passed, now {now}")]
    NotYetExpired {
        id: ProposalId,
        deadline: Timestamp,
        now: Timestamp,
    },

    #[error("{voter} has already voted on proposal {id}")]
    AlreadyVoted {
        id: ProposalId,
        voter: AccountAddress,
    },

    #[error("{voter} has no voting power")]
    NoVotingPower { voter: AccountAddress },

    #[error("{caller} is not permitted to execute proposals")]
    Unauthorized { caller: AccountAddress },

    #[error("vote arithmetic overflow on proposal {0}")]
    Overflow(ProposalId),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
