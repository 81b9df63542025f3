use agora_types::{AccountAddress, ProposalId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("proposal not found: {0}")]
    NotFound(ProposalId),

    #[error("duplicate ballot from {voter} on proposal {proposal}")]
    DuplicateBallot {
        proposal: ProposalId,
        voter: AccountAddress,
    },

    #[error("proposal id space exhausted")]
    IdExhausted,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
