//! External collaborator seams: weight oracle, executor policy, approval hook.
//!
//! The engine only ever calls through these traits; it owns none of the
//! state behind them. How a weight is derived (balance snapshot, staking
//! position) is the embedder's concern.

use agora_types::{AccountAddress, ProposalId, Timestamp, VoteWeight};
use std::collections::HashMap;

/// Balance-lookup capability consumed by `cast_vote`.
pub trait VoteWeightOracle {
    /// Integral stake weight of `voter` at `at`.
    ///
    /// Zero means "no voting power"; any positive value is a valid weight.
    fn weight_of(&self, voter: &AccountAddress, at: Timestamp) -> VoteWeight;
}

/// Address → weight table standing in for a token balance snapshot.
///
/// Unlisted addresses weigh zero.
#[derive(Clone, Debug, Default)]
pub struct TableWeightOracle {
    weights: HashMap<AccountAddress, VoteWeight>,
}

impl TableWeightOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) an address's weight.
    pub fn set(&mut self, voter: AccountAddress, weight: VoteWeight) {
        self.weights.insert(voter, weight);
    }
}

impl FromIterator<(AccountAddress, VoteWeight)> for TableWeightOracle {
    fn from_iter<I: IntoIterator<Item = (AccountAddress, VoteWeight)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

impl VoteWeightOracle for TableWeightOracle {
    fn weight_of(&self, voter: &AccountAddress, _at: Timestamp) -> VoteWeight {
        self.weights.get(voter).copied().unwrap_or(0)
    }
}

/// Access-control policy consumed by `execute_proposal`. Fail-closed: a
/// `false` here stops execution before any state is read or written.
pub trait ExecutorPolicy {
    fn may_execute(&self, caller: &AccountAddress) -> bool;
}

/// Exactly one designated address may finalize proposals.
#[derive(Clone, Debug)]
pub struct SoleExecutor {
    executor: AccountAddress,
}

impl SoleExecutor {
    pub fn new(executor: AccountAddress) -> Self {
        Self { executor }
    }
}

impl ExecutorPolicy for SoleExecutor {
    fn may_execute(&self, caller: &AccountAddress) -> bool {
        *caller == self.executor
    }
}

/// Open execution — any caller may finalize an expired proposal.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyCaller;

impl ExecutorPolicy for AnyCaller {
    fn may_execute(&self, _caller: &AccountAddress) -> bool {
        true
    }
}

/// Post-commit side effect for the `Pending → Approved` transition.
///
/// Invoked exactly once per approved proposal, after the status write is
/// committed, never interleaved with it. The hook returns nothing: a failed
/// collaborator must not roll back the transition.
pub trait ApprovalHook {
    fn on_approved(&self, id: ProposalId);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> AccountAddress {
        AccountAddress::new(format!("agr_{}", s))
    }

    #[test]
    fn test_table_oracle_unlisted_address_weighs_zero() {
        let mut oracle = TableWeightOracle::new();
        oracle.set(addr("alice"), 7);
        assert_eq!(oracle.weight_of(&addr("alice"), Timestamp::EPOCH), 7);
        assert_eq!(oracle.weight_of(&addr("bob"), Timestamp::EPOCH), 0);
    }

    #[test]
    fn test_sole_executor_admits_only_its_address() {
        let policy = SoleExecutor::new(addr("admin"));
        assert!(policy.may_execute(&addr("admin")));
        assert!(!policy.may_execute(&addr("mallory")));
    }
}
