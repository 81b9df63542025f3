//! Engine tunables, constructor-injected.

use agora_types::VoteWeight;
use serde::{Deserialize, Serialize};

/// Policy knobs for the lifecycle engine.
///
/// The cancel threshold is deliberately separate from the quorum: the two
/// coincide by default, but an embedder can pin a global threshold without
/// touching quorum arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineParams {
    /// Against-weight at which a proposal is canceled early.
    /// `None` mirrors each proposal's own `minimum_votes`.
    pub cancel_threshold: Option<VoteWeight>,
    /// Shortest accepted voting window, in seconds.
    pub min_duration_secs: u64,
    /// Longest accepted voting window, in seconds. `None` means unbounded.
    pub max_duration_secs: Option<u64>,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            cancel_threshold: None,
            min_duration_secs: 1,
            max_duration_secs: None,
        }
    }
}
