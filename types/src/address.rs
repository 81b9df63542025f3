//! Account address type with `agr_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An Agora account address, always prefixed with `agr_`.
///
/// The engine treats addresses as opaque identities; how they are derived
/// (key hashing, token-ledger accounts) is the embedder's concern.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// The standard prefix for all Agora account addresses.
    pub const PREFIX: &'static str = "agr_";

    /// Create a new account address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `agr_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with agr_");
        Self(s)
    }

    /// Parse an address, returning `None` if it is not well-formed.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.starts_with(Self::PREFIX) && s.len() > Self::PREFIX.len() {
            Some(Self(s))
        } else {
            None
        }
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
