//! Local accounts and the elevated-key holder reported by the backend.

use serde::{Deserialize, Serialize};

/// Accounts available locally plus the account currently holding the
/// elevated (administrative) key, if the backend reports one.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    #[serde(default)]
    pub accounts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevated_key: Option<String>,
}

impl AccountSnapshot {
    pub fn new(accounts: Vec<String>, elevated_key: Option<String>) -> Self {
        Self { accounts, elevated_key }
    }

    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    /// The elevated key only counts when one of the local accounts holds it.
    pub fn has_elevated_key(&self) -> bool {
        self.elevated_key
            .as_deref()
            .is_some_and(|key| self.accounts.iter().any(|account| account == key))
    }

    pub fn access(&self) -> AccessFlags {
        AccessFlags {
            has_accounts: self.has_accounts(),
            has_elevated_key: self.has_elevated_key(),
        }
    }
}

/// The two account-derived booleans the visibility predicate consumes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessFlags {
    pub has_accounts: bool,
    pub has_elevated_key: bool,
}

impl AccessFlags {
    pub fn new(has_accounts: bool, has_elevated_key: bool) -> Self {
        Self {
            has_accounts,
            has_elevated_key,
        }
    }
}
