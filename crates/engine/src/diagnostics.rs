//! One-shot record of why routes were disabled.
//!
//! Visibility is re-evaluated on every state change, so the same exclusion
//! would otherwise be logged over and over. The record remembers the first
//! message per route and suppresses everything after it.

use indexmap::IndexMap;

/// Append-only map of route name to the first disablement message logged for it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiagnosticLog {
    entries: IndexMap<String, String>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` under `key` unless the key already has an entry.
    ///
    /// Returns `true` when the entry is new and the caller should emit it.
    pub fn record_once(&mut self, key: &str, message: impl Into<String>) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        self.entries.insert(key.to_string(), message.into());
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Entries in the order they were first recorded.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, message)| (key.as_str(), message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
