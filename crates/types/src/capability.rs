//! Backend capabilities and the connectivity snapshot routes are checked against.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of a route's capability list.
///
/// Serialized untagged so a route table can list either a bare name
/// (`tx.staking.bond`) or a list of alternatives (`[tx.a, tx.b]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CapabilityRequirement {
    /// The named capability must exist.
    One(String),
    /// At least one of the named capabilities must exist.
    AnyOf(Vec<String>),
}

impl CapabilityRequirement {
    /// Whether the surface satisfies this requirement.
    pub fn is_satisfied_by<S: CapabilitySurface + ?Sized>(&self, surface: &S) -> bool {
        match self {
            Self::One(name) => surface.has_capability(name),
            Self::AnyOf(names) => names.iter().any(|name| surface.has_capability(name)),
        }
    }
}

impl From<&str> for CapabilityRequirement {
    fn from(name: &str) -> Self {
        Self::One(name.to_string())
    }
}

impl fmt::Display for CapabilityRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(name) => f.write_str(name),
            Self::AnyOf(names) => write!(f, "({})", names.join(" | ")),
        }
    }
}

/// Anything that can answer whether a named capability is currently exposed.
pub trait CapabilitySurface {
    fn has_capability(&self, name: &str) -> bool;
}

impl<S: CapabilitySurface + ?Sized> CapabilitySurface for &S {
    fn has_capability(&self, name: &str) -> bool {
        (**self).has_capability(name)
    }
}

/// Set of dotted capability names such as `query.staking.ledger`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet(BTreeSet<String>);

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl CapabilitySurface for CapabilitySet {
    fn has_capability(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}

impl<T: Into<String>> FromIterator<T> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Connectivity state together with the capability surface it exposes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySnapshot<S = CapabilitySet> {
    #[serde(default, alias = "isApiConnected")]
    pub connected: bool,
    #[serde(default, alias = "isApiReady")]
    pub ready: bool,
    #[serde(default, alias = "capabilities")]
    pub surface: S,
}

impl<S> CapabilitySnapshot<S> {
    pub fn new(connected: bool, ready: bool, surface: S) -> Self {
        Self {
            connected,
            ready,
            surface,
        }
    }

    /// True when capability checks can be trusted: connected and ready.
    pub fn is_usable(&self) -> bool {
        self.connected && self.ready
    }

    /// The menu is still loading while the backend is not usable.
    pub fn is_loading(&self) -> bool {
        !self.is_usable()
    }
}

impl CapabilitySnapshot<CapabilitySet> {
    /// Snapshot of a backend that has not connected yet.
    pub fn disconnected() -> Self {
        Self::default()
    }
}

impl<S: CapabilitySurface> CapabilitySurface for CapabilitySnapshot<S> {
    fn has_capability(&self, name: &str) -> bool {
        self.surface.has_capability(name)
    }
}
