//! Route descriptors and the route table they are loaded from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::capability::CapabilityRequirement;

/// Reserved route name that is surfaced in its own section instead of the
/// general grouping.
pub const SETTINGS_ROUTE: &str = "settings";

/// Conditions a route must satisfy before it is offered in the menu.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayRequirements {
    /// Never shown when set, regardless of any other state.
    #[serde(alias = "isHidden")]
    pub hidden: bool,
    /// Requires at least one local account.
    #[serde(alias = "needsAccounts")]
    pub needs_accounts: bool,
    /// Capabilities the connected backend must expose.
    #[serde(alias = "needsApi")]
    pub needs_api: Vec<CapabilityRequirement>,
    /// Requires the elevated key to be held by a local account.
    #[serde(alias = "needsSudo")]
    pub needs_sudo: bool,
}

impl DisplayRequirements {
    /// True when the route does not depend on any backend capability.
    pub fn is_api_independent(&self) -> bool {
        self.needs_api.is_empty()
    }
}

/// A navigable section of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Unique identifier, also the first path segment of the route.
    pub name: String,
    /// Identifier of the group this route is rendered under.
    pub group: String,
    /// Label shown in the menu. Falls back to `name` when empty.
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub display: DisplayRequirements,
}

impl RouteDescriptor {
    pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            text: String::new(),
            icon: None,
            display: DisplayRequirements::default(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_display(mut self, display: DisplayRequirements) -> Self {
        self.display = display;
        self
    }

    /// Label to render, falling back to the route name.
    pub fn label(&self) -> &str {
        if self.text.is_empty() { &self.name } else { &self.text }
    }

    pub fn is_settings(&self) -> bool {
        self.name == SETTINGS_ROUTE
    }
}

/// Ordered route list plus the display names of the groups they reference.
///
/// Route order is significant: it drives both the order of routes within a
/// group and the order in which groups appear.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    /// Group identifier to display name.
    #[serde(default)]
    pub groups: IndexMap<String, String>,
    #[serde(default)]
    pub routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>, groups: IndexMap<String, String>) -> Self {
        Self { groups, routes }
    }

    /// Display name for a group, using the identifier when no name is registered.
    pub fn group_name<'a>(&'a self, group: &'a str) -> &'a str {
        self.groups.get(group).map(String::as_str).unwrap_or(group)
    }

    pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
