//! Derived menu view handed to renderers.

use serde::{Deserialize, Serialize};

use crate::{ExternalLink, RouteDescriptor};

/// A named bucket of currently visible routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group identifier from the route table.
    pub id: String,
    /// Display name resolved from the group name mapping.
    pub name: String,
    pub routes: Vec<RouteDescriptor>,
}

impl Group {
    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.name.as_str())
    }
}

/// Everything a renderer needs to draw the menu for one state snapshot.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuView {
    pub groups: Vec<Group>,
    /// The settings route, rendered in its own section and never filtered.
    pub settings: Option<RouteDescriptor>,
    pub external_links: Vec<ExternalLink>,
    /// Set while the backend is not connected and ready.
    pub is_loading: bool,
}

impl MenuView {
    /// Number of visible routes across all groups.
    pub fn visible_route_count(&self) -> usize {
        self.groups.iter().map(|group| group.routes.len()).sum()
    }
}
