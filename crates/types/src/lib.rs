//! Shared data model for the sidenav menu: route descriptors, capability
//! snapshots, account state and the derived menu view.

pub mod account;
pub mod capability;
pub mod error;
pub mod link;
pub mod route;
pub mod view;

use std::path::Path;

use serde::de::DeserializeOwned;

pub use account::{AccessFlags, AccountSnapshot};
pub use capability::{CapabilityRequirement, CapabilitySet, CapabilitySnapshot, CapabilitySurface};
pub use error::LoadError;
pub use link::{ExternalLink, default_external_links};
pub use route::{DisplayRequirements, RouteDescriptor, RouteTable, SETTINGS_ROUTE};
pub use view::{Group, MenuView};

/// Deserialize a JSON or YAML document, choosing the format from the file extension.
pub fn load_from_path<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Some("yaml" | "yml") => serde_yaml::from_str(&content).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
        _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
    }
}

impl RouteTable {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        load_from_path(path)
    }
}

impl CapabilitySnapshot {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        load_from_path(path)
    }
}
