//! # Sidenav Engine
//!
//! Decides which menu routes are visible for the current backend connection,
//! account list and elevated-key lookup, and folds them into named groups.
//!
//! ```rust
//! use sidenav_engine::{DiagnosticLog, build_menu_view, default_route_table};
//! use sidenav_types::{AccessFlags, CapabilitySnapshot, default_external_links};
//!
//! let table = default_route_table()?;
//! let mut log = DiagnosticLog::new();
//! let view = build_menu_view(
//!     &table,
//!     &CapabilitySnapshot::disconnected(),
//!     AccessFlags::default(),
//!     &default_external_links(),
//!     &mut log,
//! );
//! assert!(view.is_loading);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod diagnostics;
pub mod grouping;
pub mod model;
pub mod view;
pub mod visibility;

use sidenav_types::RouteTable;

pub use diagnostics::DiagnosticLog;
pub use grouping::{active_route, compute_visible_groups, settings_route, visible_groups};
pub use model::{MenuEvent, MenuModel};
pub use view::build_menu_view;
pub use visibility::{HiddenReason, Visibility, evaluate, is_visible, missing_capabilities};

const DEFAULT_ROUTES: &str = include_str!("../assets/routes.yaml");

/// Route table shipped with the binary.
pub fn default_route_table() -> Result<RouteTable, serde_yaml::Error> {
    serde_yaml::from_str(DEFAULT_ROUTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_parses_and_has_settings() {
        let table = default_route_table().expect("embedded routes");
        assert!(settings_route(&table.routes).is_some());
        assert!(table.routes.iter().all(|route| table.groups.contains_key(&route.group)));
    }
}
