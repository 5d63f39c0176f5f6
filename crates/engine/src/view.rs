//! Assembling the full menu view from the current inputs.

use sidenav_types::{AccessFlags, CapabilitySnapshot, CapabilitySurface, ExternalLink, MenuView, RouteTable};

use crate::diagnostics::DiagnosticLog;
use crate::grouping::{settings_route, visible_groups};

/// Build the view a renderer draws: visible groups, the settings route and
/// the external links.
pub fn build_menu_view<S: CapabilitySurface>(
    table: &RouteTable,
    snapshot: &CapabilitySnapshot<S>,
    access: AccessFlags,
    external_links: &[ExternalLink],
    log: &mut DiagnosticLog,
) -> MenuView {
    MenuView {
        groups: visible_groups(table, snapshot, access, log),
        settings: settings_route(&table.routes).cloned(),
        external_links: external_links.to_vec(),
        is_loading: snapshot.is_loading(),
    }
}
