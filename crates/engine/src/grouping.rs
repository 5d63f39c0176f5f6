//! Folding the route table into visible, named groups.

use indexmap::IndexMap;
use sidenav_types::{AccessFlags, CapabilitySnapshot, CapabilitySurface, Group, RouteDescriptor, RouteTable};
use tracing::debug;

use crate::diagnostics::DiagnosticLog;
use crate::visibility::is_visible;

/// Group the routes by identifier and keep only those currently visible.
///
/// Groups appear in the order their identifier is first seen in `routes`;
/// routes keep their input order inside a group. Groups left without any
/// visible route are dropped.
pub fn compute_visible_groups<S: CapabilitySurface>(
    routes: &[RouteDescriptor],
    group_names: &IndexMap<String, String>,
    snapshot: &CapabilitySnapshot<S>,
    access: AccessFlags,
    log: &mut DiagnosticLog,
) -> Vec<Group> {
    let mut folded: IndexMap<&str, Group> = IndexMap::new();
    for route in routes {
        folded
            .entry(route.group.as_str())
            .or_insert_with(|| Group {
                id: route.group.clone(),
                name: group_names.get(&route.group).cloned().unwrap_or_else(|| route.group.clone()),
                routes: Vec::new(),
            })
            .routes
            .push(route.clone());
    }

    let groups: Vec<Group> = folded
        .into_values()
        .filter_map(|mut group| {
            group.routes.retain(|route| is_visible(route, snapshot, access, log));
            (!group.routes.is_empty()).then_some(group)
        })
        .collect();

    debug!(
        routes = routes.len(),
        groups = groups.len(),
        connected = snapshot.connected,
        ready = snapshot.ready,
        "computed visible menu groups"
    );
    groups
}

/// [`compute_visible_groups`] over a whole route table.
pub fn visible_groups<S: CapabilitySurface>(
    table: &RouteTable,
    snapshot: &CapabilitySnapshot<S>,
    access: AccessFlags,
    log: &mut DiagnosticLog,
) -> Vec<Group> {
    compute_visible_groups(&table.routes, &table.groups, snapshot, access, log)
}

/// The settings route, if the table has one. Never filtered.
pub fn settings_route(routes: &[RouteDescriptor]) -> Option<&RouteDescriptor> {
    routes.iter().find(|route| route.is_settings())
}

/// First route whose `/name` prefixes the location path.
pub fn active_route<'a>(routes: &'a [RouteDescriptor], path: &str) -> Option<&'a RouteDescriptor> {
    routes
        .iter()
        .find(|route| path.strip_prefix('/').is_some_and(|rest| rest.starts_with(route.name.as_str())))
}
