use indexmap::IndexMap;
use sidenav_engine::{DiagnosticLog, compute_visible_groups, default_route_table, evaluate, visible_groups};
use sidenav_types::{
    AccessFlags, CapabilityRequirement, CapabilitySet, CapabilitySnapshot, DisplayRequirements, Group, RouteDescriptor,
};

fn accounts_and_staking() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::new("accounts", "accounts"),
        RouteDescriptor::new("staking", "network").with_display(DisplayRequirements {
            needs_api: vec![CapabilityRequirement::from("staking.ledger")],
            ..Default::default()
        }),
    ]
}

fn snapshot(connected: bool, ready: bool, capabilities: &[&str]) -> CapabilitySnapshot {
    CapabilitySnapshot::new(connected, ready, capabilities.iter().copied().collect::<CapabilitySet>())
}

fn every_snapshot() -> Vec<CapabilitySnapshot> {
    let mut out = Vec::new();
    for connected in [false, true] {
        for ready in [false, true] {
            out.push(snapshot(connected, ready, &[]));
            out.push(snapshot(connected, ready, &["staking.ledger", "tx.sudo.sudo"]));
        }
    }
    out
}

fn every_access() -> [AccessFlags; 4] {
    [
        AccessFlags::new(false, false),
        AccessFlags::new(false, true),
        AccessFlags::new(true, false),
        AccessFlags::new(true, true),
    ]
}

fn names(groups: &[Group]) -> Vec<(String, Vec<String>)> {
    groups
        .iter()
        .map(|group| (group.id.clone(), group.route_names().map(str::to_string).collect()))
        .collect()
}

#[test]
fn not_ready_snapshot_shows_only_api_independent_routes() {
    let groups = compute_visible_groups(
        &accounts_and_staking(),
        &IndexMap::new(),
        &snapshot(false, false, &[]),
        AccessFlags::new(true, false),
        &mut DiagnosticLog::new(),
    );
    assert_eq!(names(&groups), vec![("accounts".to_string(), vec!["accounts".to_string()])]);
}

#[test]
fn ready_snapshot_with_capability_shows_both_groups() {
    let groups = compute_visible_groups(
        &accounts_and_staking(),
        &IndexMap::new(),
        &snapshot(true, true, &["staking.ledger"]),
        AccessFlags::new(true, false),
        &mut DiagnosticLog::new(),
    );
    assert_eq!(
        names(&groups),
        vec![
            ("accounts".to_string(), vec!["accounts".to_string()]),
            ("network".to_string(), vec!["staking".to_string()]),
        ]
    );
}

#[test]
fn hidden_routes_are_never_visible() {
    let route = RouteDescriptor::new("js", "developer").with_display(DisplayRequirements {
        hidden: true,
        needs_api: vec![CapabilityRequirement::from("staking.ledger")],
        ..Default::default()
    });
    for snapshot in every_snapshot() {
        for access in every_access() {
            assert!(!evaluate(&route, &snapshot, access).is_visible());
        }
    }
}

#[test]
fn settings_never_appears_in_groups() {
    let table = default_route_table().expect("embedded routes");
    for snapshot in every_snapshot() {
        for access in every_access() {
            let groups = visible_groups(&table, &snapshot, access, &mut DiagnosticLog::new());
            assert!(groups.iter().flat_map(|group| group.route_names()).all(|name| name != "settings"));
        }
    }
}

#[test]
fn needs_accounts_without_accounts_is_hidden_even_when_ready() {
    let route = RouteDescriptor::new("transfer", "accounts").with_display(DisplayRequirements {
        needs_accounts: true,
        needs_api: vec![CapabilityRequirement::from("staking.ledger")],
        ..Default::default()
    });
    assert!(!evaluate(&route, &snapshot(true, true, &["staking.ledger"]), AccessFlags::new(false, true)).is_visible());
}

#[test]
fn api_independent_routes_ignore_connectivity() {
    let plain = RouteDescriptor::new("addresses", "accounts");
    let needs_accounts = RouteDescriptor::new("extrinsics", "developer").with_display(DisplayRequirements {
        needs_accounts: true,
        ..Default::default()
    });
    for snapshot in every_snapshot() {
        for access in every_access() {
            assert!(evaluate(&plain, &snapshot, access).is_visible());
            assert_eq!(evaluate(&needs_accounts, &snapshot, access).is_visible(), access.has_accounts);
        }
    }
}

#[test]
fn same_group_routes_keep_relative_order() {
    let routes = vec![
        RouteDescriptor::new("explorer", "network"),
        RouteDescriptor::new("accounts", "accounts"),
        RouteDescriptor::new("validators", "network"),
        RouteDescriptor::new("parachains", "network"),
    ];
    let groups = compute_visible_groups(
        &routes,
        &IndexMap::new(),
        &snapshot(false, false, &[]),
        AccessFlags::default(),
        &mut DiagnosticLog::new(),
    );
    let network: Vec<_> = groups[0].route_names().collect();
    assert_eq!(network, vec!["explorer", "validators", "parachains"]);
}

#[test]
fn evaluation_is_idempotent_and_logs_once() {
    let table = default_route_table().expect("embedded routes");
    let ready = snapshot(true, true, &[]);
    let access = AccessFlags::new(true, false);
    let mut log = DiagnosticLog::new();

    let first = visible_groups(&table, &ready, access, &mut log);
    let logged = log.len();
    let second = visible_groups(&table, &ready, access, &mut log);

    assert_eq!(first, second);
    assert_eq!(log.len(), logged);
    assert!(log.get("sudo").is_some_and(|message| message.contains("elevated key not available")));
    assert!(log.get("staking").is_some_and(|message| message.contains("query.staking.erasRewardPoints")));
}

#[test]
fn alternative_capabilities_satisfy_requirement() {
    let table = default_route_table().expect("embedded routes");
    let ready = snapshot(true, true, &["tx.balances.transfer"]);
    let groups = visible_groups(&table, &ready, AccessFlags::new(true, false), &mut DiagnosticLog::new());
    let accounts: Vec<_> = groups[0].route_names().collect();
    assert_eq!(accounts, vec!["accounts", "addresses", "transfer"]);
}
