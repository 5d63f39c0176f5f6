//! Owned menu state that recomputes its view when an input changes.
//!
//! The host feeds [`MenuEvent`]s as the connection, account list or
//! elevated-key lookup change; each event triggers one synchronous
//! recomputation. Callers that share a model across threads wrap it in a
//! mutex so the diagnostic record is only touched by one evaluation at a time.

use sidenav_types::{AccountSnapshot, CapabilitySnapshot, ExternalLink, MenuView, RouteDescriptor, RouteTable};
use tracing::debug;

use crate::diagnostics::DiagnosticLog;
use crate::grouping::active_route;
use crate::view::build_menu_view;

/// A change in one of the menu's external inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// New connectivity state and capability surface.
    Connectivity(CapabilitySnapshot),
    /// New list of local accounts.
    Accounts(Vec<String>),
    /// New result of the elevated-key lookup.
    ElevatedKey(Option<String>),
}

#[derive(Debug)]
pub struct MenuModel {
    table: RouteTable,
    snapshot: CapabilitySnapshot,
    accounts: AccountSnapshot,
    external_links: Vec<ExternalLink>,
    log: DiagnosticLog,
    view: MenuView,
}

impl MenuModel {
    pub fn new(
        table: RouteTable,
        snapshot: CapabilitySnapshot,
        accounts: AccountSnapshot,
        external_links: Vec<ExternalLink>,
    ) -> Self {
        let mut model = Self {
            table,
            snapshot,
            accounts,
            external_links,
            log: DiagnosticLog::new(),
            view: MenuView::default(),
        };
        model.recompute();
        model
    }

    /// Apply an input change and recompute. Returns `true` when the view changed.
    pub fn apply(&mut self, event: MenuEvent) -> bool {
        match event {
            MenuEvent::Connectivity(snapshot) => self.snapshot = snapshot,
            MenuEvent::Accounts(accounts) => self.accounts.accounts = accounts,
            MenuEvent::ElevatedKey(key) => self.accounts.elevated_key = key,
        }
        let changed = self.recompute();
        debug!(changed, "applied menu event");
        changed
    }

    fn recompute(&mut self) -> bool {
        let next = build_menu_view(
            &self.table,
            &self.snapshot,
            self.accounts.access(),
            &self.external_links,
            &mut self.log,
        );
        if next == self.view {
            return false;
        }
        self.view = next;
        true
    }

    pub fn view(&self) -> &MenuView {
        &self.view
    }

    pub fn snapshot(&self) -> &CapabilitySnapshot {
        &self.snapshot
    }

    pub fn accounts(&self) -> &AccountSnapshot {
        &self.accounts
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.log
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn active_route(&self, path: &str) -> Option<&RouteDescriptor> {
        active_route(&self.table.routes, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidenav_types::{CapabilityRequirement, CapabilitySet, DisplayRequirements};

    fn table() -> RouteTable {
        RouteTable::new(
            vec![
                RouteDescriptor::new("accounts", "accounts"),
                RouteDescriptor::new("sudo", "developer").with_display(DisplayRequirements {
                    needs_sudo: true,
                    needs_api: vec![CapabilityRequirement::from("tx.sudo.sudo")],
                    ..Default::default()
                }),
            ],
            Default::default(),
        )
    }

    fn connected() -> CapabilitySnapshot {
        CapabilitySnapshot::new(true, true, ["tx.sudo.sudo"].into_iter().collect::<CapabilitySet>())
    }

    #[test]
    fn elevated_key_lookup_reveals_sudo_route() {
        let accounts = AccountSnapshot::new(vec!["alice".into()], None);
        let mut model = MenuModel::new(table(), connected(), accounts, Vec::new());
        assert_eq!(model.view().visible_route_count(), 1);

        assert!(model.apply(MenuEvent::ElevatedKey(Some("alice".into()))));
        assert_eq!(model.view().groups.len(), 2);

        assert!(model.apply(MenuEvent::Accounts(Vec::new())));
        assert_eq!(model.view().visible_route_count(), 1);
    }

    #[test]
    fn unchanged_view_reports_no_change() {
        let mut model = MenuModel::new(table(), CapabilitySnapshot::disconnected(), AccountSnapshot::default(), Vec::new());
        assert!(!model.apply(MenuEvent::Accounts(Vec::new())));
        assert!(model.apply(MenuEvent::Connectivity(connected())));
        assert!(!model.view().is_loading);
    }

    #[test]
    fn repeated_exclusion_logs_once() {
        let mut model = MenuModel::new(table(), connected(), AccountSnapshot::default(), Vec::new());
        model.apply(MenuEvent::Connectivity(connected()));
        model.apply(MenuEvent::Accounts(vec!["bob".into()]));
        assert_eq!(model.diagnostics().len(), 1);
        assert_eq!(model.diagnostics().get("sudo"), Some("Disabling sudo: elevated key not available"));
    }
}
