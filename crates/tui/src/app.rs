//! Application state for the sidebar TUI.
//!
//! `App` owns the [`MenuModel`] and the sidebar's row/selection state. Every
//! change to the menu inputs goes through [`App::apply`], which recomputes the
//! view and resyncs the sidebar only when the view actually changed.

use sidenav_engine::{MenuEvent, MenuModel};
use sidenav_types::CapabilitySnapshot;
use tracing::info;
use url::Url;

use crate::ui::components::SidebarState;
use crate::ui::theme::NordTheme;

/// Account id used when toggling accounts on without a configured list.
const PLACEHOLDER_ACCOUNT: &str = "local-account";

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate(String),
    OpenLink(Url),
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub model: MenuModel,
    pub sidebar: SidebarState,
    pub theme: NordTheme,
    /// Route most recently navigated to.
    pub active_route: Option<String>,
    /// Transient message shown in the status bar.
    pub status: Option<String>,
    /// Accounts put aside while the account list is toggled off.
    parked_accounts: Vec<String>,
    dirty: bool,
}

impl App {
    pub fn new(model: MenuModel) -> Self {
        let sidebar = SidebarState::new(model.view());
        Self {
            model,
            sidebar,
            theme: NordTheme::new(),
            active_route: None,
            status: None,
            parked_accounts: Vec::new(),
            dirty: true,
        }
    }

    /// Feed an input change to the model and resync the sidebar if needed.
    pub fn apply(&mut self, event: MenuEvent) {
        if self.model.apply(event) {
            self.sidebar.sync(self.model.view());
        }
        self.dirty = true;
    }

    pub fn toggle_connected(&mut self) {
        let snapshot = self.model.snapshot();
        let next = CapabilitySnapshot::new(!snapshot.connected, snapshot.ready, snapshot.surface.clone());
        self.apply(MenuEvent::Connectivity(next));
    }

    pub fn toggle_ready(&mut self) {
        let snapshot = self.model.snapshot();
        let next = CapabilitySnapshot::new(snapshot.connected, !snapshot.ready, snapshot.surface.clone());
        self.apply(MenuEvent::Connectivity(next));
    }

    /// Remove all local accounts, or restore the ones removed earlier.
    pub fn toggle_accounts(&mut self) {
        let accounts = if self.model.accounts().has_accounts() {
            self.parked_accounts = self.model.accounts().accounts.clone();
            Vec::new()
        } else if self.parked_accounts.is_empty() {
            vec![PLACEHOLDER_ACCOUNT.to_string()]
        } else {
            std::mem::take(&mut self.parked_accounts)
        };
        self.apply(MenuEvent::Accounts(accounts));
    }

    /// Hand the elevated key to the first local account, or take it away.
    pub fn toggle_elevated_key(&mut self) {
        if self.model.accounts().has_elevated_key() {
            self.apply(MenuEvent::ElevatedKey(None));
            return;
        }
        match self.model.accounts().accounts.first().cloned() {
            Some(account) => self.apply(MenuEvent::ElevatedKey(Some(account))),
            None => {
                self.status = Some("no local account can hold the elevated key".to_string());
                self.dirty = true;
            }
        }
    }

    /// Execute an effect. Returns `false` when the application should exit.
    pub fn run_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::Navigate(route) => {
                info!(route = %route, "navigate");
                self.sidebar.set_route(&route);
                self.status = Some(format!("/{route}"));
                self.active_route = Some(route);
            }
            Effect::OpenLink(href) => {
                info!(href = %href, "open external link");
                self.status = Some(href.to_string());
            }
            Effect::Quit => return false,
        }
        self.dirty = true;
        true
    }

    /// Mark the route matching a location path (e.g. `/explorer/query`) as active.
    pub fn set_location(&mut self, path: &str) -> bool {
        let Some(name) = self.model.active_route(path).map(|route| route.name.clone()) else {
            return false;
        };
        self.sidebar.set_route(&name);
        self.active_route = Some(name);
        self.dirty = true;
        true
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidenav_engine::default_route_table;
    use sidenav_types::{AccountSnapshot, CapabilitySet};

    fn app() -> App {
        let surface: CapabilitySet = ["tx.sudo.setKey", "query.staking.erasRewardPoints"].into_iter().collect();
        let model = MenuModel::new(
            default_route_table().expect("embedded routes"),
            CapabilitySnapshot::new(false, true, surface),
            AccountSnapshot::new(vec!["alice".into()], None),
            Vec::new(),
        );
        App::new(model)
    }

    fn visible(app: &App, route: &str) -> bool {
        app.model.view().groups.iter().any(|group| group.route_names().any(|name| name == route))
    }

    #[test]
    fn connection_toggle_reveals_api_routes() {
        let mut app = app();
        assert!(!visible(&app, "staking"));
        app.toggle_connected();
        assert!(visible(&app, "staking"));
        assert!(app.sidebar.rows.iter().any(|row| matches!(row, crate::ui::components::SidebarRow::Route { name, .. } if name == "staking")));
    }

    #[test]
    fn elevated_key_toggle_follows_local_accounts() {
        let mut app = app();
        app.toggle_connected();
        assert!(!visible(&app, "sudo"));
        app.toggle_elevated_key();
        assert!(visible(&app, "sudo"));

        app.toggle_accounts();
        assert!(!visible(&app, "sudo"));
        assert!(!visible(&app, "extrinsics"));
        app.toggle_accounts();
        assert_eq!(app.model.accounts().accounts, vec!["alice".to_string()]);
        assert!(visible(&app, "sudo"));
    }

    #[test]
    fn elevated_key_needs_an_account() {
        let mut app = app();
        app.toggle_accounts();
        app.toggle_elevated_key();
        assert!(app.status.as_deref().is_some_and(|status| status.contains("elevated key")));
    }

    #[test]
    fn navigate_effect_marks_active_route() {
        let mut app = app();
        assert!(app.run_effect(Effect::Navigate("explorer".into())));
        assert_eq!(app.active_route.as_deref(), Some("explorer"));
        assert!(app.take_dirty());
        assert!(!app.take_dirty());
        assert!(!app.run_effect(Effect::Quit));
    }

    #[test]
    fn location_selects_matching_route() {
        let mut app = app();
        assert!(app.set_location("/explorer/query/0x00"));
        assert_eq!(app.active_route.as_deref(), Some("explorer"));
        assert!(!app.set_location("/unknown"));
    }
}
