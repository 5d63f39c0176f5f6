use sidenav_types::{ExternalLink, MenuView, RouteDescriptor};
use url::Url;

/// What activating a sidebar row does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    /// Switch to the named route.
    Navigate(String),
    /// Open an off-application link.
    OpenLink(Url),
}

/// One rendered line of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarRow {
    /// Group display name; not selectable.
    Header(String),
    Route { label: String, name: String },
    Settings { label: String, name: String },
    Link { label: String, href: Url },
    Separator,
}

impl SidebarRow {
    fn from_route(route: &RouteDescriptor) -> Self {
        Self::Route {
            label: route.label().to_string(),
            name: route.name.clone(),
        }
    }

    fn from_link(link: &ExternalLink) -> Self {
        Self::Link {
            label: link.text.clone(),
            href: link.href.clone(),
        }
    }

    pub fn action(&self) -> Option<SidebarAction> {
        match self {
            Self::Route { name, .. } | Self::Settings { name, .. } => Some(SidebarAction::Navigate(name.clone())),
            Self::Link { href, .. } => Some(SidebarAction::OpenLink(href.clone())),
            Self::Header(_) | Self::Separator => None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.action().is_some()
    }

    fn route_name(&self) -> Option<&str> {
        match self {
            Self::Route { name, .. } | Self::Settings { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }
}

/// Flattened rows of the current menu view plus the selection cursor.
///
/// Rows are rebuilt whenever the view changes; the selection follows the
/// previously selected route when it is still present.
#[derive(Debug, Default, Clone)]
pub struct SidebarState {
    pub rows: Vec<SidebarRow>,
    /// Index into `rows`; always a selectable row when any exists.
    pub selected_index: Option<usize>,
    /// The backend is not usable yet, so capability-gated routes are missing.
    pub is_loading: bool,
}

impl SidebarState {
    pub fn new(view: &MenuView) -> Self {
        let mut state = Self::default();
        state.sync(view);
        state
    }

    /// Rebuild rows from a fresh view, keeping the selected route when possible.
    pub fn sync(&mut self, view: &MenuView) {
        let previous = self.selected_row().and_then(|row| row.route_name().map(str::to_string));
        self.rows = build_rows(view);
        self.is_loading = view.is_loading;
        self.selected_index = previous
            .and_then(|name| self.rows.iter().position(|row| row.route_name() == Some(name.as_str())))
            .or_else(|| self.rows.iter().position(SidebarRow::is_selectable));
    }

    pub fn selected_row(&self) -> Option<&SidebarRow> {
        self.selected_index.and_then(|index| self.rows.get(index))
    }

    /// Move to the next (or previous) selectable row, wrapping at the ends.
    pub fn cycle_selection(&mut self, forward: bool) {
        let len = self.rows.len();
        let Some(current) = self.selected_index else {
            return;
        };
        for step in 1..=len {
            let index = if forward { (current + step) % len } else { (current + len - step % len) % len };
            if self.rows[index].is_selectable() {
                self.selected_index = Some(index);
                return;
            }
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = self.rows.iter().position(SidebarRow::is_selectable);
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.rows.iter().rposition(SidebarRow::is_selectable);
    }

    /// Select the row for `route` if it is rendered.
    pub fn set_route(&mut self, route: &str) -> bool {
        match self.rows.iter().position(|row| row.route_name() == Some(route)) {
            Some(index) => {
                self.selected_index = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn activate(&self) -> Option<SidebarAction> {
        self.selected_row().and_then(SidebarRow::action)
    }
}

fn build_rows(view: &MenuView) -> Vec<SidebarRow> {
    let mut rows = Vec::with_capacity(view.visible_route_count() + view.groups.len() + view.external_links.len() + 2);
    for group in &view.groups {
        rows.push(SidebarRow::Header(group.name.clone()));
        rows.extend(group.routes.iter().map(SidebarRow::from_route));
    }
    if view.settings.is_some() || !view.external_links.is_empty() {
        rows.push(SidebarRow::Separator);
    }
    if let Some(settings) = &view.settings {
        rows.push(SidebarRow::Settings {
            label: settings.label().to_string(),
            name: settings.name.clone(),
        });
    }
    rows.extend(view.external_links.iter().map(SidebarRow::from_link));
    rows
}
