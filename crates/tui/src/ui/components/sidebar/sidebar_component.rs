use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

use super::{SidebarAction, SidebarRow};
use crate::app::{App, Effect};
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

/// Renders the sidebar rows and turns key presses into navigation effects.
#[derive(Debug)]
pub struct SidebarComponent {
    /// Title for the surrounding block. When `None`, no title is shown.
    pub title: Option<String>,
}

const LOADING_TITLE: &str = " Menu (connecting…) ";

impl SidebarComponent {
    pub fn new() -> Self {
        Self {
            title: Some(" Menu ".to_string()),
        }
    }

    fn row_item<'a, T: Theme + ?Sized>(row: &'a SidebarRow, active_route: Option<&str>, width: u16, theme: &T) -> ListItem<'a> {
        let line = match row {
            SidebarRow::Header(name) => Line::from(Span::styled(
                name.as_str(),
                theme.text_muted_style().add_modifier(Modifier::BOLD),
            )),
            SidebarRow::Route { label, name, .. } | SidebarRow::Settings { label, name, .. } => {
                let style = if active_route == Some(name.as_str()) {
                    theme.accent_emphasis_style()
                } else {
                    theme.text_primary_style()
                };
                Line::from(vec![Span::raw("  "), Span::styled(label.as_str(), style)])
            }
            SidebarRow::Link { label, .. } => Line::from(vec![
                Span::raw("  "),
                Span::styled(label.as_str(), theme.link_style()),
                Span::styled(" ↗", theme.text_muted_style()),
            ]),
            SidebarRow::Separator => Line::from(Span::styled(
                "─".repeat(usize::from(width)),
                Style::default().fg(theme.roles().divider),
            )),
        };
        ListItem::new(line)
    }

    fn push_action_effect(effects: &mut Vec<Effect>, action: Option<SidebarAction>) {
        match action {
            Some(SidebarAction::Navigate(route)) => effects.push(Effect::Navigate(route)),
            Some(SidebarAction::OpenLink(href)) => effects.push(Effect::OpenLink(href)),
            None => {}
        }
    }
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let state = &mut app.sidebar;
        let mut effects = vec![];
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => state.cycle_selection(true),
            KeyCode::Up | KeyCode::Char('k') => state.cycle_selection(false),
            KeyCode::Home => state.select_first(),
            KeyCode::End => state.select_last(),
            KeyCode::Enter => Self::push_action_effect(&mut effects, state.activate()),
            _ => {}
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &app.theme;
        let title = match self.title.as_deref() {
            Some(_) if app.sidebar.is_loading => Some(LOADING_TITLE),
            title => title,
        };
        let block = th::block(theme, title, true);
        let inner_width = area.width.saturating_sub(2);
        let items: Vec<ListItem> = app
            .sidebar
            .rows
            .iter()
            .map(|row| Self::row_item(row, app.active_route.as_deref(), inner_width, theme))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(theme.selection_style().add_modifier(Modifier::BOLD));
        let mut list_state = ListState::default().with_selected(app.sidebar.selected_index);
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&app.theme, &[(" Enter", " Open"), (" ↑/↓", " Navigate")])
    }
}
