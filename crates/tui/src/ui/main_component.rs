//! Top-level layout: sidebar on the left, route details on the right, status
//! and hints along the bottom.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use sidenav_engine::{Visibility, evaluate};

use crate::app::{App, Effect};
use crate::ui::components::{Component, SidebarComponent, SidebarRow, StatusBarComponent};
use crate::ui::theme::{Theme, theme_helpers as th};

const SIDEBAR_WIDTH: u16 = 28;

#[derive(Debug, Default)]
pub struct MainView {
    sidebar: SidebarComponent,
    status_bar: StatusBarComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Global keys first, then the sidebar.
    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return vec![Effect::Quit];
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return vec![Effect::Quit],
            KeyCode::Char('c') => app.toggle_connected(),
            KeyCode::Char('r') => app.toggle_ready(),
            KeyCode::Char('a') => app.toggle_accounts(),
            KeyCode::Char('s') => app.toggle_elevated_key(),
            _ => {
                let effects = self.sidebar.handle_key_events(app, key);
                app.mark_dirty();
                return effects;
            }
        }
        Vec::new()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let [body, status, hints] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)]).areas(area);
        let [sidebar_area, detail_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(body);

        self.sidebar.render(frame, sidebar_area, app);
        self.render_details(frame, detail_area, app);
        self.status_bar.render(frame, status, app);

        let mut hint_spans = self.sidebar.get_hint_spans(app);
        hint_spans.extend(th::build_hint_spans(
            &app.theme,
            &[(" c", " Connect"), (" r", " Ready"), (" a", " Accounts"), (" s", " Elevated key"), (" q", " Quit")],
        ));
        frame.render_widget(Paragraph::new(Line::from(hint_spans)), hints);
    }

    /// Requirements and current verdict for the selected route.
    fn render_details(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let block = th::block(theme, Some(" Details "), false);
        let mut lines: Vec<Line> = Vec::new();
        match app.sidebar.selected_row() {
            Some(SidebarRow::Route { name, .. } | SidebarRow::Settings { name, .. }) => {
                if let Some(route) = app.model.table().get(name) {
                    let display = &route.display;
                    lines.push(Line::from(Span::styled(format!("/{}", route.name), theme.accent_emphasis_style())));
                    lines.push(Line::from(format!("group: {}", app.model.table().group_name(&route.group))));
                    lines.push(Line::from(format!("needs accounts: {}", display.needs_accounts)));
                    lines.push(Line::from(format!("needs elevated key: {}", display.needs_sudo)));
                    if !display.needs_api.is_empty() {
                        let needs: Vec<String> = display.needs_api.iter().map(ToString::to_string).collect();
                        lines.push(Line::from(format!("needs api: {}", needs.join(", "))));
                    }
                    let verdict = if route.is_settings() {
                        "always shown".to_string()
                    } else {
                        match evaluate(route, app.model.snapshot(), app.model.accounts().access()) {
                            Visibility::Visible => "visible".to_string(),
                            Visibility::Excluded(reason) => format!("excluded: {reason}"),
                        }
                    };
                    lines.push(Line::from(Span::styled(verdict, theme.text_secondary_style())));
                }
            }
            Some(SidebarRow::Link { label, href, .. }) => {
                lines.push(Line::from(Span::styled(label.clone(), theme.accent_emphasis_style())));
                lines.push(Line::from(Span::styled(href.to_string(), theme.link_style())));
            }
            _ => lines.push(Line::from(Span::styled("nothing selected", theme.text_muted_style()))),
        }

        let disabled: Vec<Line> = app
            .model
            .diagnostics()
            .entries()
            .map(|(_, message)| Line::from(Span::styled(message.to_string(), theme.status_warning())))
            .collect();
        if !disabled.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("disabled routes", theme.text_muted_style())));
            lines.extend(disabled);
        }

        frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use sidenav_engine::{MenuModel, default_route_table};
    use sidenav_types::{AccountSnapshot, CapabilitySnapshot, default_external_links};

    fn app() -> App {
        let model = MenuModel::new(
            default_route_table().expect("embedded routes"),
            CapabilitySnapshot::disconnected(),
            AccountSnapshot::default(),
            default_external_links(),
        );
        App::new(model)
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).expect("terminal");
        let mut view = MainView::new();
        terminal.draw(|frame| view.render(frame, frame.area(), app)).expect("draw");
        terminal.backend().buffer().content.iter().map(|cell| cell.symbol()).collect()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn renders_groups_settings_and_links_while_disconnected() {
        let mut app = app();
        let text = screen(&mut app);
        assert!(text.contains("Accounts"));
        assert!(text.contains("Explorer"));
        assert!(text.contains("Settings"));
        assert!(text.contains("GitHub"));
        assert!(!text.contains("Staking"));
        assert!(text.contains("disconnected"));
    }

    #[test]
    fn sidebar_title_shows_connecting_until_backend_is_ready() {
        let mut app = app();
        assert!(screen(&mut app).contains("Menu (connecting…)"));
        app.toggle_connected();
        app.toggle_ready();
        let text = screen(&mut app);
        assert!(text.contains(" Menu "));
        assert!(!text.contains("connecting"));
    }

    #[test]
    fn runtime_keys_toggle_inputs_and_quit() {
        let mut app = app();
        let mut view = MainView::new();
        view.handle_key_events(&mut app, press(KeyCode::Char('c')));
        view.handle_key_events(&mut app, press(KeyCode::Char('r')));
        assert!(app.model.snapshot().is_usable());
        assert_eq!(view.handle_key_events(&mut app, press(KeyCode::Esc)), vec![Effect::Quit]);
    }

    #[test]
    fn enter_navigates_to_selected_route() {
        let mut app = app();
        let mut view = MainView::new();
        view.handle_key_events(&mut app, press(KeyCode::Down));
        let effects = view.handle_key_events(&mut app, press(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::Navigate("addresses".into())]);
    }
}
