use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

/// One-line summary of the menu inputs: connection, accounts, elevated key.
#[derive(Debug, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    fn connection_span<'a, T: Theme + ?Sized>(app: &App, theme: &T) -> Span<'a> {
        let snapshot = app.model.snapshot();
        match (snapshot.connected, snapshot.ready) {
            (true, true) => Span::styled("● ready", theme.status_success()),
            (true, false) => Span::styled("● connecting…", theme.status_warning()),
            (false, _) => Span::styled("● disconnected", theme.status_error()),
        }
    }
}

impl Component for StatusBarComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &app.theme;
        let accounts = app.model.accounts();
        let mut spans = vec![
            Self::connection_span(app, theme),
            Span::styled(format!("  accounts: {}", accounts.accounts.len()), theme.text_secondary_style()),
            Span::styled(
                if accounts.has_elevated_key() { "  elevated key: held" } else { "  elevated key: -" },
                theme.text_secondary_style(),
            ),
        ];
        if let Some(status) = &app.status {
            spans.push(Span::styled(format!("  {status}"), theme.accent_primary_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(th::panel_style(theme)), area);
    }
}
