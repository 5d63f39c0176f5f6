//! Component trait shared by the sidebar and the status bar.
//!
//! Components own only local UI behavior. They read and mutate the `App`
//! handed to them and report anything with wider reach back as `Effect`s.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::{App, Effect};

pub(crate) trait Component {
    /// Handle a key press routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Draw the component into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App);

    /// Key hints shown in the status bar while this component has focus.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
