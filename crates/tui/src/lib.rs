//! # Sidenav TUI
//!
//! Terminal rendering of the sidenav menu. The sidebar shows the groups the
//! engine currently considers visible, the settings route and the external
//! links; a details pane explains why the selected route is or is not shown.
//! Runtime keys toggle the connection, readiness, local accounts and the
//! elevated key so the re-evaluation can be observed live.

mod app;
mod ui;

use anyhow::Result;
use sidenav_engine::MenuModel;

pub use app::{App, Effect};
pub use ui::components::{SidebarAction, SidebarRow, SidebarState};
pub use ui::theme::{NordTheme, Theme};

/// Runs the TUI until the user quits.
///
/// `location` marks the route matching that path as active on start.
///
/// # Errors
///
/// Terminal setup failures (raw mode, alternate screen) and draw errors.
pub async fn run(model: MenuModel, location: Option<&str>) -> Result<()> {
    let mut app = App::new(model);
    if let Some(path) = location {
        app.set_location(path);
    }
    ui::runtime::run_app(app).await
}
