//! Vertical menu sidebar.
//!
//! Renders a [`sidenav_types::MenuView`] as group headers followed by their
//! routes, then the settings route and the external links below a separator.
//! Up/Down/Home/End move the selection over selectable rows and Enter
//! activates it.

mod sidebar_component;
mod state;

pub use sidebar_component::SidebarComponent;
pub use state::{SidebarAction, SidebarRow, SidebarState};
