pub mod component;
pub mod sidebar;
pub mod status_bar;

pub(crate) use component::Component;
pub use sidebar::{SidebarAction, SidebarComponent, SidebarRow, SidebarState};
pub use status_bar::StatusBarComponent;
