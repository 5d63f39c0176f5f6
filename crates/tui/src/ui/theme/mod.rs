pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use nord::NordTheme;
pub use roles::Theme;
