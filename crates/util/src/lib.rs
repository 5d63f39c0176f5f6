//! Configuration loading and filesystem helpers shared by the sidenav binaries.

pub mod config;
pub mod path_processing;

pub use config::{CONFIG_PATH_ENV, ConfigError, SidenavConfig, default_config_path, default_log_path};
pub use path_processing::{app_config_dir, expand_tilde};
