use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use sidenav_engine::{DiagnosticLog, MenuModel, build_menu_view, default_route_table};
use sidenav_types::{AccountSnapshot, CapabilitySnapshot, RouteTable};
use sidenav_util::{SidenavConfig, default_log_path};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

mod output;

#[derive(Debug, Parser)]
#[command(name = "sidenav", version, about = "Dashboard navigation menu for the current connection and accounts")]
struct Cli {
    #[command(flatten)]
    inputs: MenuInputs,
    /// Starts the TUI when omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the visible menu groups.
    Groups {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Show the menu in the terminal sidebar.
    Tui {
        /// Location path whose route is marked active, e.g. `/explorer`.
        #[arg(long)]
        location: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Debug, Args)]
struct MenuInputs {
    /// Route table (.yaml, .yml or .json). Defaults to the configured or built-in table.
    #[arg(long, global = true)]
    routes: Option<PathBuf>,
    /// Capability snapshot (.json, .yaml or .yml). Defaults to disconnected.
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,
    /// Local account id; repeat for several accounts.
    #[arg(long = "account", global = true)]
    accounts: Vec<String>,
    /// Account currently holding the elevated key.
    #[arg(long, global = true)]
    elevated_key: Option<String>,
}

impl MenuInputs {
    fn route_table(&self, config: &SidenavConfig) -> Result<RouteTable> {
        match self.routes.clone().or_else(|| config.route_table_path()) {
            Some(path) => RouteTable::from_path(&path).with_context(|| format!("loading route table {}", path.display())),
            None => default_route_table().context("parsing built-in route table"),
        }
    }

    fn snapshot(&self) -> Result<CapabilitySnapshot> {
        match &self.snapshot {
            Some(path) => CapabilitySnapshot::from_path(path).with_context(|| format!("loading snapshot {}", path.display())),
            None => Ok(CapabilitySnapshot::disconnected()),
        }
    }

    fn accounts(&self) -> AccountSnapshot {
        AccountSnapshot::new(self.accounts.clone(), self.elevated_key.clone())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(std::io::stderr)?;
    let in_tui = !matches!(cli.command, Some(Command::Groups { .. }));
    init_tracing(&config, in_tui)?;

    let table = cli.inputs.route_table(&config)?;
    let snapshot = cli.inputs.snapshot()?;
    let accounts = cli.inputs.accounts();
    debug!(routes = table.len(), accounts = accounts.accounts.len(), "loaded menu inputs");

    match cli.command {
        Some(Command::Groups { format }) => {
            let mut log = DiagnosticLog::new();
            let view = build_menu_view(&table, &snapshot, accounts.access(), &config.external_links(), &mut log);
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&view)?),
                Format::Text => print!("{}", output::render_text(&view)),
            }
            Ok(())
        }
        Some(Command::Tui { location }) => {
            let model = MenuModel::new(table, snapshot, accounts, config.external_links());
            sidenav_tui::run(model, location.as_deref()).await
        }
        None => {
            let model = MenuModel::new(table, snapshot, accounts, config.external_links());
            sidenav_tui::run(model, None).await
        }
    }
}

/// Load the config under a temporary subscriber so a warning about a
/// malformed file is written before the real subscriber exists.
fn load_config<W>(make_writer: W) -> Result<SidenavConfig>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(make_writer)
        .finish();
    tracing::subscriber::with_default(subscriber, SidenavConfig::load).context("loading sidenav config")
}

/// Logs go to stderr for one-shot commands and to a file while the TUI owns
/// the terminal.
fn init_tracing(config: &SidenavConfig, in_tui: bool) -> Result<()> {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .or_else(|| config.log_filter.clone())
        .unwrap_or_else(|| "info".into());
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::new(filter));
    if in_tui {
        let path = default_log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        let _ = builder.with_ansi(false).with_writer(std::sync::Mutex::new(file)).try_init();
    } else {
        let _ = builder.with_writer(std::io::stderr).try_init();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use sidenav_util::CONFIG_PATH_ENV;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_inputs_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sidenav",
            "groups",
            "--format",
            "text",
            "--account",
            "alice",
            "--account",
            "bob",
            "--elevated-key",
            "bob",
        ])
        .expect("parse");
        assert!(matches!(cli.command, Some(Command::Groups { format: Format::Text })));
        assert!(cli.inputs.accounts().has_elevated_key());
    }

    #[test]
    fn malformed_config_warning_reaches_the_log() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").expect("write");
        let path = path.to_str().expect("utf-8 temp path").to_string();
        let logs = CapturedLogs::default();
        let writer = logs.clone();

        let config = temp_env::with_vars([(CONFIG_PATH_ENV, Some(path.as_str())), ("RUST_LOG", None)], || {
            load_config(move || writer.clone()).expect("load config")
        });

        assert_eq!(config, SidenavConfig::default());
        let output = logs.contents();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("Failed to parse config file"), "{output}");
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["sidenav"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(cli.inputs.snapshot().expect("default snapshot").is_loading());
    }
}
