//! # Startup
//!
//! Process bootstrap shared by `main` and the integration tests:
//!
//! ```text
//! load config (silent) → resolve → install logger → report → tui::run
//! ```
//!
//! The logger is installed before anything about the config is reported, so
//! a broken config file still leaves its cause in the log. When the file
//! can't be loaded, the log location falls back to CLI flags, env vars and
//! defaults.

use log::{error, info, warn};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::Path;

use crate::core::config::{self, CliOverrides, GridConfig, ResolvedConfig};
use crate::error::StartupError;
use crate::tui;

/// Load and resolve config with logging in place. Does not touch the terminal.
pub fn prepare(
    config_path: Option<&Path>,
    cli: &CliOverrides,
) -> Result<ResolvedConfig, StartupError> {
    let loaded = config::load_config(config_path);

    let fallback = GridConfig::default();
    let file_config = loaded.as_ref().map_or(&fallback, |l| &l.config);
    let resolved = config::resolve(file_config, cli);

    init_logging(&resolved);
    for warning in &resolved.warnings {
        warn!("{}", warning);
    }

    loaded?.announce();
    info!("sudogrid starting up with {:?}", resolved);
    Ok(resolved)
}

pub fn start(config_path: Option<&Path>, cli: &CliOverrides) -> Result<(), StartupError> {
    let resolved = prepare(config_path, cli)?;
    tui::run(&resolved)?;
    Ok(())
}

/// Send a startup failure to the log and stderr.
pub fn report_failure(e: &StartupError) {
    error!("sudogrid failed: {}", e);
    log::logger().flush();
    eprintln!("sudogrid: {e}");
}

/// File logger; the TUI owns stdout. A log file that can't be created just
/// means no logging.
fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}
