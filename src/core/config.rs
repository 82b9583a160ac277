//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sudogrid/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! default is generated so users can discover all options.
//!
//! Loading and resolving stay silent because the log file location is itself
//! configured here. Their findings are reported after the logger starts, via
//! [`LoadedConfig::announce`] and [`ResolvedConfig::warnings`].

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GridConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub placeholder: Option<String>,
    pub focused_color: Option<u8>,
    pub cell_color: Option<u8>,
    pub help_color: Option<u8>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "sudogrid.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_PLACEHOLDER: char = '.';
pub const DEFAULT_FOCUSED_COLOR: u8 = 205;
pub const DEFAULT_HELP_COLOR: u8 = 240;

// ============================================================================
// Resolved Config (concrete values, no Options except where "unset" is meaningful)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub placeholder: char,
    pub focused_color: u8,
    /// `None` keeps the terminal's default foreground.
    pub cell_color: Option<u8>,
    pub help_color: u8,
    /// Problems found while resolving, logged once the logger is installed.
    pub warnings: Vec<String>,
}

/// Values taken from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub placeholder: Option<char>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.sudogrid/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sudogrid").join("config.toml"))
}

/// Where a [`LoadedConfig`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// Nothing at the default path yet; a template can be written there.
    Missing(PathBuf),
    NoHome,
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: GridConfig,
    pub source: ConfigSource,
}

/// Load config from `explicit` if given, else from the default location.
///
/// Nothing is logged or written here: this runs before the logger exists.
/// A missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    match config_path() {
        Some(path) => load_config_at(&path),
        None => Ok(LoadedConfig {
            config: GridConfig::default(),
            source: ConfigSource::NoHome,
        }),
    }
}

/// Like [`load_config`] for a default-style path: a missing file yields
/// `GridConfig::default()` with [`ConfigSource::Missing`].
pub fn load_config_at(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        return Ok(LoadedConfig {
            config: GridConfig::default(),
            source: ConfigSource::Missing(path.to_path_buf()),
        });
    }
    read_config(path)
}

fn read_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GridConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok(LoadedConfig {
        config,
        source: ConfigSource::File(path.to_path_buf()),
    })
}

impl LoadedConfig {
    /// Log where the config came from, generating the default template when
    /// the default file was missing. Call once logging is up.
    pub fn announce(&self) {
        match &self.source {
            ConfigSource::File(path) => {
                info!("Loaded config from {}", path.display());
                debug!("Config: {:?}", self.config);
            }
            ConfigSource::Missing(path) => {
                info!("No config file found, generating default at {}", path.display());
                generate_default_config(path);
            }
            ConfigSource::NoHome => {
                warn!("Could not determine home directory, using default config");
            }
        }
    }
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# sudogrid configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "sudogrid.log"     # Or set SUDOGRID_LOG_FILE / --log-file
# log_level = "info"            # "off", "error", "warn", "info", "debug", "trace"

# [theme]
# placeholder = "."             # Glyph for empty cells. Or SUDOGRID_PLACEHOLDER / --placeholder
# focused_color = 205           # ANSI 256-color index of the focused cell
# cell_color = 15               # Unset keeps the terminal foreground
# help_color = 240              # Footer and empty-cell color
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &GridConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &GridConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("SUDOGRID_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let mut warnings = Vec::new();

    // Log level: env → config → default
    let log_level = env("SUDOGRID_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| match LevelFilter::from_str(&level) {
            Ok(filter) => Some(filter),
            Err(_) => {
                warnings.push(format!(
                    "Unknown log level {:?}, using {}",
                    level, DEFAULT_LOG_LEVEL
                ));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Placeholder: CLI → env → config → default. Only the first char counts.
    let placeholder = cli
        .placeholder
        .or_else(|| env("SUDOGRID_PLACEHOLDER").and_then(|s| s.chars().next()))
        .or_else(|| {
            config
                .theme
                .placeholder
                .as_deref()
                .and_then(|s| s.chars().next())
        })
        .unwrap_or(DEFAULT_PLACEHOLDER);

    ResolvedConfig {
        log_file,
        log_level,
        placeholder,
        focused_color: config.theme.focused_color.unwrap_or(DEFAULT_FOCUSED_COLOR),
        cell_color: config.theme.cell_color,
        help_color: config.theme.help_color.unwrap_or(DEFAULT_HELP_COLOR),
        warnings,
    }
}
