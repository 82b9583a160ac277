//! # Startup Errors
//!
//! The only fatal error class. Anything that goes wrong inside the running
//! grid is a defined no-op, not an error.

use std::fmt;

use crate::core::config::ConfigError;

#[derive(Debug)]
pub enum StartupError {
    /// The config file exists but could not be read or parsed.
    Config(ConfigError),
    /// The terminal could not be attached, or failed while running.
    Terminal(std::io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Config(e) => write!(f, "{e}"),
            StartupError::Terminal(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Config(e) => Some(e),
            StartupError::Terminal(e) => Some(e),
        }
    }
}

impl From<ConfigError> for StartupError {
    fn from(e: ConfigError) -> Self {
        StartupError::Config(e)
    }
}

impl From<std::io::Error> for StartupError {
    fn from(e: std::io::Error) -> Self {
        StartupError::Terminal(e)
    }
}
