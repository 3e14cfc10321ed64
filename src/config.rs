//! Server configuration from command-line flags and environment variables.

use camino::Utf8PathBuf;
use clap::Parser;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors raised when configuration values are unusable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The snapshot file name is empty or contains a path separator.
    #[error("data file must be a plain file name, got '{0}'")]
    InvalidDataFile(String),

    /// The API prefix does not start with `/`.
    #[error("API prefix must be empty or start with '/', got '{0}'")]
    InvalidApiPrefix(String),
}

/// Runtime settings for the `helpboard` server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "helpboard", version, about = "Community help-request API")]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long, env = "HELPBOARD_BIND", default_value = "0.0.0.0:5001")]
    pub bind: SocketAddr,

    /// Directory holding the snapshot file; created when absent.
    #[arg(long, env = "HELPBOARD_DATA_DIR", default_value = ".")]
    pub data_dir: Utf8PathBuf,

    /// Snapshot file name inside the data directory.
    #[arg(long, env = "HELPBOARD_DATA_FILE", default_value = "data.json")]
    pub data_file: String,

    /// Path prefix under which the API routes are mounted.
    #[arg(long, env = "HELPBOARD_API_PREFIX", default_value = "/api")]
    pub api_prefix: String,

    /// Tracing filter directive, e.g. `info` or `helpboard=debug`.
    #[arg(long, env = "HELPBOARD_LOG", default_value = "info")]
    pub log_filter: String,
}

impl ServerConfig {
    /// Checks values that clap cannot validate on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the data file is not a plain file name or
    /// the API prefix is malformed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let file = self.data_file.as_str();
        if file.is_empty() || file.contains(['/', '\\']) || file == "." || file == ".." {
            return Err(ConfigError::InvalidDataFile(self.data_file.clone()));
        }
        if !self.api_prefix.is_empty() && !self.api_prefix.starts_with('/') {
            return Err(ConfigError::InvalidApiPrefix(self.api_prefix.clone()));
        }
        Ok(())
    }
}
