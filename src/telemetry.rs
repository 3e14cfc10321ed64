//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while configuring tracing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// Directive as supplied.
        filter: String,
        /// Parser message.
        reason: String,
    },
}

/// Installs a formatting subscriber filtered by `filter`.
///
/// Returns `Ok(false)` when a global subscriber was already installed, so
/// repeated calls are harmless.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `filter` is not a valid
/// directive.
pub fn init_tracing(filter: &str) -> Result<bool, TelemetryError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|err| TelemetryError::InvalidFilter {
        filter: filter.to_owned(),
        reason: err.to_string(),
    })?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .is_ok();
    Ok(installed)
}
