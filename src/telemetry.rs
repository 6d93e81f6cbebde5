//! Tracing subscriber installation.
//!
//! The library only emits `tracing` events; hosts that want them on stderr
//! call [`init_tracing`] once at startup.

use tracing_subscriber::EnvFilter;

use crate::config::{TelemetryConfig, ValidationError};

/// Installs a global fmt subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured directive when set.
/// Returns `Ok(false)` if a global subscriber was already installed.
///
/// # Errors
/// `InvalidLogFilter` if the configured directive cannot be parsed.
pub fn init_tracing(config: &TelemetryConfig) -> Result<bool, ValidationError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config.env_filter()?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.with_ansi(false).try_init().is_ok()
    };

    Ok(installed)
}
