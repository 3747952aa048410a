//! Configuration loading from the process environment.

use std::env;

use thiserror::Error;

use crate::config::schema::{DemoConfig, Variant};

/// Error type for configuration loading.
///
/// Startup is fail-fast: a malformed value aborts the process with no
/// retry. Absent variables fall back to documented defaults and never
/// error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set but does not parse as a TCP port number.
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Load configuration for `variant` from the process environment.
///
/// Recognized variables:
/// - `PORT`: listen port (secure and insecure variants; legacy ignores it)
/// - `DB_HOST`: display-only database host (secure variant)
/// - `DB_PASSWORD`: database password (secure variant; the insecure
///   variants keep their hardcoded literal)
pub fn from_env(variant: Variant) -> Result<DemoConfig, ConfigError> {
    from_lookup(variant, |key| env::var(key).ok())
}

/// Load configuration from an arbitrary key lookup.
///
/// The indirection keeps unit tests from mutating process-global
/// environment state.
pub fn from_lookup<F>(variant: Variant, lookup: F) -> Result<DemoConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = DemoConfig::defaults(variant);

    // The legacy variant always binds its fixed port.
    if variant != Variant::Legacy {
        if let Some(raw) = lookup("PORT") {
            config.listen_port = raw
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: raw, source })?;
        }
    }

    if variant == Variant::Secure {
        if let Some(host) = lookup("DB_HOST") {
            config.db_host = host;
        }
        if let Some(password) = lookup("DB_PASSWORD") {
            config.db_password = password;
        }
    }

    Ok(config)
}
