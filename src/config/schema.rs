//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the demo
//! service. All types derive Serde traits so configs can be serialized for
//! diagnostics or deserialized from fixtures.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default listen port for the secure and insecure variants.
pub const DEFAULT_PORT: u16 = 8080;

/// Port the legacy variant always binds, regardless of environment.
pub const LEGACY_PORT: u16 = 5000;

/// Placeholder for settings that were never supplied.
pub const NOT_SET: &str = "not-set";

/// Password literal baked into the insecure variants.
pub const HARDCODED_PASSWORD: &str = "super-secret-password";

/// Default duration `/slow` blocks its worker.
pub const DEFAULT_SLOW_DELAY: Duration = Duration::from_secs(10);

/// Which demo variant a process is running.
///
/// The variant is fixed per binary at compile time; it is never read from
/// the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Reads all settings from the environment and redacts the secret.
    Secure,
    /// Hardcodes the database password and renders it on the landing page.
    Insecure,
    /// Insecure behavior plus a fixed listen port; `PORT` is ignored.
    Legacy,
}

/// Root configuration for the demo service.
///
/// Constructed once at startup and immutable for the process lifetime.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Variant this process serves.
    pub variant: Variant,

    /// TCP port to bind (e.g. 8080).
    pub listen_port: u16,

    /// Display-only database host. Safe to render.
    pub db_host: String,

    /// Database password. The secure variant never renders this value.
    pub db_password: String,

    /// How long `/slow` blocks its worker before answering. Not sourced
    /// from the environment; tests shrink it to keep runs fast.
    pub slow_delay: Duration,
}

impl DemoConfig {
    /// Documented defaults for a variant, before any environment override.
    pub fn defaults(variant: Variant) -> Self {
        let listen_port = match variant {
            Variant::Secure | Variant::Insecure => DEFAULT_PORT,
            Variant::Legacy => LEGACY_PORT,
        };
        let db_password = match variant {
            Variant::Secure => NOT_SET.to_string(),
            Variant::Insecure | Variant::Legacy => HARDCODED_PASSWORD.to_string(),
        };

        Self {
            variant,
            listen_port,
            db_host: NOT_SET.to_string(),
            db_password,
            slow_delay: DEFAULT_SLOW_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_defaults() {
        let config = DemoConfig::defaults(Variant::Secure);
        assert_eq!(config.listen_port, 8080);
        assert_eq!(config.db_host, "not-set");
        assert_eq!(config.db_password, "not-set");
    }

    #[test]
    fn insecure_defaults_carry_hardcoded_password() {
        let config = DemoConfig::defaults(Variant::Insecure);
        assert_eq!(config.listen_port, 8080);
        assert_eq!(config.db_password, HARDCODED_PASSWORD);
    }

    #[test]
    fn legacy_defaults_to_fixed_port() {
        let config = DemoConfig::defaults(Variant::Legacy);
        assert_eq!(config.listen_port, 5000);
        assert_eq!(config.db_password, HARDCODED_PASSWORD);
    }
}
