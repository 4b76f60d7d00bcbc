//! Environment-driven gateway configuration
//!
//! The deployment owns these values; the gateway only reads them. Absent
//! variables take the safe defaults: production posture, security on.

use tracing::debug;

/// Environment variable enabling the local-development posture
pub const ENV_DEV_MODE: &str = "MEDAHOST_DEV_MODE";
/// Environment variable forcing verification on even in development posture
pub const ENV_SECURITY_ENABLED: &str = "MEDAHOST_SECURITY_ENABLED";
/// Environment variable with operator-supplied extra origins (comma-separated)
pub const ENV_EXTRA_DOMAINS: &str = "MEDAHOST_EXTRA_DOMAINS";

/// Read-only inputs consumed by the domain policy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Local-development posture: include dev origins, bypass verification
    /// unless `security_override` is set
    pub development: bool,

    /// Explicit opt back in to verification while in development posture
    pub security_override: bool,

    /// Comma-separated extra origins appended to the allow-list
    pub extra_domains: Option<String>,
}

impl GatewayConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        let config = GatewayConfig {
            development: env_flag(ENV_DEV_MODE),
            security_override: env_flag(ENV_SECURITY_ENABLED),
            extra_domains: std::env::var(ENV_EXTRA_DOMAINS)
                .ok()
                .filter(|v| !v.trim().is_empty()),
        };
        debug!(
            development = config.development,
            security_override = config.security_override,
            extra_domains = config.extra_domains.is_some(),
            "Gateway configuration loaded from environment"
        );
        config
    }

    /// Whether origin/token verification is in force
    ///
    /// Disabled only in development posture without the explicit override.
    pub fn security_enabled(&self) -> bool {
        !self.development || self.security_override
    }
}

/// Truthy env parsing: `1`, `true`, `yes` (case-insensitive); anything else
/// including an absent variable is false
fn env_flag(name: &str) -> bool {
    match std::env::var(name) {
        Ok(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        ),
        Err(_) => false,
    }
}
