//! Domain policy - composition of the origin allow-list
//!
//! The allow-list is a pure function of configuration: a fixed production
//! set, a fixed development set included only in development posture, and
//! operator-supplied extras. Origins compare by exact string equality - no
//! normalization, no wildcard or subdomain logic.

use serde::Serialize;
use tracing::debug;

use crate::config::GatewayConfig;

/// Origins always permitted to embed the page
pub const PRODUCTION_ORIGINS: &[&str] = &[
    "https://cryptomeda.tech",
    "https://www.cryptomeda.tech",
    "https://shooter.cryptomeda.tech",
];

/// Origins additionally permitted in development posture
pub const DEVELOPMENT_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:3001",
    "http://127.0.0.1:3000",
];

/// The set of origins permitted to exchange trusted messages with this page
///
/// Built once per session and never mutated in place. Duplicates are
/// harmless: membership is a scan, and composition order only shows up in
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllowList {
    origins: Vec<String>,
}

impl AllowList {
    /// Compose the allow-list from configuration
    ///
    /// Idempotent: unchanged inputs yield an identical list.
    pub fn compute(config: &GatewayConfig) -> Self {
        let mut origins: Vec<String> = PRODUCTION_ORIGINS.iter().map(|s| s.to_string()).collect();

        if config.development {
            origins.extend(DEVELOPMENT_ORIGINS.iter().map(|s| s.to_string()));
        }

        if let Some(extras) = config.extra_domains.as_deref() {
            origins.extend(
                extras
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            );
        }

        debug!(count = origins.len(), "Allow-list composed");
        AllowList { origins }
    }

    /// Exact-match membership test
    pub fn contains(&self, origin: &str) -> bool {
        self.origins.iter().any(|o| o == origin)
    }

    pub fn origins(&self) -> &[String] {
        &self.origins
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_origins(origins: &[&str]) -> Self {
        AllowList {
            origins: origins.iter().map(|s| s.to_string()).collect(),
        }
    }
}
