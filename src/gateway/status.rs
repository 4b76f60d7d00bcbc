//! Security status - the single source of truth for trust
//!
//! A [`SecurityStatus`] is created once at startup as the `Checking`
//! placeholder and replaced (never mutated) exactly once by the evaluator's
//! result. Every gated action reads it; nothing else writes it.

use serde::{Deserialize, Serialize};

use crate::gateway::policy::AllowList;

/// Coarse trust classification driving gating decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityLevel {
    /// Initial placeholder before evaluation has run
    Checking,
    /// Origin allow-listed and token verified
    Secure,
    /// Origin allow-listed, token missing or unverified
    Warning,
    /// Origin not allow-listed, regardless of token state
    Insecure,
    /// Verification explicitly bypassed by the operator
    Development,
}

impl SecurityLevel {
    /// Whether a URL-supplied wallet may be stored at this level
    pub fn admits_boot_wallet(&self) -> bool {
        matches!(self, SecurityLevel::Secure | SecurityLevel::Development)
    }
}

impl std::fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SecurityLevel::Checking => "checking",
            SecurityLevel::Secure => "secure",
            SecurityLevel::Warning => "warning",
            SecurityLevel::Insecure => "insecure",
            SecurityLevel::Development => "development",
        };
        write!(f, "{name}")
    }
}

/// Diagnostic bag attached to every status for observability
///
/// Carries no secret material - the token scheme has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDetails {
    /// The origins that were allow-listed at evaluation time
    pub allowed_origins: Vec<String>,
    /// The origin parameter the page booted with, if any
    pub origin_param: Option<String>,
    /// Whether a token parameter was present at all
    pub token_present: bool,
}

/// The trust decision plus its evidence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityStatus {
    pub level: SecurityLevel,
    /// Human-readable reason, rendered by the hosting page
    pub message: String,
    pub origin_verified: bool,
    pub token_verified: bool,
    pub details: StatusDetails,
}

impl SecurityStatus {
    /// The startup placeholder, before evaluation has run
    ///
    /// Exists for pre-evaluation rendering only: session initialization is
    /// synchronous and goes straight to a terminal level, so nothing in the
    /// gateway itself ever observes this state.
    pub fn checking() -> Self {
        SecurityStatus {
            level: SecurityLevel::Checking,
            message: "Verifying embedding context".to_string(),
            origin_verified: false,
            token_verified: false,
            details: StatusDetails::default(),
        }
    }

    pub(crate) fn details_from(
        allow_list: &AllowList,
        origin_param: Option<&str>,
        token_present: bool,
    ) -> StatusDetails {
        StatusDetails {
            allowed_origins: allow_list.origins().to_vec(),
            origin_param: origin_param.map(str::to_string),
            token_present,
        }
    }
}
