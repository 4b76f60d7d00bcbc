//! Trust evaluation - one origin check and one token check become a level
//!
//! Applies strict priority: disabled security > insecure origin > token
//! state. Runs exactly once, synchronously, from boot parameters; the
//! arrival of a later cross-frame message never re-runs it.

use tracing::debug;

use crate::gateway::policy::AllowList;
use crate::gateway::status::{SecurityLevel, SecurityStatus};
use crate::gateway::token;

/// Evaluate the hosting context into a [`SecurityStatus`]
///
/// Total over every input combination: exactly one of the four terminal
/// levels comes out.
pub fn evaluate(
    allow_list: &AllowList,
    origin_param: Option<&str>,
    token_param: Option<&str>,
    security_enabled: bool,
    now_ms: i64,
) -> SecurityStatus {
    let details = SecurityStatus::details_from(allow_list, origin_param, token_param.is_some());

    // Operator has explicitly opted out of verification.
    if !security_enabled {
        debug!("Security checks bypassed: development posture");
        return SecurityStatus {
            level: SecurityLevel::Development,
            message: "Development mode: verification bypassed".to_string(),
            origin_verified: true,
            token_verified: true,
            details,
        };
    }

    let origin_verified = origin_param.is_some_and(|origin| allow_list.contains(origin));

    // Absent token means unverified; a present token is judged against the
    // claimed origin and the freshness window.
    let token_verified = match (origin_param, token_param) {
        (Some(origin), Some(tok)) => token::verify(tok, origin, now_ms),
        _ => false,
    };

    let (level, message) = if !origin_verified {
        (
            SecurityLevel::Insecure,
            "Embedding origin is not allow-listed".to_string(),
        )
    } else if token_verified {
        (
            SecurityLevel::Secure,
            "Origin allow-listed and session token verified".to_string(),
        )
    } else {
        (
            SecurityLevel::Warning,
            "Origin allow-listed but session token missing or invalid".to_string(),
        )
    };

    debug!(%level, origin_verified, token_verified, "Trust evaluated");
    SecurityStatus {
        level,
        message,
        origin_verified,
        token_verified,
        details,
    }
}
