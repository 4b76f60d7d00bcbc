//! Authorization token encoding and verification
//!
//! The token is `base64(origin + ":" + issued_at_millis)` - not signed, not
//! encrypted. Integrity rests entirely on the honesty of the issuer; the
//! scheme is reproduced faithfully rather than strengthened, because a
//! signed credential would change observable behavior. Verification never
//! raises: every decode failure degrades to `false` at warn severity.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::{debug, warn};

use crate::error::TokenError;

/// Freshness window: a token older than this fails verification
pub const TOKEN_MAX_AGE_MS: i64 = 3_600_000;

/// The decoded contents of a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub origin: String,
    pub issued_at_ms: i64,
}

/// Decode a token into its claims without judging them
pub fn decode(token: &str) -> Result<TokenClaims, TokenError> {
    let bytes = BASE64.decode(token.trim())?;
    let text = String::from_utf8(bytes).map_err(|_| TokenError::NotText)?;

    // The timestamp is the suffix after the last ':' - origins themselves
    // contain colons (scheme separator, optional port).
    let (origin, timestamp) = text.rsplit_once(':').ok_or(TokenError::MissingSeparator)?;
    let issued_at_ms = timestamp
        .parse::<i64>()
        .map_err(|_| TokenError::BadTimestamp {
            value: timestamp.to_string(),
        })?;

    Ok(TokenClaims {
        origin: origin.to_string(),
        issued_at_ms,
    })
}

/// Verify a token against the claimed origin and the freshness window
///
/// True iff the token decodes, its origin equals `claimed_origin` exactly,
/// and `now_ms - issued_at < TOKEN_MAX_AGE_MS`. There is no lower bound on
/// the age: a future-dated token (clock skew) passes the window trivially.
pub fn verify(token: &str, claimed_origin: &str, now_ms: i64) -> bool {
    let claims = match decode(token) {
        Ok(claims) => claims,
        Err(reason) => {
            warn!(%reason, "Token rejected: decode failure");
            return false;
        }
    };

    // The timestamp is attacker-controlled; an extreme value must degrade
    // to a stale token, not an arithmetic overflow.
    let age_ms = now_ms.checked_sub(claims.issued_at_ms);
    let fresh = age_ms.is_some_and(|age| age < TOKEN_MAX_AGE_MS);
    let origin_match = claims.origin == claimed_origin;

    if !fresh {
        warn!(age_ms, "Token rejected: outside the freshness window");
    } else if !origin_match {
        warn!(
            token_origin = %claims.origin,
            claimed_origin,
            "Token rejected: origin mismatch"
        );
    } else {
        debug!(age_ms, "Token verified");
    }

    fresh && origin_match
}

/// Mint a token for an origin - development and test tooling only
pub fn issue(origin: &str, issued_at_ms: i64) -> String {
    BASE64.encode(format!("{origin}:{issued_at_ms}"))
}
