//! Wallet identity - syntax validation and admission
//!
//! A wallet identifier is externally supplied and treated as sensitive: it
//! is stored only after validation, and a URL-supplied candidate is
//! additionally gated on the boot-time security level. The message path
//! deliberately skips the level re-check - the gate has already screened the
//! sender origin.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::IdentityError;
use crate::gateway::status::SecurityStatus;

/// `0x` followed by exactly 40 hex characters, case-insensitive
static WALLET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("wallet pattern is valid"));

/// A syntactically validated wallet identifier
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Validate candidate syntax; the original casing is preserved
    pub fn parse(candidate: &str) -> Result<Self, IdentityError> {
        if WALLET_PATTERN.is_match(candidate) {
            Ok(WalletAddress(candidate.to_string()))
        } else {
            Err(IdentityError::InvalidFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Admit a URL-supplied candidate at boot
///
/// Syntax first, then the level gate: only `secure` and `development`
/// contexts may store a wallet arriving through the page URL.
pub fn admit_at_boot(
    candidate: &str,
    status: &SecurityStatus,
) -> Result<WalletAddress, IdentityError> {
    let wallet = WalletAddress::parse(candidate)?;
    if !status.level.admits_boot_wallet() {
        return Err(IdentityError::BlockedBySecurity {
            level: status.level,
        });
    }
    Ok(wallet)
}
