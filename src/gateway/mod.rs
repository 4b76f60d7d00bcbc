//! The trust gateway - security classification and identity admission
//!
//! Everything here is computed synchronously from already-available boot
//! data. The evaluation runs exactly once, before any cross-frame message
//! is processed; later messages are screened by the bridge against the same
//! allow-list but never re-run the evaluation.

pub mod evaluator;
pub mod identity;
pub mod policy;
pub mod status;
pub mod token;

use tracing::{debug, info, warn};

use crate::config::GatewayConfig;
use crate::error::IdentityError;
use identity::WalletAddress;
use policy::AllowList;
use status::SecurityStatus;

/// Initialization query parameters, read once at boot
#[derive(Debug, Clone, Default)]
pub struct BootParams {
    /// Claimed embedding origin, expected to match an allow-list entry
    pub origin: Option<String>,
    /// Opaque authorization token (base64 `origin:millis`)
    pub token: Option<String>,
    /// Candidate wallet identifier
    pub wallet: Option<String>,
}

/// Session-scoped trust state
///
/// Owns the allow-list, the security status, and the at-most-one current
/// wallet identity. The embedded runtime never mutates any of this - it only
/// receives a copy of the identity through the handoff bridge. All mutation
/// goes through methods here, so a failed admission can never leave the
/// state half-updated.
#[derive(Debug, Clone)]
pub struct Session {
    allow_list: AllowList,
    security_enabled: bool,
    status: SecurityStatus,
    wallet: Option<WalletAddress>,
    handoff_delivered: bool,
}

impl Session {
    /// Compute the allow-list, evaluate trust from the boot parameters and
    /// admit (or reject) a URL-supplied wallet
    ///
    /// `now_ms` is wall-clock epoch milliseconds; callers own the clock so
    /// that the token freshness window is testable.
    pub fn initialize(config: &GatewayConfig, params: &BootParams, now_ms: i64) -> Self {
        let allow_list = AllowList::compute(config);
        let security_enabled = config.security_enabled();

        let status = evaluator::evaluate(
            &allow_list,
            params.origin.as_deref(),
            params.token.as_deref(),
            security_enabled,
            now_ms,
        );
        info!(
            level = %status.level,
            origin_verified = status.origin_verified,
            token_verified = status.token_verified,
            "Trust evaluation complete: {}",
            status.message
        );

        let mut session = Session {
            allow_list,
            security_enabled,
            status,
            wallet: None,
            handoff_delivered: false,
        };

        if let Some(candidate) = params.wallet.as_deref() {
            match identity::admit_at_boot(candidate, &session.status) {
                Ok(wallet) => {
                    info!(wallet = %wallet, "Boot wallet admitted");
                    session.wallet = Some(wallet);
                }
                Err(reason) => {
                    // Logged but never stored.
                    warn!(candidate, %reason, "Boot wallet rejected");
                }
            }
        }

        session
    }

    pub fn status(&self) -> &SecurityStatus {
        &self.status
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    pub fn security_enabled(&self) -> bool {
        self.security_enabled
    }

    /// The current wallet identity, if one has been admitted
    pub fn wallet(&self) -> Option<&WalletAddress> {
        self.wallet.as_ref()
    }

    /// Admit a message-supplied wallet candidate
    ///
    /// Syntax-only: the message gate already screened the sender origin, and
    /// the boot-time security level is deliberately not re-checked on this
    /// path. A valid candidate overwrites the current identity.
    pub fn admit_message_wallet(&mut self, candidate: &str) -> Result<&WalletAddress, IdentityError> {
        let wallet = WalletAddress::parse(candidate)?;
        debug!(wallet = %wallet, "Wallet identity updated from cross-frame message");
        Ok(self.wallet.insert(wallet))
    }

    /// Whether the automatic wallet handoff has already run
    pub fn handoff_delivered(&self) -> bool {
        self.handoff_delivered
    }

    pub(crate) fn mark_handoff_delivered(&mut self) {
        self.handoff_delivered = true;
    }
}
