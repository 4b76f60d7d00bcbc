//! Gateway error types with clear, actionable messages

use std::path::PathBuf;
use thiserror::Error;

use crate::gateway::status::SecurityLevel;

/// Faults in the host process itself (never trust decisions - those are
/// expressed as statuses and rejections, not errors)
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The configured build directory does not exist
    #[error("build directory not found: {path}\n\nPlace the Unity WebGL build output there, or pass --build-dir")]
    BuildDirMissing { path: PathBuf },

    /// Failed to bind the listen address
    #[error("failed to bind {addr}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Why a wallet identifier was rejected
///
/// A rejected candidate is discarded, never partially stored; the previous
/// identity (or absence) is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The candidate does not look like a wallet address
    #[error("invalid wallet address format: expected 0x followed by 40 hex characters")]
    InvalidFormat,

    /// The current security level does not admit a URL-supplied wallet
    #[error("wallet address blocked by security level '{level}'")]
    BlockedBySecurity { level: SecurityLevel },
}

/// Why a token failed to decode
///
/// Verification never surfaces these to callers - [`crate::gateway::token::verify`]
/// degrades every decode failure to `false`. They exist for the operator-facing
/// `token decode` tooling.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The token is not valid base64
    #[error("token is not valid base64")]
    Encoding(#[from] base64::DecodeError),

    /// The decoded payload is not UTF-8 text
    #[error("token payload is not UTF-8 text")]
    NotText,

    /// The decoded payload has no origin/timestamp separator
    #[error("token payload is missing the ':' separator")]
    MissingSeparator,

    /// The timestamp half is not an integer
    #[error("token timestamp is not numeric: {value}")]
    BadTimestamp { value: String },
}
