//! medahost - trust gateway for an embedded game runtime
//!
//! The host page embeds a precompiled Unity WebGL client and must decide,
//! for every inbound cross-frame message and every externally supplied
//! identity parameter, whether to trust it. This crate implements that
//! decision surface:
//!
//! - [`gateway`] classifies the hosting context into a security level and
//!   admits or rejects wallet identifiers based on it
//! - [`bridge`] screens cross-frame messages by sender origin and performs
//!   the one-shot wallet handoff to the runtime
//! - [`server`] serves the precompressed runtime assets with the exact
//!   headers the runtime loader requires

pub mod bridge;
pub mod config;
pub mod error;
pub mod gateway;
pub mod server;

pub use config::GatewayConfig;
pub use error::{GatewayError, IdentityError, TokenError};
pub use gateway::{BootParams, Session};
