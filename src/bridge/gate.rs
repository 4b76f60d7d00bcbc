//! The message gate - the single origin choke point
//!
//! Every inbound cross-frame message passes through [`MessageGate::process`]
//! before any handler sees its payload. A sender origin outside the
//! allow-list is dropped with a diagnostic and never forwarded.

use serde_json::Value;
use tracing::{debug, warn};

use crate::bridge::messages::InboundMessage;
use crate::gateway::policy::AllowList;
use crate::gateway::Session;

/// A raw cross-frame message as delivered by the platform
#[derive(Debug, Clone)]
pub struct FrameEvent {
    /// Sender origin, as reported by the messaging primitive
    pub origin: String,
    /// Untrusted payload
    pub data: Value,
}

/// What the gate did with a message
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    /// A recognized message, forwarded to its handler
    Forward(InboundMessage),
    /// An unrecognized payload shape, forwarded but handled by nobody
    ForwardUnrecognized(Value),
    /// Sender origin not allow-listed; payload never inspected further
    Drop { origin: String },
}

/// Origin filter over the session's allow-list
///
/// Captures the allow-list at attach time; the list is immutable after
/// initialization, so the copy can never go stale.
#[derive(Debug, Clone)]
pub struct MessageGate {
    allow_list: AllowList,
    security_enabled: bool,
}

impl MessageGate {
    pub fn new(session: &Session) -> Self {
        MessageGate {
            allow_list: session.allow_list().clone(),
            security_enabled: session.security_enabled(),
        }
    }

    /// Screen a message by sender origin, then classify its payload
    pub fn screen(&self, event: &FrameEvent) -> GateDecision {
        if self.security_enabled && !self.allow_list.contains(&event.origin) {
            warn!(origin = %event.origin, "Cross-frame message dropped: origin not allow-listed");
            return GateDecision::Drop {
                origin: event.origin.clone(),
            };
        }

        match serde_json::from_value::<InboundMessage>(event.data.clone()) {
            Ok(message) => GateDecision::Forward(message),
            Err(_) => {
                debug!(origin = %event.origin, "Unrecognized cross-frame payload forwarded");
                GateDecision::ForwardUnrecognized(event.data.clone())
            }
        }
    }

    /// Screen a message and apply any resulting state change to the session
    ///
    /// The only recognized handler today is `SET_WALLET_ADDRESS`, which
    /// re-runs the identity syntax check and updates the held wallet.
    pub fn process(&self, session: &mut Session, event: &FrameEvent) -> GateDecision {
        let decision = self.screen(event);
        if let GateDecision::Forward(InboundMessage::SetWalletAddress { address }) = &decision {
            if let Err(reason) = session.admit_message_wallet(address) {
                warn!(origin = %event.origin, %reason, "Message-supplied wallet rejected");
            }
        }
        decision
    }
}
