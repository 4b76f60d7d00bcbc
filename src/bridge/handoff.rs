//! The handoff bridge - one-shot identity delivery and lifecycle relay
//!
//! Delivery is attempted only at the runtime's readiness signal and on a
//! manual trigger; there is no retry or backoff. The automatic path runs at
//! most once per session, recorded on the session's `delivered` flag.

use tracing::{debug, info, warn};

use crate::bridge::messages::{ParentNotification, RuntimeCall, RuntimeEvent};
use crate::gateway::Session;

/// The embedded runtime's message-send primitive
pub trait RuntimeSink {
    fn send(&mut self, call: RuntimeCall);
}

/// The cross-frame send primitive toward the parent hosting context
///
/// Broadcast: the transport targets `*`, so there is no origin parameter.
pub trait ParentSink {
    fn post(&mut self, notification: ParentNotification);
}

/// Outcome of a delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffOutcome {
    /// The identity was transmitted to the runtime
    Delivered,
    /// The automatic path already ran; nothing sent
    AlreadyDelivered,
    /// No identity held at signal time; nothing sent, no retry scheduled
    NoIdentity,
}

/// Relays lifecycle events and performs the gated identity handoff
pub struct HandoffBridge<R: RuntimeSink, P: ParentSink> {
    runtime: R,
    parent: P,
}

impl<R: RuntimeSink, P: ParentSink> HandoffBridge<R, P> {
    pub fn new(runtime: R, parent: P) -> Self {
        HandoffBridge { runtime, parent }
    }

    /// Handle a named event from the runtime channel
    pub fn on_runtime_event(
        &mut self,
        session: &mut Session,
        event: RuntimeEvent,
    ) -> Option<HandoffOutcome> {
        match event {
            RuntimeEvent::ReadyToWalletAddress => Some(self.deliver(session, false)),
            RuntimeEvent::GameOver => {
                info!("Runtime session ended; notifying parent");
                self.parent.post(ParentNotification::GameOver);
                None
            }
        }
    }

    /// The runtime finished initializing; relay to the parent
    pub fn runtime_loaded(&mut self) {
        info!("Runtime loaded; notifying parent");
        self.parent.post(ParentNotification::Loaded);
    }

    /// Operator-triggered resend, bypassing the delivered guard
    pub fn resend(&mut self, session: &mut Session) -> HandoffOutcome {
        self.deliver(session, true)
    }

    fn deliver(&mut self, session: &mut Session, manual: bool) -> HandoffOutcome {
        if session.handoff_delivered() && !manual {
            debug!("Readiness signal after delivery; automatic handoff suppressed");
            return HandoffOutcome::AlreadyDelivered;
        }

        let Some(wallet) = session.wallet().cloned() else {
            warn!("Runtime ready but no wallet identity held; handoff skipped");
            return HandoffOutcome::NoIdentity;
        };

        info!(wallet = %wallet, manual, "Delivering wallet identity to runtime");
        self.runtime.send(RuntimeCall::set_wallet(wallet.as_str()));
        session.mark_handoff_delivered();
        self.parent.post(ParentNotification::WalletSent {
            address: wallet.as_str().to_string(),
        });
        HandoffOutcome::Delivered
    }
}
