//! The runtime boundary - message screening and the identity handoff
//!
//! [`Bridge`] scopes the listener wiring to the embedded runtime's visible
//! lifetime: handlers exist between [`Bridge::attach`] and
//! [`Bridge::detach`], and dropping the bridge on any exit path deregisters
//! them. Ordering guarantee: a bridge is attached only to an initialized
//! session, so the trust evaluation is always complete before the first
//! message is processed.

pub mod gate;
pub mod handoff;
pub mod messages;

use tracing::{debug, info};

use crate::gateway::Session;
use gate::{FrameEvent, GateDecision, MessageGate};
use handoff::{HandoffBridge, HandoffOutcome, ParentSink, RuntimeSink};
use messages::RuntimeEvent;

/// Scoped handler registration for the embedded runtime's lifetime
pub struct Bridge<R: RuntimeSink, P: ParentSink> {
    gate: MessageGate,
    handoff: HandoffBridge<R, P>,
    attached: bool,
}

impl<R: RuntimeSink, P: ParentSink> Bridge<R, P> {
    /// Register the message and runtime-event handlers
    pub fn attach(session: &Session, runtime: R, parent: P) -> Self {
        info!("Bridge attached: cross-frame and runtime listeners registered");
        Bridge {
            gate: MessageGate::new(session),
            handoff: HandoffBridge::new(runtime, parent),
            attached: true,
        }
    }

    /// Entry point for every inbound cross-frame message
    pub fn on_frame_message(&self, session: &mut Session, event: &FrameEvent) -> GateDecision {
        self.gate.process(session, event)
    }

    /// Entry point for named events on the runtime channel
    pub fn on_runtime_event(
        &mut self,
        session: &mut Session,
        event: RuntimeEvent,
    ) -> Option<HandoffOutcome> {
        self.handoff.on_runtime_event(session, event)
    }

    /// The runtime finished loading; relay to the parent context
    pub fn runtime_loaded(&mut self) {
        self.handoff.runtime_loaded();
    }

    /// Operator-triggered wallet resend
    pub fn resend_wallet(&mut self, session: &mut Session) -> HandoffOutcome {
        self.handoff.resend(session)
    }

    /// Explicitly deregister the handlers
    pub fn detach(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.attached {
            self.attached = false;
            debug!("Bridge detached: listeners deregistered");
        }
    }
}

impl<R: RuntimeSink, P: ParentSink> Drop for Bridge<R, P> {
    // Deregistration happens on every exit path, error paths included.
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::handoff::test_support::{RecordingParent, RecordingRuntime};
    use super::*;
    use crate::config::GatewayConfig;
    use crate::gateway::BootParams;

    #[test]
    fn detach_is_idempotent_with_drop() {
        let session = Session::initialize(&GatewayConfig::default(), &BootParams::default(), 0);
        let bridge = Bridge::attach(
            &session,
            RecordingRuntime::default(),
            RecordingParent::default(),
        );
        bridge.detach();
    }
}
