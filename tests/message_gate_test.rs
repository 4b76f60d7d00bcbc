//! Message gating: the origin choke point in front of every handler

use medahost::bridge::gate::{FrameEvent, GateDecision, MessageGate};
use medahost::gateway::status::SecurityLevel;
use medahost::gateway::token;
use medahost::{BootParams, GatewayConfig, Session};
use pretty_assertions::assert_eq;
use serde_json::json;

const ORIGIN: &str = "https://cryptomeda.tech";
const WALLET: &str = "0xAbCdEf0123456789AbCdEf0123456789AbCdEf01";

fn wallet_event(origin: &str, address: &str) -> FrameEvent {
    FrameEvent {
        origin: origin.to_string(),
        data: json!({ "type": "SET_WALLET_ADDRESS", "address": address }),
    }
}

#[test]
fn hostile_origin_never_reaches_the_identity_handler() {
    let mut session = Session::initialize(&GatewayConfig::default(), &BootParams::default(), 0);
    let gate = MessageGate::new(&session);

    let decision = gate.process(&mut session, &wallet_event("https://evil.example", WALLET));
    assert_eq!(
        decision,
        GateDecision::Drop {
            origin: "https://evil.example".to_string()
        }
    );
    assert!(session.wallet().is_none());
}

/// A message-supplied wallet is gated only by origin, not by re-running the
/// boot-time trust evaluation - the documented boot/message asymmetry.
#[test]
fn warning_level_session_still_accepts_gated_message_wallets() {
    // No token at boot: warning level, URL wallet would be blocked.
    let params = BootParams {
        origin: Some(ORIGIN.to_string()),
        token: None,
        wallet: Some(WALLET.to_string()),
    };
    let mut session = Session::initialize(&GatewayConfig::default(), &params, 0);
    assert_eq!(session.status().level, SecurityLevel::Warning);
    assert!(session.wallet().is_none());

    let gate = MessageGate::new(&session);
    gate.process(&mut session, &wallet_event(ORIGIN, WALLET));
    assert_eq!(session.wallet().unwrap().as_str(), WALLET);
}

#[test]
fn later_valid_messages_overwrite_the_held_identity() {
    let params = BootParams {
        origin: Some(ORIGIN.to_string()),
        token: Some(token::issue(ORIGIN, 0)),
        wallet: Some("0x0000000000000000000000000000000000000000".to_string()),
    };
    let mut session = Session::initialize(&GatewayConfig::default(), &params, 1_000);
    let gate = MessageGate::new(&session);

    gate.process(&mut session, &wallet_event(ORIGIN, WALLET));
    assert_eq!(session.wallet().unwrap().as_str(), WALLET);

    // A failed admission leaves the replacement in place.
    gate.process(&mut session, &wallet_event(ORIGIN, "0xnothex"));
    assert_eq!(session.wallet().unwrap().as_str(), WALLET);
}

#[test]
fn operator_extra_domains_extend_the_gate() {
    let config = GatewayConfig {
        extra_domains: Some("https://staging.cryptomeda.tech, https://qa.example".to_string()),
        ..Default::default()
    };
    let mut session = Session::initialize(&config, &BootParams::default(), 0);
    let gate = MessageGate::new(&session);

    gate.process(
        &mut session,
        &wallet_event("https://staging.cryptomeda.tech", WALLET),
    );
    assert!(session.wallet().is_some());

    let decision = gate.process(
        &mut session,
        &wallet_event("https://staging.evil.example", WALLET),
    );
    assert!(matches!(decision, GateDecision::Drop { .. }));
}

#[test]
fn unrecognized_message_types_pass_through_without_effect() {
    let mut session = Session::initialize(&GatewayConfig::default(), &BootParams::default(), 0);
    let gate = MessageGate::new(&session);

    let data = json!({ "type": "TELEMETRY", "fps": 60 });
    let decision = gate.process(
        &mut session,
        &FrameEvent {
            origin: ORIGIN.to_string(),
            data: data.clone(),
        },
    );
    assert_eq!(decision, GateDecision::ForwardUnrecognized(data));
    assert!(session.wallet().is_none());
}
