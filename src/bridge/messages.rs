//! Cross-frame and runtime-channel wire types
//!
//! Inbound messages are internally tagged on `type`; unrecognized tags are
//! still forwarded by the gate but change no state. Outbound notifications
//! go to the parent context unfiltered - the asymmetry (gate inbound
//! strictly, broadcast outbound openly) mirrors the hosting contract.

use serde::{Deserialize, Serialize};

/// The target object exposed by the embedded runtime for identity delivery
pub const RUNTIME_HOOK_OBJECT: &str = "JavascriptHook";
/// The runtime method that receives the wallet identifier
pub const RUNTIME_SET_WALLET_METHOD: &str = "SetWalletAddress";

/// Recognized inbound cross-frame messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InboundMessage {
    /// Update the held wallet identity at runtime
    #[serde(rename = "SET_WALLET_ADDRESS")]
    SetWalletAddress { address: String },
}

/// Notifications relayed to the parent hosting context
///
/// Serialized with a fixed `type` string per event so the hosting page can
/// distinguish them. Sends are broadcast (`*` target) by design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParentNotification {
    /// The runtime finished initializing
    #[serde(rename = "MEDASHOOTER_LOADED")]
    Loaded,

    /// The wallet identity was delivered to the runtime
    #[serde(rename = "MEDASHOOTER_WALLET_SENT_SUCCESSFULLY")]
    WalletSent { address: String },

    /// The play session ended
    #[serde(rename = "MEDASHOOTER_GAME_OVER")]
    GameOver,
}

/// Named events arriving on the runtime channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// The runtime is prepared to receive the identity handoff
    ReadyToWalletAddress,
    /// The play session ended
    GameOver,
}

impl RuntimeEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RuntimeEvent::ReadyToWalletAddress => "ReadyToWalletAddress",
            RuntimeEvent::GameOver => "GameOver",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ReadyToWalletAddress" => Some(RuntimeEvent::ReadyToWalletAddress),
            "GameOver" => Some(RuntimeEvent::GameOver),
            _ => None,
        }
    }
}

/// The runtime message-send primitive: `(target object, method, payload)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeCall {
    pub object: String,
    pub method: String,
    pub payload: String,
}

impl RuntimeCall {
    /// The identity-delivery call
    pub fn set_wallet(address: &str) -> Self {
        RuntimeCall {
            object: RUNTIME_HOOK_OBJECT.to_string(),
            method: RUNTIME_SET_WALLET_METHOD.to_string(),
            payload: address.to_string(),
        }
    }
}
