//! The invocation primitive separating this client from the native host.
//!
//! The host application runtime supplies the one real [`BridgeTransport`];
//! this crate never looks past it. Tests substitute in-process mocks.

use async_trait::async_trait;
use serde_json::Value;
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::error::BridgeFailure;

/// Service name the native TTS module registers under by default.
pub const TTS_CAPABILITY: &str = "TTS";

/// Wire-level operation names understood by the native TTS module.
///
/// Variants render in camelCase, matching the names the host dispatches on
/// (e.g. `Operation::IsLanguageAvailable` is `"isLanguageAvailable"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum Operation {
    Speak,
    Interrupt,
    Stop,
    Silence,
    Speed,
    Pitch,
    Startup,
    Shutdown,
    IsLanguageAvailable,
    GetLanguage,
    SetLanguage,
    AddEarcon,
    PlayEarcon,
    IsSpeaking,
}

impl Operation {
    /// The name forwarded across the bridge.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// One request crossing the bridge boundary: the capability (service) name,
/// an operation on it, and the ordered argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeCall {
    pub capability: String,
    pub operation: Operation,
    pub args: Vec<Value>,
}

impl BridgeCall {
    pub fn new(capability: impl Into<String>, operation: Operation, args: Vec<Value>) -> Self {
        Self {
            capability: capability.into(),
            operation,
            args,
        }
    }
}

/// Host-supplied bridge invocation primitive.
///
/// Contract: each call resolves exactly once, with either a success payload
/// or a [`BridgeFailure`], never both and never neither. Operations defined
/// as having no result report `Value::Null`. The transport owns any timeout
/// policy; the client imposes none.
#[async_trait]
pub trait BridgeTransport: Send + Sync {
    /// Dispatch one call to the native host.
    async fn invoke(&self, call: BridgeCall) -> Result<Value, BridgeFailure>;
}
