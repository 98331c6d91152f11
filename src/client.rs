use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use crate::bridge::{BridgeCall, BridgeTransport, Operation, TTS_CAPABILITY};
use crate::error::Result;
use crate::options::SpeakOptions;

/// Client for the host's native text-to-speech service.
///
/// One method per native capability; every call is a single crossing of the
/// bridge boundary. The client is stateless: it keeps no queue, cache, or
/// session, imposes no ordering on concurrent calls, and performs no
/// validation beyond normalizing speak arguments into one canonical record.
/// Queueing, value domains, and engine lifecycle rules all live in the
/// native host.
///
/// Callers are responsible for lifecycle ordering: speaking before
/// [`startup`](Self::startup) or after [`shutdown`](Self::shutdown) is a
/// host-reported error, not one this client detects.
#[derive(Clone)]
pub struct TtsClient {
    transport: Arc<dyn BridgeTransport>,
    capability: String,
}

impl TtsClient {
    /// Client talking to the native module under its default service name,
    /// [`TTS_CAPABILITY`].
    pub fn new(transport: Arc<dyn BridgeTransport>) -> Self {
        Self::with_capability(transport, TTS_CAPABILITY)
    }

    /// For hosts that register the native module under a non-default
    /// service name.
    pub fn with_capability(
        transport: Arc<dyn BridgeTransport>,
        capability: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            capability: capability.into(),
        }
    }

    pub fn capability(&self) -> &str {
        &self.capability
    }

    async fn exec(&self, operation: Operation, args: Vec<Value>) -> Result<Value> {
        debug!(
            target: "tts_bridge",
            capability = %self.capability,
            operation = %operation,
            "Dispatching bridge call"
        );
        self.transport
            .invoke(BridgeCall::new(self.capability.clone(), operation, args))
            .await
    }

    /// Hosts disagree on whether completion carries a payload; operations
    /// defined as having no result drop it.
    async fn exec_unit(&self, operation: Operation, args: Vec<Value>) -> Result<()> {
        self.exec(operation, args).await.map(|_| ())
    }

    /// Queue text for synthesis behind anything already queued. Resolves when
    /// the host reports completion (or acceptance, depending on the engine);
    /// any payload the host attaches is discarded.
    pub async fn speak(&self, text: impl Into<SpeakOptions>) -> Result<()> {
        self.exec_unit(Operation::Speak, vec![text.into().into_value()])
            .await
    }

    /// Cancel in-flight and queued speech, then speak the given text.
    pub async fn interrupt(&self, text: impl Into<SpeakOptions>) -> Result<()> {
        self.exec_unit(Operation::Interrupt, vec![text.into().into_value()])
            .await
    }

    /// Cancel all queued and playing speech.
    pub async fn stop(&self) -> Result<()> {
        self.exec_unit(Operation::Stop, Vec::new()).await
    }

    /// Insert a pause of `duration_ms` milliseconds into the speech queue.
    pub async fn silence(&self, duration_ms: u64) -> Result<()> {
        self.exec_unit(Operation::Silence, vec![json!(duration_ms)])
            .await
    }

    /// Set the speech rate. The accepted domain is host-defined (nominally
    /// 30–500); the value is forwarded unclamped.
    pub async fn speed(&self, value: i64) -> Result<()> {
        self.exec_unit(Operation::Speed, vec![json!(value)]).await
    }

    /// Set the speech pitch. The accepted domain is host-defined (nominally
    /// 30–300); the value is forwarded unclamped.
    pub async fn pitch(&self, value: i64) -> Result<()> {
        self.exec_unit(Operation::Pitch, vec![json!(value)]).await
    }

    /// Allocate the native engine's resources.
    pub async fn startup(&self) -> Result<()> {
        self.exec_unit(Operation::Startup, Vec::new()).await
    }

    /// Release the native engine's resources. No reference counting is done
    /// here; pairing this with [`startup`](Self::startup) is the caller's job.
    pub async fn shutdown(&self) -> Result<()> {
        self.exec_unit(Operation::Shutdown, Vec::new()).await
    }

    /// Whether the engine supports `lang`. The host's answer (boolean or
    /// status code, engine-dependent) is returned unmodified.
    pub async fn is_language_available(&self, lang: &str) -> Result<Value> {
        self.exec(Operation::IsLanguageAvailable, vec![json!(lang)])
            .await
    }

    /// The engine's current language identifier, returned unmodified.
    pub async fn get_language(&self) -> Result<Value> {
        self.exec(Operation::GetLanguage, Vec::new()).await
    }

    /// Set the engine's current language.
    pub async fn set_language(&self, lang: &str) -> Result<()> {
        self.exec_unit(Operation::SetLanguage, vec![json!(lang)])
            .await
    }

    /// Register a short audio cue under an opaque identifier.
    pub async fn add_earcon(&self, earcon: &str) -> Result<()> {
        self.exec_unit(Operation::AddEarcon, vec![json!(earcon)])
            .await
    }

    /// Play a previously registered audio cue.
    pub async fn play_earcon(&self, earcon: &str) -> Result<()> {
        self.exec_unit(Operation::PlayEarcon, vec![json!(earcon)])
            .await
    }

    /// Whether speech is currently playing, as reported by the host,
    /// returned unmodified.
    pub async fn is_speaking(&self) -> Result<Value> {
        self.exec(Operation::IsSpeaking, Vec::new()).await
    }
}
