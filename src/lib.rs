//! Async client for a host-provided text-to-speech service reached over a
//! generic capability bridge.
//!
//! The crate contains no speech synthesis, audio handling, or queueing of its
//! own. Its single job is marshaling: each [`TtsClient`] method normalizes
//! its arguments into an ordered argument list, forwards them through an
//! injected [`BridgeTransport`], and surfaces the host's outcome — either a
//! success payload or an opaque [`BridgeFailure`] reason — exactly once
//! through the returned `Result`.
//!
//! The transport is the seam: the host runtime supplies the real one, and
//! tests substitute in-process mocks without any native dependency.
//!
//! ```
//! use std::sync::Arc;
//!
//! use serde_json::Value;
//! use tts_bridge::{BridgeCall, BridgeFailure, BridgeTransport, TtsClient};
//!
//! struct NullBridge;
//!
//! #[async_trait::async_trait]
//! impl BridgeTransport for NullBridge {
//!     async fn invoke(&self, _call: BridgeCall) -> Result<Value, BridgeFailure> {
//!         Ok(Value::Null)
//!     }
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let tts = TtsClient::new(Arc::new(NullBridge));
//! tts.speak("hello").await?;
//! tts.speak(tts_bridge::SpeakOptions::new("bonjour").with("locale", "fr-FR"))
//!     .await?;
//! # Ok::<(), BridgeFailure>(())
//! # }).unwrap();
//! ```

pub mod bridge;
pub mod client;
pub mod error;
pub mod options;

pub use bridge::{BridgeCall, BridgeTransport, Operation, TTS_CAPABILITY};
pub use client::TtsClient;
pub use error::{
    BridgeFailure, Result, ERR_ERROR_INITIALIZING, ERR_INVALID_OPTIONS, ERR_NOT_INITIALIZED,
    ERR_UNKNOWN,
};
pub use options::SpeakOptions;
