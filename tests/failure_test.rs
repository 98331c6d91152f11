use std::sync::Arc;

use serde_json::Value;
use tts_bridge::{
    BridgeCall, BridgeFailure, BridgeTransport, TtsClient, ERR_NOT_INITIALIZED,
};

/// Fails every call with a fixed host reason.
struct FailingBridge {
    reason: &'static str,
}

#[async_trait::async_trait]
impl BridgeTransport for FailingBridge {
    async fn invoke(&self, _call: BridgeCall) -> Result<Value, BridgeFailure> {
        Err(BridgeFailure::new(self.reason))
    }
}

#[tokio::test]
async fn test_every_method_surfaces_the_host_reason_verbatim() {
    let _ = tracing_subscriber::fmt::try_init();

    let tts = TtsClient::new(Arc::new(FailingBridge {
        reason: "ENGINE_BUSY",
    }));

    let failures = vec![
        tts.speak("hello").await.unwrap_err(),
        tts.interrupt("hello").await.unwrap_err(),
        tts.stop().await.unwrap_err(),
        tts.silence(100).await.unwrap_err(),
        tts.speed(200).await.unwrap_err(),
        tts.pitch(100).await.unwrap_err(),
        tts.startup().await.unwrap_err(),
        tts.shutdown().await.unwrap_err(),
        tts.set_language("en-US").await.unwrap_err(),
        tts.add_earcon("chime").await.unwrap_err(),
        tts.play_earcon("chime").await.unwrap_err(),
    ];
    for failure in failures {
        assert_eq!(failure.reason(), "ENGINE_BUSY");
    }

    assert_eq!(
        tts.get_language().await.unwrap_err().reason(),
        "ENGINE_BUSY"
    );
    assert_eq!(
        tts.is_language_available("en-US").await.unwrap_err().reason(),
        "ENGINE_BUSY"
    );
    assert_eq!(tts.is_speaking().await.unwrap_err().reason(), "ENGINE_BUSY");
}

#[tokio::test]
async fn test_known_host_reasons_are_matchable() {
    let tts = TtsClient::new(Arc::new(FailingBridge {
        reason: ERR_NOT_INITIALIZED,
    }));

    let failure = tts.speak("too early").await.unwrap_err();
    assert_eq!(failure.reason(), ERR_NOT_INITIALIZED);
}

#[tokio::test]
async fn test_out_of_range_values_are_forwarded_not_rejected() {
    // The client does no clamping; a host may still reject the value.
    let tts = TtsClient::new(Arc::new(FailingBridge {
        reason: "ERR_UNKNOWN",
    }));

    assert!(tts.speed(-5).await.is_err());
    assert!(tts.pitch(10_000).await.is_err());
}
