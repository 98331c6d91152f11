use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Argument record accepted by [`TtsClient::speak`] and
/// [`TtsClient::interrupt`](crate::TtsClient::interrupt).
///
/// Only `text` is required. Any further engine-specific fields (the Android
/// host reads optional `locale` and `rate`) ride along in `extra` and are
/// forwarded without interpretation or validation.
///
/// Plain strings convert directly, so `tts.speak("hello")` and
/// `tts.speak(SpeakOptions::new("hello"))` produce the same bridge call.
///
/// [`TtsClient::speak`]: crate::TtsClient::speak
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeakOptions {
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SpeakOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extra: Map::new(),
        }
    }

    /// Attach an engine-specific field, forwarded opaquely.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The canonical record forwarded across the bridge. A `text` key in
    /// `extra` loses to the `text` field.
    pub(crate) fn into_value(self) -> Value {
        let mut record = self.extra;
        record.insert("text".to_string(), Value::String(self.text));
        Value::Object(record)
    }
}

impl From<&str> for SpeakOptions {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SpeakOptions {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
