use thiserror::Error;

/// The host rejected the argument record (e.g. a speak call without `text`).
pub const ERR_INVALID_OPTIONS: &str = "ERR_INVALID_OPTIONS";
/// The native engine exists but has not finished initializing yet.
pub const ERR_NOT_INITIALIZED: &str = "ERR_NOT_INITIALIZED";
/// The native engine failed to initialize or was shut down.
pub const ERR_ERROR_INITIALIZING: &str = "ERR_ERROR_INITIALIZING";
/// The native engine reported an unspecified failure.
pub const ERR_UNKNOWN: &str = "ERR_UNKNOWN";

/// The single error kind visible at this layer: a failure reported by the
/// native host, carrying whatever opaque reason the host supplied.
///
/// The client performs no classification, retry, or recovery; the reason is
/// surfaced verbatim. Known Android host reasons are re-exported as constants
/// ([`ERR_INVALID_OPTIONS`], [`ERR_NOT_INITIALIZED`],
/// [`ERR_ERROR_INITIALIZING`], [`ERR_UNKNOWN`]) for callers that want to
/// match on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("bridge call failed: {reason}")]
pub struct BridgeFailure {
    reason: String,
}

impl BridgeFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The host-supplied reason, verbatim.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

pub type Result<T> = std::result::Result<T, BridgeFailure>;
