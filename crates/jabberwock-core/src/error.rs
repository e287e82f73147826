//! Error types for access-bridge queries.

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors that can occur while querying the access bridge.
///
/// The bridge runs in another process; every query is a synchronous
/// round-trip that can fail on the caller's behalf. This layer never
/// recovers from these itself. They propagate to the host runtime,
/// which owns the top-level retry/announce policy.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// A bridge call returned a failure status.
    #[error("access bridge call '{call}' failed")]
    CallFailed { call: &'static str },

    /// The requested offset lies outside the element's text.
    #[error("offset {offset} is out of bounds for a text of {len} characters")]
    OffsetOutOfBounds { offset: usize, len: usize },

    /// The bridge connection to the target application is gone.
    #[error("the access bridge connection to the application was lost")]
    Disconnected,
}

impl BridgeError {
    /// Create a call-failure error.
    pub fn call_failed(call: &'static str) -> Self {
        Self::CallFailed { call }
    }

    /// Create an out-of-bounds error.
    pub fn out_of_bounds(offset: usize, len: usize) -> Self {
        Self::OffsetOutOfBounds { offset, len }
    }
}
