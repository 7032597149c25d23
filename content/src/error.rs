//! Error taxonomy for content API access.

/// Everything that can go wrong between issuing a request and holding a
/// decoded value. Every variant is rendered as a local view state by the
/// UI crate; none of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, abort).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The response body could not be decoded into the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),
    /// Requests are only issued from a browser build.
    #[error("not available outside the browser")]
    Unavailable,
}
