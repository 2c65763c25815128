//! Error types for the viewer.

/// Errors the viewer can hit talking to the server or handling input.
///
/// None of these are fatal to a running viewer; the caller logs them and
/// keeps the previous state.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// The HTTP request could not be completed.
    #[error("request to {path} failed: {message}")]
    Http {
        /// Endpoint path.
        path: String,
        /// Description of the transport failure.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("{path} returned HTTP {status}")]
    Status {
        /// Endpoint path.
        path: String,
        /// HTTP status code.
        status: u16,
    },

    /// A response body or push frame could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The push channel failed.
    #[error("push channel error: {0}")]
    WebSocket(String),

    /// The configured server URL is unusable.
    #[error("invalid server URL: {0}")]
    InvalidUrl(String),

    /// The action needs the Admin role.
    #[error("{action} requires the Admin role")]
    AdminRequired {
        /// The refused action.
        action: &'static str,
    },

    /// A terminal command could not be parsed.
    #[error("{0}")]
    Command(String),
}
