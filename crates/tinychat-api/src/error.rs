use thiserror::Error;

/// Errors surfaced by the chat transport.
///
/// Malformed bodies on a 2xx response fold into [`ApiError::Request`] with
/// a generic message; the caller only ever displays these.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. Carries the
    /// server-supplied detail message when the error body parses,
    /// otherwise the status code.
    #[error("{0}")]
    Request(String),
    /// The request never completed: DNS, connection refused, timeout.
    #[error("{0}")]
    Transport(String),
}
