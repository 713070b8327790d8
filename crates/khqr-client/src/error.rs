use thiserror::Error;

/// Errors returned by Bakong API operations.
///
/// Transport failures and application-level rejections are distinct
/// variants so callers can retry the former and surface the latter.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-zero application response code.
    /// Carries the upstream message verbatim. Never retried automatically.
    #[error("remote service rejected the request: {0}")]
    Rejected(String),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
