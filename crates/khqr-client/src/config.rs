//! Client configuration.
//!
//! One immutable object constructed by the caller and handed to
//! [`crate::BakongClient`]; there is no process-wide endpoint or
//! credential state, and the bearer token is never compiled in.

use std::time::Duration;

/// Production Bakong API base.
pub const DEFAULT_API_BASE: &str = "https://api-bakong.nbc.gov.kh/v1";

/// Default per-request HTTP timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Bakong API endpoint and credential configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakongConfig {
    pub base_url: String,
    /// Developer bearer token from the Bakong profile.
    pub bearer_token: String,
    pub request_timeout: Duration,
}

impl BakongConfig {
    /// Configuration against the production API with the given token.
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            bearer_token: bearer_token.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Point the client at a different API base (sandbox, test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
