//! Bakong API client: settlement status checks and deep-link generation.
//!
//! One request at a time, no internal parallelism. The polling loop is
//! cooperative (check, sleep, repeat) and leaves cancellation to the
//! caller via [`PollPolicy::deadline`] or by dropping the future.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::BakongConfig;
use crate::error::ClientError;
use crate::response::{
    BulkCheckResponse, CheckRequest, CheckResponse, DeepLinkRequest, DeepLinkResponse,
    DeepLinkSource, TransactionRecord, TransactionStatus, BULK_SETTLED_STATUS,
};

/// Pacing of [`BakongClient::wait_for_payment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    /// Pause between settlement checks.
    pub interval: Duration,
    /// Pause after a transport failure, distinct from the poll cadence.
    pub transport_backoff: Duration,
    /// Give up after this long and report [`TransactionStatus::Unpaid`].
    /// `None` polls until the caller cancels.
    pub deadline: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            transport_backoff: Duration::from_secs(5),
            deadline: None,
        }
    }
}

/// Client over the Bakong settlement and deep-link endpoints.
///
/// Holds only the HTTP connection pool and the immutable configuration,
/// so sharing one instance across tasks needs no locking.
#[derive(Debug, Clone)]
pub struct BakongClient {
    http: reqwest::Client,
    config: BakongConfig,
}

impl BakongClient {
    pub fn new(config: BakongConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, ClientError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(&self.config.bearer_token)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    /// Check one digest against the ledger.
    ///
    /// `responseCode == 0` classifies as [`TransactionStatus::Paid`]; any
    /// other well-formed answer (not found, business rejection) is
    /// [`TransactionStatus::Unpaid`]. A malformed body is logged and
    /// classified [`TransactionStatus::Unpaid`] rather than raised.
    /// Transport failures surface as [`ClientError::Transport`] so the
    /// caller can tell them apart from a definite answer.
    pub async fn check_transaction(&self, md5: &str) -> Result<TransactionStatus, ClientError> {
        let response = self.fetch_check(md5).await?;
        let status = if response.response_code == 0 {
            TransactionStatus::Paid
        } else {
            TransactionStatus::Unpaid
        };
        tracing::debug!(md5, %status, "settlement check");
        Ok(status)
    }

    /// Check one digest and surface the ledger record when the service
    /// reports one. Partial records are passed through as-is.
    pub async fn check_transaction_detail(
        &self,
        md5: &str,
    ) -> Result<Option<TransactionRecord>, ClientError> {
        Ok(self.fetch_check(md5).await?.data)
    }

    async fn fetch_check(&self, md5: &str) -> Result<CheckResponse, ClientError> {
        let body = self
            .post_json("check_transaction_by_md5", &CheckRequest { md5 })
            .await?;
        match serde_json::from_str(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                tracing::warn!(error = %e, md5, "unexpected check response shape, classifying unpaid");
                Ok(CheckResponse {
                    response_code: -1,
                    response_message: None,
                    data: None,
                })
            }
        }
    }

    /// Check many digests in one request. Returns exactly the digests the
    /// service reports settled; absence from the result is implicitly
    /// unpaid, not an error. Callers with N digests must use this rather
    /// than N single checks.
    pub async fn check_bulk_transactions(
        &self,
        md5_list: &[String],
    ) -> Result<Vec<String>, ClientError> {
        let body = self
            .post_json("check_transaction_by_md5_list", md5_list)
            .await?;
        let parsed: BulkCheckResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "unexpected bulk check response shape, classifying all unpaid");
                return Ok(Vec::new());
            }
        };
        if parsed.response_code != 0 {
            tracing::debug!(
                response_code = parsed.response_code,
                "bulk check reported no settled transactions"
            );
            return Ok(Vec::new());
        }
        Ok(parsed
            .data
            .into_iter()
            .filter(|entry| entry.status.as_deref() == Some(BULK_SETTLED_STATUS))
            .filter_map(|entry| entry.md5)
            .collect())
    }

    /// Poll until the digest settles, the policy deadline expires, or the
    /// caller drops the future. Transport failures inside the loop are
    /// logged and retried after [`PollPolicy::transport_backoff`]; they
    /// never escape. Returns [`TransactionStatus::Unpaid`] on deadline
    /// expiry, and issues no further requests past the deadline.
    pub async fn wait_for_payment(&self, md5: &str, policy: &PollPolicy) -> TransactionStatus {
        let deadline = policy.deadline.map(|d| Instant::now() + d);
        loop {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                tracing::debug!(md5, "settlement poll deadline expired");
                return TransactionStatus::Unpaid;
            }
            let pause = match self.check_transaction(md5).await {
                Ok(TransactionStatus::Paid) => return TransactionStatus::Paid,
                Ok(TransactionStatus::Unpaid) => policy.interval,
                Err(e) => {
                    tracing::warn!(error = %e, md5, "transport failure during settlement poll, backing off");
                    policy.transport_backoff
                }
            };
            let pause = match deadline {
                Some(d) => pause.min(d.saturating_duration_since(Instant::now())),
                None => pause,
            };
            tokio::time::sleep(pause).await;
        }
    }

    /// Translate a payload into a shareable short link.
    ///
    /// One-shot: a non-zero application response fails with
    /// [`ClientError::Rejected`] carrying the upstream message verbatim,
    /// and nothing is retried.
    pub async fn generate_deeplink(
        &self,
        qr: &str,
        source: &DeepLinkSource,
    ) -> Result<String, ClientError> {
        let body = self
            .post_json(
                "generate_deeplink_by_qr",
                &DeepLinkRequest {
                    qr,
                    source_info: source,
                },
            )
            .await?;
        let parsed: DeepLinkResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::UnexpectedResponse(format!("deep-link response: {e}")))?;

        if parsed.response_code != 0 {
            let message = parsed
                .status
                .and_then(|s| s.message)
                .unwrap_or_else(|| format!("responseCode {}", parsed.response_code));
            return Err(ClientError::Rejected(message));
        }
        parsed
            .data
            .and_then(|d| d.short_link)
            .ok_or_else(|| {
                ClientError::UnexpectedResponse("deep-link response carried no shortLink".to_string())
            })
    }
}
