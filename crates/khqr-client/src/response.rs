//! Bakong API wire types.
//!
//! Response fields are optional wherever the service is known to omit
//! them; partial data degrades classification, it never errors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Settlement state of one transaction, derived live from the remote
/// lookup. Never cached or persisted locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Unpaid,
    Paid,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionStatus::Unpaid => "UNPAID",
            TransactionStatus::Paid => "PAID",
        })
    }
}

/// Body of `POST /check_transaction_by_md5`.
#[derive(Debug, Serialize)]
pub struct CheckRequest<'a> {
    pub md5: &'a str,
}

/// Response of the single-digest check.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub response_code: i64,
    #[serde(default)]
    pub response_message: Option<String>,
    #[serde(default)]
    pub data: Option<TransactionRecord>,
}

/// Ledger record of a settled transaction. Every field is optional; the
/// service reports whatever it has.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub from_account_id: Option<String>,
    #[serde(default)]
    pub to_account_id: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_date_ms: Option<u64>,
    #[serde(default)]
    pub acknowledged_date_ms: Option<u64>,
}

/// Response of `POST /check_transaction_by_md5_list`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCheckResponse {
    pub response_code: i64,
    #[serde(default)]
    pub data: Vec<BulkCheckEntry>,
}

/// One entry of the bulk response; `status == "SUCCESS"` marks the digest
/// as settled.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCheckEntry {
    #[serde(default)]
    pub md5: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Marker the bulk endpoint uses for settled digests.
pub const BULK_SETTLED_STATUS: &str = "SUCCESS";

/// Body of `POST /generate_deeplink_by_qr`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepLinkRequest<'a> {
    pub qr: &'a str,
    pub source_info: &'a DeepLinkSource,
}

/// App metadata shown when the deep link opens a participating wallet.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeepLinkSource {
    pub app_icon_url: String,
    pub app_name: String,
    pub app_deep_link_callback: String,
}

impl Default for DeepLinkSource {
    fn default() -> Self {
        Self {
            app_icon_url: "https://bakong.nbc.gov.kh/images/logo.svg".to_string(),
            app_name: "KHQR".to_string(),
            app_deep_link_callback: "https://bakong.nbc.org.kh".to_string(),
        }
    }
}

/// Response of the deep-link endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepLinkResponse {
    pub response_code: i64,
    #[serde(default)]
    pub data: Option<DeepLinkData>,
    #[serde(default)]
    pub status: Option<StatusMessage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepLinkData {
    #[serde(default)]
    pub short_link: Option<String>,
}

/// Application-level status block attached to rejections.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusMessage {
    #[serde(default)]
    pub message: Option<String>,
}
