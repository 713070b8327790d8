//! Bakong API client for KHQR payments.
//!
//! Correlates a generated KHQR payload (see the `khqr` crate) with its
//! settlement as reported by the Bakong ledger, keyed by the payload's
//! MD5 digest. Covers single and bulk status checks, a caller-paced
//! polling loop, and deep-link generation.
//!
//! # Example
//!
//! ```no_run
//! use khqr_client::{BakongClient, BakongConfig, PollPolicy, TransactionStatus};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), khqr_client::ClientError> {
//! let token = std::env::var("BAKONG_TOKEN").expect("BAKONG_TOKEN required");
//! let client = BakongClient::new(BakongConfig::new(token))?;
//!
//! let digest = "dfcabf4598d1c405a75540a3d4ca099d";
//! match client.check_transaction(digest).await? {
//!     TransactionStatus::Paid => println!("settled"),
//!     TransactionStatus::Unpaid => {
//!         let status = client.wait_for_payment(digest, &PollPolicy::default()).await;
//!         println!("final: {status}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod response;

pub use client::{BakongClient, PollPolicy};
pub use config::{BakongConfig, DEFAULT_API_BASE};
pub use error::ClientError;
pub use response::{DeepLinkSource, TransactionRecord, TransactionStatus};
