//! KHQR merchant-presented QR payload engine.
//!
//! Produces the TLV text payload a renderer would encode as a QR code,
//! byte-exact against the KHQR (EMVCo-derived) specification: two-digit
//! tags, lengths counted in UTF-8 bytes, nested composite fields, a fixed
//! field order and a trailing CRC-16/CCITT-FALSE checksum. The MD5 of the
//! finished payload is the correlation key the Bakong ledger uses to
//! report settlement (see the `khqr-client` crate).
//!
//! Everything here is pure and synchronous; the only injected effect is
//! the wall clock behind the timestamp extension field.
//!
//! # Example
//!
//! ```
//! use khqr::{create_qr, md5_hex, AdditionalData, Currency, QrConfig, QrRequest, SystemClock};
//!
//! # fn main() -> Result<(), khqr::KhqrError> {
//! let request = QrRequest {
//!     bank_account: "kimhoir@aba".to_string(),
//!     merchant_name: "Kimhoir".to_string(),
//!     merchant_city: "Phnom Penh".to_string(),
//!     amount: 1.09,
//!     currency: Currency::Usd,
//!     additional: AdditionalData::default(),
//! };
//!
//! let payload = create_qr(&request, &QrConfig::default(), &SystemClock)?;
//! let digest = md5_hex(&payload); // settlement lookup key
//! assert!(payload.starts_with("000201"));
//! assert_eq!(digest.len(), 32);
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod constants;
pub mod crc;
pub mod digest;
pub mod error;
pub mod field;
pub mod payload;
pub mod tlv;

pub use clock::{Clock, SystemClock};
pub use constants::QrConfig;
pub use crc::{checksum_field, crc16_ccitt_false};
pub use digest::md5_hex;
pub use error::KhqrError;
pub use field::{Currency, Field, PointOfInitiation};
pub use payload::{create_qr, AdditionalData, QrRequest};
pub use tlv::{parse, TlvField};
