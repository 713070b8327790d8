//! KHQR tag table and protocol defaults.
//!
//! Tag values come from the KHQR merchant-presented specification (EMVCo
//! derived). Changing any of them produces payloads that conforming
//! scanners reject.

use crate::field::PointOfInitiation;

/// Tag 00: payload format indicator, always the first field.
pub const TAG_PAYLOAD_FORMAT_INDICATOR: &str = "00";

/// Tag 01: point of initiation method.
pub const TAG_POINT_OF_INITIATION: &str = "01";

/// Tag 29: merchant account information, individual accounts.
pub const TAG_MERCHANT_ACCOUNT_INDIVIDUAL: &str = "29";

/// Sub-tag of tag 29 carrying the Bakong account ID.
pub const SUB_TAG_BAKONG_ACCOUNT_ID: &str = "00";

/// Tag 52: merchant category code.
pub const TAG_MERCHANT_CATEGORY_CODE: &str = "52";

/// Tag 53: transaction currency (ISO 4217 numeric).
pub const TAG_TRANSACTION_CURRENCY: &str = "53";

/// Tag 54: transaction amount.
pub const TAG_TRANSACTION_AMOUNT: &str = "54";

/// Tag 58: country code.
pub const TAG_COUNTRY_CODE: &str = "58";

/// Tag 59: merchant name.
pub const TAG_MERCHANT_NAME: &str = "59";

/// Tag 60: merchant city.
pub const TAG_MERCHANT_CITY: &str = "60";

/// Tag 62: additional data field template.
pub const TAG_ADDITIONAL_DATA: &str = "62";

/// Sub-tags of the additional data template, in emission order.
pub const SUB_TAG_BILL_NUMBER: &str = "01";
pub const SUB_TAG_MOBILE_NUMBER: &str = "02";
pub const SUB_TAG_STORE_LABEL: &str = "03";
pub const SUB_TAG_TERMINAL_LABEL: &str = "07";

/// Tag 99: proprietary timestamp extension.
pub const TAG_TIMESTAMP: &str = "99";

/// Sub-tag of tag 99 carrying epoch milliseconds.
pub const SUB_TAG_TIMESTAMP_MILLIS: &str = "00";

/// Tag 63: CRC, always the final field.
pub const TAG_CRC: &str = "63";

/// Fixed value of tag 00.
pub const PAYLOAD_FORMAT_INDICATOR: &str = "01";

/// Default merchant category code ("miscellaneous stores").
pub const DEFAULT_MERCHANT_CATEGORY_CODE: &str = "5999";

/// Default country code.
pub const DEFAULT_COUNTRY_CODE: &str = "KH";

/// A TLV length field is two decimal digits, so a value is capped at 99
/// UTF-8 bytes.
pub const MAX_FIELD_BYTES: usize = 99;

/// Payload generation configuration. Decouples the builder from
/// compile-time constants; constructed once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrConfig {
    pub point_of_initiation: PointOfInitiation,
    pub merchant_category_code: String,
    pub country_code: String,
    /// Whether to emit the tag 99 timestamp extension. Kept configurable:
    /// the field is proprietary and its role in remote verification is
    /// unconfirmed.
    pub include_timestamp: bool,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            point_of_initiation: PointOfInitiation::Dynamic,
            merchant_category_code: DEFAULT_MERCHANT_CATEGORY_CODE.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            include_timestamp: true,
        }
    }
}
