//! Field encoders.
//!
//! Every payload field is one variant of [`Field`], a closed set encoded
//! through a single [`Field::encode`] entry point. The builder assembles
//! variants in the mandated order; nothing here is dispatched dynamically.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    QrConfig, PAYLOAD_FORMAT_INDICATOR, SUB_TAG_BAKONG_ACCOUNT_ID, SUB_TAG_BILL_NUMBER,
    SUB_TAG_MOBILE_NUMBER, SUB_TAG_STORE_LABEL, SUB_TAG_TERMINAL_LABEL, SUB_TAG_TIMESTAMP_MILLIS,
    TAG_ADDITIONAL_DATA, TAG_COUNTRY_CODE, TAG_MERCHANT_ACCOUNT_INDIVIDUAL,
    TAG_MERCHANT_CATEGORY_CODE, TAG_MERCHANT_CITY, TAG_MERCHANT_NAME,
    TAG_PAYLOAD_FORMAT_INDICATOR, TAG_POINT_OF_INITIATION, TAG_TIMESTAMP,
    TAG_TRANSACTION_AMOUNT, TAG_TRANSACTION_CURRENCY,
};
use crate::error::KhqrError;
use crate::payload::AdditionalData;
use crate::tlv::TlvField;

/// Transaction currency. KHR has no minor unit; USD has two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Khr,
    Usd,
}

impl Currency {
    /// ISO 4217 numeric code as it appears in tag 53.
    pub fn numeric_code(self) -> &'static str {
        match self {
            Currency::Khr => "116",
            Currency::Usd => "840",
        }
    }

    /// Whether amounts carry a two-digit fractional part.
    pub fn has_minor_unit(self) -> bool {
        matches!(self, Currency::Usd)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Currency::Khr => "KHR",
            Currency::Usd => "USD",
        })
    }
}

impl FromStr for Currency {
    type Err = KhqrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "KHR" => Ok(Currency::Khr),
            "USD" => Ok(Currency::Usd),
            other => Err(KhqrError::UnsupportedCurrency(other.to_string())),
        }
    }
}

/// Point of initiation method: static codes are reusable, dynamic codes
/// carry a per-transaction amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointOfInitiation {
    Static,
    Dynamic,
}

impl PointOfInitiation {
    pub fn code(self) -> &'static str {
        match self {
            PointOfInitiation::Static => "11",
            PointOfInitiation::Dynamic => "12",
        }
    }
}

/// One payload field, borrowed from the builder's request.
#[derive(Debug, Clone, Copy)]
pub enum Field<'a> {
    PayloadFormatIndicator,
    PointOfInitiation(PointOfInitiation),
    MerchantAccount { account_id: &'a str },
    MerchantCategoryCode,
    CountryCode,
    MerchantName(&'a str),
    MerchantCity(&'a str),
    Timestamp { millis: u64 },
    Amount { value: f64, currency: Currency },
    TransactionCurrency(Currency),
    AdditionalData(&'a AdditionalData),
}

impl Field<'_> {
    /// Encode this field as one TLV element. `Ok(None)` means the field
    /// legitimately emits nothing (an all-empty additional-data template).
    pub fn encode(&self, config: &QrConfig) -> Result<Option<TlvField>, KhqrError> {
        match *self {
            Field::PayloadFormatIndicator => {
                TlvField::new(TAG_PAYLOAD_FORMAT_INDICATOR, PAYLOAD_FORMAT_INDICATOR).map(Some)
            }
            Field::PointOfInitiation(method) => {
                TlvField::new(TAG_POINT_OF_INITIATION, method.code()).map(Some)
            }
            Field::MerchantAccount { account_id } => {
                let inner = TlvField::new(SUB_TAG_BAKONG_ACCOUNT_ID, account_id)?.render();
                TlvField::new(TAG_MERCHANT_ACCOUNT_INDIVIDUAL, inner).map(Some)
            }
            Field::MerchantCategoryCode => {
                debug_assert!(
                    config.merchant_category_code.len() == 4
                        && config.merchant_category_code.bytes().all(|b| b.is_ascii_digit()),
                    "merchant category code must be four digits"
                );
                TlvField::new(TAG_MERCHANT_CATEGORY_CODE, config.merchant_category_code.as_str())
                    .map(Some)
            }
            Field::CountryCode => {
                debug_assert!(
                    config.country_code.len() == 2
                        && config.country_code.bytes().all(|b| b.is_ascii_uppercase()),
                    "country code must be two uppercase letters"
                );
                TlvField::new(TAG_COUNTRY_CODE, config.country_code.as_str()).map(Some)
            }
            Field::MerchantName(name) => TlvField::new(TAG_MERCHANT_NAME, name).map(Some),
            Field::MerchantCity(city) => TlvField::new(TAG_MERCHANT_CITY, city).map(Some),
            Field::Timestamp { millis } => {
                let inner =
                    TlvField::new(SUB_TAG_TIMESTAMP_MILLIS, millis.to_string())?.render();
                TlvField::new(TAG_TIMESTAMP, inner).map(Some)
            }
            Field::Amount { value, currency } => {
                TlvField::new(TAG_TRANSACTION_AMOUNT, format_amount(value, currency)?).map(Some)
            }
            Field::TransactionCurrency(currency) => {
                TlvField::new(TAG_TRANSACTION_CURRENCY, currency.numeric_code()).map(Some)
            }
            Field::AdditionalData(additional) => encode_additional_data(additional),
        }
    }
}

/// Render an amount for tag 54. KHR amounts are integer strings with no
/// decimal point; USD amounts carry exactly two decimal digits.
fn format_amount(value: f64, currency: Currency) -> Result<String, KhqrError> {
    if !value.is_finite() {
        return Err(KhqrError::InvalidAmount(format!("{value} is not a number")));
    }
    if value < 0.0 {
        return Err(KhqrError::InvalidAmount(format!("{value} is negative")));
    }
    if currency.has_minor_unit() {
        return Ok(format!("{value:.2}"));
    }
    if value.fract() != 0.0 {
        return Err(KhqrError::InvalidAmount(format!(
            "{value} has a fractional part but {currency} has no minor unit"
        )));
    }
    Ok(format!("{}", value as u64))
}

/// Emit the tag 62 template: only non-empty sub-fields, in ascending
/// sub-tag order, with the outer length covering the serialized inner
/// sequence. An entirely empty template emits nothing.
fn encode_additional_data(additional: &AdditionalData) -> Result<Option<TlvField>, KhqrError> {
    let sub_fields = [
        (SUB_TAG_BILL_NUMBER, &additional.bill_number),
        (SUB_TAG_MOBILE_NUMBER, &additional.mobile_number),
        (SUB_TAG_STORE_LABEL, &additional.store_label),
        (SUB_TAG_TERMINAL_LABEL, &additional.terminal_label),
    ];

    let mut inner = String::new();
    for (tag, value) in sub_fields {
        match value.as_deref() {
            Some(value) if !value.is_empty() => {
                inner.push_str(&TlvField::new(tag, value)?.render());
            }
            _ => {}
        }
    }

    if inner.is_empty() {
        return Ok(None);
    }
    TlvField::new(TAG_ADDITIONAL_DATA, inner).map(Some)
}
