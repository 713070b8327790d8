use thiserror::Error;

use crate::constants::MAX_FIELD_BYTES;

/// Errors returned by payload construction and parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KhqrError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("field {tag} value is {len} bytes, over the {MAX_FIELD_BYTES}-byte TLV capacity")]
    LengthExceeded { tag: String, len: usize },

    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}
