//! Tag-Length-Value model for KHQR payloads.
//!
//! Wire format: `tag ++ length ++ value` with no delimiters, where tag is
//! a two-digit numeric string and length is the two-digit decimal count of
//! the value's UTF-8 **bytes** (not characters). Composite fields embed a
//! serialized inner TLV sequence as a single outer value.

use crate::constants::MAX_FIELD_BYTES;
use crate::error::KhqrError;

/// One tag-length-value element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvField {
    pub tag: String,
    pub value: String,
}

impl TlvField {
    /// Build a field, rejecting values over the two-digit length capacity.
    pub fn new(tag: &str, value: impl Into<String>) -> Result<Self, KhqrError> {
        debug_assert!(
            tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_digit()),
            "tag must be two ASCII digits, got {tag:?}"
        );
        let value = value.into();
        if value.len() > MAX_FIELD_BYTES {
            return Err(KhqrError::LengthExceeded {
                tag: tag.to_string(),
                len: value.len(),
            });
        }
        Ok(Self {
            tag: tag.to_string(),
            value,
        })
    }

    /// Length of the value in UTF-8 bytes.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Serialized form: tag, zero-padded two-digit byte length, value.
    pub fn render(&self) -> String {
        format!("{}{:02}{}", self.tag, self.value.len(), self.value)
    }
}

/// Walk a payload's tag/length prefixes and reconstruct its field
/// sequence. Lengths are byte counts, so the walk is over byte offsets;
/// a length landing inside a multi-byte character is rejected.
pub fn parse(payload: &str) -> Result<Vec<TlvField>, KhqrError> {
    let mut fields = Vec::new();
    let mut pos = 0;
    let bytes = payload.as_bytes();

    while pos < bytes.len() {
        let header = bytes
            .get(pos..pos + 4)
            .ok_or_else(|| KhqrError::InvalidPayload(format!("truncated header at byte {pos}")))?;
        if !header.iter().all(u8::is_ascii_digit) {
            return Err(KhqrError::InvalidPayload(format!(
                "non-numeric tag/length header at byte {pos}"
            )));
        }
        let tag = &payload[pos..pos + 2];
        let length = usize::from(header[2] - b'0') * 10 + usize::from(header[3] - b'0');
        let value = payload.get(pos + 4..pos + 4 + length).ok_or_else(|| {
            KhqrError::InvalidPayload(format!(
                "tag {tag} declares {length} bytes but the payload ends early or splits a character"
            ))
        })?;
        fields.push(TlvField {
            tag: tag.to_string(),
            value: value.to_string(),
        });
        pos += 4 + length;
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_counts_utf8_bytes_not_chars() {
        // "ភ្នំពេញ" (Phnom Penh in Khmer) is 7 chars but 21 UTF-8 bytes.
        let field = TlvField::new("59", "ភ្នំពេញ").unwrap();
        assert_eq!(field.len(), 21);
        assert_eq!(field.render(), "5921ភ្នំពេញ");
    }

    #[test]
    fn test_render_zero_pads_length() {
        let field = TlvField::new("00", "01").unwrap();
        assert_eq!(field.render(), "000201");
    }

    #[test]
    fn test_rejects_value_over_capacity() {
        let err = TlvField::new("59", "x".repeat(100)).unwrap_err();
        assert_eq!(
            err,
            KhqrError::LengthExceeded {
                tag: "59".to_string(),
                len: 100
            }
        );
    }

    #[test]
    fn test_accepts_value_at_capacity() {
        let field = TlvField::new("59", "x".repeat(99)).unwrap();
        assert_eq!(field.render().len(), 103);
    }

    #[test]
    fn test_parse_round_trip() {
        let fields = vec![
            TlvField::new("00", "01").unwrap(),
            TlvField::new("59", "ភ្នំពេញ").unwrap(),
            TlvField::new("62", "0105MShop").unwrap(),
        ];
        let payload: String = fields.iter().map(TlvField::render).collect();
        assert_eq!(parse(&payload).unwrap(), fields);
    }

    #[test]
    fn test_parse_rejects_truncated_value() {
        let err = parse("5910short").unwrap_err();
        assert!(matches!(err, KhqrError::InvalidPayload(_)));
    }

    #[test]
    fn test_parse_rejects_truncated_header() {
        let err = parse("000201 59").unwrap_err();
        assert!(matches!(err, KhqrError::InvalidPayload(_)));
    }

    #[test]
    fn test_parse_rejects_non_numeric_tag() {
        let err = parse("zz0201").unwrap_err();
        assert!(matches!(err, KhqrError::InvalidPayload(_)));
    }

    #[test]
    fn test_parse_empty_payload() {
        assert_eq!(parse("").unwrap(), Vec::new());
    }
}
