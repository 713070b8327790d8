//! Content digest used as the settlement correlation key.
//!
//! The remote ledger addresses transactions by the MD5 of the full QR
//! payload string, so MD5 specifically is required here. It is a
//! correlation key, not a security boundary.

use md5::{Digest, Md5};

/// MD5 of a payload string as 32 lowercase hex characters. Pure function:
/// identical payloads always produce identical digests.
pub fn md5_hex(payload: &str) -> String {
    hex::encode(Md5::digest(payload.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex("hello"), "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn test_deterministic() {
        let payload = "00020101021229190015kimhoir@bakong6304ABCD";
        assert_eq!(md5_hex(payload), md5_hex(payload));
        assert_eq!(md5_hex(payload).len(), 32);
    }

    #[test]
    fn test_differs_when_payload_changes() {
        assert_ne!(md5_hex("00020101021154031005802KH"), md5_hex("00020101021154031015802KH"));
    }
}
