//! Trailing checksum engine.
//!
//! KHQR mandates CRC-16 with polynomial 0x1021, initial value 0xFFFF and
//! no bit reflection (the CCITT-FALSE parameterization), computed over the
//! assembled payload plus the literal `"6304"` tag-and-length prefix of
//! the checksum field itself. Any other CRC-16 variant produces a code
//! that conforming scanners silently reject.

use crate::constants::TAG_CRC;

const POLYNOMIAL: u16 = 0x1021;
const INITIAL: u16 = 0xFFFF;

/// Length declaration of the checksum field: always four hex digits.
const CRC_LENGTH: &str = "04";

/// CRC-16/CCITT-FALSE over a byte sequence.
pub fn crc16_ccitt_false(data: &[u8]) -> u16 {
    let mut crc = INITIAL;
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Render the final checksum field for a payload-so-far: the CRC input is
/// the payload concatenated with `"6304"`, and the output is that prefix
/// followed by four uppercase hex digits.
pub fn checksum_field(payload: &str) -> String {
    let mut data = Vec::with_capacity(payload.len() + 4);
    data.extend_from_slice(payload.as_bytes());
    data.extend_from_slice(TAG_CRC.as_bytes());
    data.extend_from_slice(CRC_LENGTH.as_bytes());
    format!("{TAG_CRC}{CRC_LENGTH}{:04X}", crc16_ccitt_false(&data))
}
