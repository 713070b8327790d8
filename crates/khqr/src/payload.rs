//! Payload builder.
//!
//! Assembles field encoders in the order the KHQR specification mandates
//! and appends the CRC. Construction is atomic: the first encoder failure
//! aborts the build before any output escapes, and the checksum step is
//! never reached.

use crate::clock::Clock;
use crate::constants::QrConfig;
use crate::crc::checksum_field;
use crate::error::KhqrError;
use crate::field::{Currency, Field};

/// Merchant and transaction inputs for one QR generation.
#[derive(Debug, Clone, PartialEq)]
pub struct QrRequest {
    /// Bakong account ID, e.g. `kimhoir@aba`.
    pub bank_account: String,
    pub merchant_name: String,
    pub merchant_city: String,
    pub amount: f64,
    pub currency: Currency,
    pub additional: AdditionalData,
}

/// Optional sub-fields of the tag 62 template. Empty or absent entries
/// are not emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdditionalData {
    pub bill_number: Option<String>,
    pub mobile_number: Option<String>,
    pub store_label: Option<String>,
    pub terminal_label: Option<String>,
}

/// Build the complete QR payload string.
///
/// Field order is fixed: payload format indicator, point of initiation,
/// merchant account information, merchant category code, country code,
/// merchant name, merchant city, timestamp extension (when configured),
/// transaction amount, transaction currency, additional data template,
/// CRC. The output is immutable once returned; identical inputs under a
/// fixed clock produce byte-identical payloads.
pub fn create_qr(
    request: &QrRequest,
    config: &QrConfig,
    clock: &impl Clock,
) -> Result<String, KhqrError> {
    let mut fields = vec![
        Field::PayloadFormatIndicator,
        Field::PointOfInitiation(config.point_of_initiation),
        Field::MerchantAccount {
            account_id: &request.bank_account,
        },
        Field::MerchantCategoryCode,
        Field::CountryCode,
        Field::MerchantName(&request.merchant_name),
        Field::MerchantCity(&request.merchant_city),
    ];
    if config.include_timestamp {
        fields.push(Field::Timestamp {
            millis: clock.now_millis(),
        });
    }
    fields.push(Field::Amount {
        value: request.amount,
        currency: request.currency,
    });
    fields.push(Field::TransactionCurrency(request.currency));
    fields.push(Field::AdditionalData(&request.additional));

    let mut payload = String::new();
    for field in &fields {
        if let Some(tlv) = field.encode(config)? {
            payload.push_str(&tlv.render());
        }
    }
    payload.push_str(&checksum_field(&payload));

    tracing::debug!(bytes = payload.len(), "assembled KHQR payload");
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::crc16_ccitt_false;
    use crate::digest::md5_hex;
    use crate::field::PointOfInitiation;
    use crate::tlv;

    struct FixedClock(u64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> u64 {
            self.0
        }
    }

    fn sample_request() -> QrRequest {
        QrRequest {
            bank_account: "kimhoir@aba".to_string(),
            merchant_name: "Kimhoir".to_string(),
            merchant_city: "Phnom Penh".to_string(),
            amount: 100.0,
            currency: Currency::Khr,
            additional: AdditionalData {
                bill_number: Some("123456789".to_string()),
                mobile_number: Some("85512345678".to_string()),
                store_label: Some("MShop".to_string()),
                terminal_label: Some("Buy Course".to_string()),
            },
        }
    }

    #[test]
    fn test_payload_starts_with_format_indicator() {
        let payload =
            create_qr(&sample_request(), &QrConfig::default(), &FixedClock(1727763046123))
                .unwrap();
        assert!(payload.starts_with("000201"));
    }

    #[test]
    fn test_mandated_field_order() {
        let payload =
            create_qr(&sample_request(), &QrConfig::default(), &FixedClock(1727763046123))
                .unwrap();
        let fields = tlv::parse(&payload).unwrap();
        let tags: Vec<&str> = fields.iter().map(|f| f.tag.as_str()).collect();
        assert_eq!(
            tags,
            ["00", "01", "29", "52", "58", "59", "60", "99", "54", "53", "62", "63"]
        );
    }

    #[test]
    fn test_round_trip_reconstructs_field_values() {
        let request = sample_request();
        let payload =
            create_qr(&request, &QrConfig::default(), &FixedClock(1727763046123)).unwrap();
        let fields = tlv::parse(&payload).unwrap();

        let value_of = |tag: &str| {
            fields
                .iter()
                .find(|f| f.tag == tag)
                .map(|f| f.value.clone())
                .unwrap()
        };
        assert_eq!(value_of("00"), "01");
        assert_eq!(value_of("01"), "12");
        assert_eq!(value_of("52"), "5999");
        assert_eq!(value_of("58"), "KH");
        assert_eq!(value_of("59"), "Kimhoir");
        assert_eq!(value_of("60"), "Phnom Penh");
        assert_eq!(value_of("54"), "100");
        assert_eq!(value_of("53"), "116");

        // Composites re-parse into their sub-fields.
        let account = tlv::parse(&value_of("29")).unwrap();
        assert_eq!(account[0].tag, "00");
        assert_eq!(account[0].value, "kimhoir@aba");

        let timestamp = tlv::parse(&value_of("99")).unwrap();
        assert_eq!(timestamp[0].value, "1727763046123");

        let additional = tlv::parse(&value_of("62")).unwrap();
        let sub: Vec<(&str, &str)> = additional
            .iter()
            .map(|f| (f.tag.as_str(), f.value.as_str()))
            .collect();
        assert_eq!(
            sub,
            [
                ("01", "123456789"),
                ("02", "85512345678"),
                ("03", "MShop"),
                ("07", "Buy Course"),
            ]
        );
    }

    #[test]
    fn test_checksum_verifies_against_payload() {
        let payload =
            create_qr(&sample_request(), &QrConfig::default(), &FixedClock(1727763046123))
                .unwrap();
        let (body, crc) = payload.split_at(payload.len() - 4);
        assert!(body.ends_with("6304"));
        let recomputed = crc16_ccitt_false(body.as_bytes());
        assert_eq!(crc, format!("{recomputed:04X}"));
    }

    #[test]
    fn test_fixed_clock_builds_are_byte_identical() {
        let request = sample_request();
        let clock = FixedClock(1727763046123);
        let first = create_qr(&request, &QrConfig::default(), &clock).unwrap();
        let second = create_qr(&request, &QrConfig::default(), &clock).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_digest_is_stable_and_sensitive() {
        let request = sample_request();
        let clock = FixedClock(1727763046123);
        let payload = create_qr(&request, &QrConfig::default(), &clock).unwrap();
        assert_eq!(md5_hex(&payload), md5_hex(&payload));

        let mut changed = request.clone();
        changed.merchant_name = "Sokha".to_string();
        let other = create_qr(&changed, &QrConfig::default(), &clock).unwrap();
        assert_ne!(md5_hex(&payload), md5_hex(&other));
    }

    #[test]
    fn test_khmer_merchant_name_length_is_byte_count() {
        let mut request = sample_request();
        request.merchant_name = "ភ្នំពេញ".to_string();
        let payload =
            create_qr(&request, &QrConfig::default(), &FixedClock(1727763046123)).unwrap();
        assert!(payload.contains("5921ភ្នំពេញ"));
        let fields = tlv::parse(&payload).unwrap();
        let name = fields.iter().find(|f| f.tag == "59").unwrap();
        assert_eq!(name.value, "ភ្នំពេញ");
    }

    #[test]
    fn test_oversized_merchant_name_aborts_with_no_output() {
        let mut request = sample_request();
        request.merchant_name = "ក".repeat(40); // 120 UTF-8 bytes
        let err = create_qr(&request, &QrConfig::default(), &FixedClock(0)).unwrap_err();
        assert_eq!(
            err,
            KhqrError::LengthExceeded {
                tag: "59".to_string(),
                len: 120
            }
        );
    }

    #[test]
    fn test_invalid_amount_aborts_before_checksum() {
        let mut request = sample_request();
        request.amount = -5.0;
        assert!(matches!(
            create_qr(&request, &QrConfig::default(), &FixedClock(0)),
            Err(KhqrError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_timestamp_can_be_disabled() {
        let config = QrConfig {
            include_timestamp: false,
            ..QrConfig::default()
        };
        let payload = create_qr(&sample_request(), &config, &FixedClock(1727763046123)).unwrap();
        let fields = tlv::parse(&payload).unwrap();
        assert!(fields.iter().all(|f| f.tag != "99"));
    }

    #[test]
    fn test_static_point_of_initiation() {
        let config = QrConfig {
            point_of_initiation: PointOfInitiation::Static,
            ..QrConfig::default()
        };
        let payload = create_qr(&sample_request(), &config, &FixedClock(0)).unwrap();
        assert!(payload.contains("010211"));
    }

    #[test]
    fn test_empty_additional_data_omits_template() {
        let mut request = sample_request();
        request.additional = AdditionalData::default();
        let payload =
            create_qr(&request, &QrConfig::default(), &FixedClock(1727763046123)).unwrap();
        let fields = tlv::parse(&payload).unwrap();
        assert!(fields.iter().all(|f| f.tag != "62"));
    }
}
