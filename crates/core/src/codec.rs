//! URL token codec for [`StatsRecord`].
//!
//! A token is the record's JSON form encoded with standard base64 (with
//! padding, no line wrapping). Tokens may contain `+`, `/` and `=`, so
//! callers percent-encode them when building a query string.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::CodecError;
use crate::stats::StatsRecord;

/// Encodes a record into a token.
///
/// # Errors
/// Returns [`CodecError::Serialize`] if JSON serialization fails, which does
/// not happen for records built through the public API.
pub fn encode(record: &StatsRecord) -> Result<String, CodecError> {
    let json = serde_json::to_vec(record).map_err(CodecError::Serialize)?;
    Ok(STANDARD.encode(json))
}

/// Decodes a token produced by [`encode`].
///
/// Spaces are read back as `+` since lax query decoders turn an unescaped
/// `+` into a space. No range validation is done on the decoded values.
///
/// # Errors
/// [`CodecError::MalformedToken`] when the token is not base64,
/// [`CodecError::MalformedRecord`] when the payload is not a stats record.
pub fn decode(token: &str) -> Result<StatsRecord, CodecError> {
    let token = token.trim().replace(' ', "+");
    let bytes = STANDARD.decode(token)?;
    serde_json::from_slice(&bytes).map_err(CodecError::MalformedRecord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StoreType, UsageLimit, UsageLimits};

    #[test]
    fn test_round_trip_fid_and_units_only() {
        let record = StatsRecord::new(42).with_storage_units(3);
        let decoded = decode(&encode(&record).unwrap()).unwrap();
        assert_eq!(decoded, record);
        assert_eq!(decoded.fid, 42);
        assert_eq!(decoded.storage_units, Some(3));
        assert_eq!(decoded.limits, UsageLimits::default());
    }

    #[test]
    fn test_round_trip_records() {
        let records = [
            StatsRecord::new(0),
            StatsRecord::new(1).with_limit(StoreType::Casts, UsageLimit::new(250, 500)),
            StatsRecord::new(u64::MAX)
                .with_storage_units(0)
                .with_limit(StoreType::Casts, UsageLimit::new(9000, 5000))
                .with_limit(StoreType::Reactions, UsageLimit::new(0, 0))
                .with_limit(StoreType::Links, UsageLimit::new(10, 2500))
                .with_limit(StoreType::Verifications, UsageLimit::new(2, 25)),
        ];
        for record in records {
            assert_eq!(decode(&encode(&record).unwrap()).unwrap(), record);
        }
    }

    #[test]
    fn test_token_is_plain_base64() {
        let token = encode(&StatsRecord::new(42)).unwrap();
        assert_eq!(token, "eyJmaWQiOjQyfQ==");
        assert!(token.bytes().all(|b| b.is_ascii_alphanumeric() || b"+/=".contains(&b)));
    }

    #[test]
    fn test_decode_tolerates_plus_turned_into_space() {
        let record = StatsRecord::new(1).with_storage_units(1000);
        let token = encode(&record).unwrap();
        let mangled = token.replace('+', " ");
        assert_eq!(decode(&mangled).unwrap(), record);
    }

    #[test]
    fn test_decode_rejects_non_base64() {
        let err = decode("not*base64!").unwrap_err();
        assert!(matches!(err, CodecError::MalformedToken(_)), "got {err:?}");
    }

    #[test]
    fn test_decode_rejects_non_json_payload() {
        let token = STANDARD.encode("hello world");
        let err = decode(&token).unwrap_err();
        assert!(matches!(err, CodecError::MalformedRecord(_)), "got {err:?}");
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        for payload in [r#"{"fid":"abc"}"#, r#"{"storageUnits":3}"#, "[1,2,3]"] {
            let err = decode(&STANDARD.encode(payload)).unwrap_err();
            assert!(matches!(err, CodecError::MalformedRecord(_)), "{payload}: got {err:?}");
        }
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let token = STANDARD.encode([0xff, 0xfe, 0xfd]);
        assert!(matches!(decode(&token), Err(CodecError::MalformedRecord(_))));
    }
}
