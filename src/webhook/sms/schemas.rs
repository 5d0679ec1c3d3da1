//! Shape-tolerant normalization of inbound provider payloads.
//!
//! Providers do not share a schema: the same notification may arrive
//! with `from`/`to`, with the `from_number` underscore convention, with
//! the telecom `msisdn` naming, or wrapped one level deep under
//! `data.payload`. The normalizer is a best-effort adapter, not a
//! validator: anything it cannot resolve degrades to a fallback value
//! instead of rejecting the message.

use crate::consts;
use serde_json::Value;

/// Canonical `(from, to, text)` triple extracted from a raw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSms {
    pub from: String,
    pub to: String,
    pub text: String,
}

/// Candidate field names for each canonical field, tried in order.
const FROM_FIELDS: [&str; 3] = ["from", "from_number", "msisdn"];
const TO_FIELDS: [&str; 3] = ["to", "to_number", "to_msisdn"];
const TEXT_FIELDS: [&str; 3] = ["text", "body", "message"];

impl NormalizedSms {
    /// Extracts the canonical triple from an arbitrarily shaped JSON
    /// value. Total function: it never fails, whatever the input looks
    /// like. Missing or wrongly-typed fields fall back to
    /// [UNKNOWN_NUMBER](consts::UNKNOWN_NUMBER) for the numbers and to
    /// the empty string for the text.
    pub fn from_payload(raw: &Value) -> Self {
        let payload = unwrap_nested_payload(raw);

        Self {
            from: first_non_empty_str(payload, &FROM_FIELDS)
                .unwrap_or_else(|| consts::UNKNOWN_NUMBER.to_string()),
            to: first_non_empty_str(payload, &TO_FIELDS)
                .unwrap_or_else(|| consts::UNKNOWN_NUMBER.to_string()),
            text: first_non_empty_str(payload, &TEXT_FIELDS).unwrap_or_default(),
        }
    }
}

/// Some providers wrap the notification as `{"data": {"payload": {...}}}`;
/// unwrap to the inner object when that shape is present.
fn unwrap_nested_payload(raw: &Value) -> &Value {
    match raw.pointer("/data/payload") {
        Some(inner) if inner.is_object() => inner,
        _ => raw,
    }
}

/// First candidate field holding a non-empty string, in order.
fn first_non_empty_str(payload: &Value, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|field| payload.get(field))
        .filter_map(Value::as_str)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_payload_canonical_fields() {
        let sms = NormalizedSms::from_payload(&json!({
            "from": "+447700900000",
            "to": "+447911123456",
            "text": "Your OTP is 554433"
        }));

        assert_eq!(sms.from, "+447700900000");
        assert_eq!(sms.to, "+447911123456");
        assert_eq!(sms.text, "Your OTP is 554433");
    }

    #[test]
    fn test_from_payload_underscore_convention() {
        let sms = NormalizedSms::from_payload(&json!({
            "from_number": "+15550001111",
            "to_number": "+15550002222",
            "body": "hello"
        }));

        assert_eq!(sms.from, "+15550001111");
        assert_eq!(sms.to, "+15550002222");
        assert_eq!(sms.text, "hello");
    }

    #[test]
    fn test_from_payload_msisdn_convention() {
        let sms = NormalizedSms::from_payload(&json!({
            "msisdn": "447700900000",
            "to_msisdn": "447911123456",
            "message": "code 1234"
        }));

        assert_eq!(sms.from, "447700900000");
        assert_eq!(sms.to, "447911123456");
        assert_eq!(sms.text, "code 1234");
    }

    #[test]
    fn test_from_payload_unwraps_nested_data_payload() {
        let sms = NormalizedSms::from_payload(&json!({
            "data": {
                "payload": {
                    "from": "inner-sender",
                    "to": "inner-receiver",
                    "text": "inner text"
                }
            },
            "from": "outer-sender"
        }));

        assert_eq!(sms.from, "inner-sender");
        assert_eq!(sms.to, "inner-receiver");
        assert_eq!(sms.text, "inner text");
    }

    #[test]
    fn test_from_payload_non_object_nested_payload_falls_back_to_raw() {
        let sms = NormalizedSms::from_payload(&json!({
            "data": { "payload": "not an object" },
            "from": "outer-sender"
        }));

        assert_eq!(sms.from, "outer-sender");
    }

    #[test]
    fn test_from_payload_empty_object_uses_fallbacks() {
        let sms = NormalizedSms::from_payload(&json!({}));

        assert_eq!(sms.from, "unknown");
        assert_eq!(sms.to, "unknown");
        assert_eq!(sms.text, "");
    }

    #[test]
    fn test_from_payload_never_fails_on_non_objects() {
        for raw in [json!(null), json!("just a string"), json!(42), json!([1, 2, 3])] {
            let sms = NormalizedSms::from_payload(&raw);
            assert_eq!(sms.from, "unknown");
            assert_eq!(sms.to, "unknown");
            assert_eq!(sms.text, "");
        }
    }

    #[test]
    fn test_from_payload_skips_wrongly_typed_and_empty_candidates() {
        let sms = NormalizedSms::from_payload(&json!({
            "from": 12345,
            "from_number": "",
            "msisdn": "+15550001111",
            "to": ["+15550002222"],
            "text": { "nested": "no" },
            "body": "actual text"
        }));

        assert_eq!(sms.from, "+15550001111");
        assert_eq!(sms.to, "unknown");
        assert_eq!(sms.text, "actual text");
    }
}
