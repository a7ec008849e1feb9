//! Selection payload serializer.
//!
//! The wire form is canonical UTF-8 JSON with short field names,
//! `{"t": [...categories], "s": "schedule"}`. Category order is
//! insertion order; nothing is sorted or de-duplicated here.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrystError};
use crate::selection::Selection;

/// Wire shape of an encrypted selection payload.
#[derive(Serialize, Deserialize)]
struct Payload {
    #[serde(rename = "t")]
    categories: Vec<String>,
    #[serde(rename = "s")]
    schedule: String,
}

/// Serialize a selection to canonical payload bytes.
pub fn encode_payload(selection: &Selection) -> Result<Vec<u8>> {
    let wire = Payload {
        categories: selection.categories.clone(),
        schedule: selection.schedule.clone(),
    };
    serde_json::to_vec(&wire)
        .map_err(|e| TrystError::MalformedPayload(format!("Serialization failed: {}", e)))
}

/// Deserialize payload bytes back to a selection.
///
/// Fails with `TrystError::MalformedPayload` when the bytes are not JSON
/// carrying a sequence of strings under `t` and a string under `s`.
pub fn decode_payload(bytes: &[u8]) -> Result<Selection> {
    let wire: Payload = serde_json::from_slice(bytes)
        .map_err(|e| TrystError::MalformedPayload(format!("Not a selection payload: {}", e)))?;
    Ok(Selection {
        categories: wire.categories,
        schedule: wire.schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_round_trip_preserves_order() {
        let selection = Selection {
            categories: vec!["Coffee".to_string(), "Hiking".to_string()],
            schedule: "Saturday 6:30 PM".to_string(),
        };
        let bytes = encode_payload(&selection).unwrap();
        assert_eq!(decode_payload(&bytes).unwrap(), selection);
    }

    #[test]
    fn test_wire_field_names_are_short() {
        let selection = Selection {
            categories: vec!["Dinner".to_string()],
            schedule: "Friday 7:00 PM".to_string(),
        };
        let bytes = encode_payload(&selection).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, r#"{"t":["Dinner"],"s":"Friday 7:00 PM"}"#);
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        for bad in [
            &br#"{"t":["Hiking"]}"#[..],
            &br#"{"s":"Friday 7:00 PM"}"#[..],
            &br#"{"t":"Hiking","s":"Friday 7:00 PM"}"#[..],
            &br#"{"t":[1,2],"s":"Friday 7:00 PM"}"#[..],
            &b"not json at all"[..],
        ] {
            assert!(matches!(
                decode_payload(bad),
                Err(TrystError::MalformedPayload(_))
            ));
        }
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let bytes = br#"{"t":["Movie"],"s":"Sunday 3:00 PM","extra":true}"#;
        let selection = decode_payload(bytes).unwrap();
        assert_eq!(selection.categories, vec!["Movie"]);
        assert_eq!(selection.schedule, "Sunday 3:00 PM");
    }
}
