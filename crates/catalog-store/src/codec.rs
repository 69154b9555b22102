//! Snapshot Codec
//!
//! Turns a [`CatalogSnapshot`] into a string safe to embed as a single URL
//! query value and back. The JSON is percent-escaped before the base64
//! layer so the encoder only ever sees ASCII; this matches the payload
//! format already written by deployed dashboards.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::domain::CatalogSnapshot;

/// Schema marker attached to every encoded snapshot. Decode carries it back
/// as inert metadata and never branches on it.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// Encode a snapshot for embedding as a single URL query value.
///
/// Returns the empty string if serialization fails; callers treat that as
/// "nothing to publish" and keep the storage copy authoritative.
pub fn encode(snapshot: &CatalogSnapshot) -> String {
    let mut tagged = snapshot.clone();
    tagged.version = Some(SNAPSHOT_VERSION.to_string());
    match serde_json::to_string(&tagged) {
        Ok(json) => {
            let escaped = utf8_percent_encode(&json, NON_ALPHANUMERIC).to_string();
            STANDARD.encode(escaped)
        }
        Err(e) => {
            log::warn!("snapshot encode failed: {}", e);
            String::new()
        }
    }
}

/// Decode a snapshot previously produced by [`encode`].
///
/// Absent or non-array collection fields come back as empty collections, so
/// a partially malformed payload still yields a structurally valid snapshot.
/// Returns `None` on any failure; the caller falls back to the next source.
pub fn decode(raw: &str) -> Option<CatalogSnapshot> {
    let bytes = STANDARD.decode(raw.trim()).ok()?;
    let escaped = String::from_utf8(bytes).ok()?;
    let json = percent_decode_str(&escaped).decode_utf8().ok()?;
    serde_json::from_str(&json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClothingItem, Service, SubService};

    fn sample_snapshot() -> CatalogSnapshot {
        CatalogSnapshot {
            version: None,
            services: vec![
                Service::new("svc-1".to_string(), "Wash & Fold".to_string()),
                Service::new("svc-2".to_string(), "Dry Cleaning".to_string()),
            ],
            sub_services: vec![SubService::new("sub-1".to_string(), "Express".to_string())],
            clothing_items: vec![ClothingItem::new("it-1".to_string(), "Saree".to_string())],
        }
    }

    #[test]
    fn test_round_trip() {
        let snapshot = sample_snapshot();
        let decoded = decode(&encode(&snapshot)).expect("round trip should decode");
        assert_eq!(decoded.services, snapshot.services);
        assert_eq!(decoded.sub_services, snapshot.sub_services);
        assert_eq!(decoded.clothing_items, snapshot.clothing_items);
    }

    #[test]
    fn test_version_marker_attached() {
        let decoded = decode(&encode(&sample_snapshot())).unwrap();
        assert_eq!(decoded.version.as_deref(), Some(SNAPSHOT_VERSION));
    }

    #[test]
    fn test_partial_payload_yields_empty_collections() {
        // A payload written without subServices must decode with an empty
        // collection there, not fail.
        let json = r#"{"services":[{"id":"svc-1","name":"Wash","active":true}],"clothingItems":[]}"#;
        let escaped = utf8_percent_encode(json, NON_ALPHANUMERIC).to_string();
        let raw = STANDARD.encode(escaped);

        let decoded = decode(&raw).expect("partial payload should decode");
        assert_eq!(decoded.services.len(), 1);
        assert!(decoded.sub_services.is_empty());
    }

    #[test]
    fn test_garbage_decodes_to_none() {
        assert!(decode("not base64 at all!").is_none());
        assert!(decode(&STANDARD.encode("%7Bnot json")).is_none());
        assert!(decode("").is_none());
    }

    #[test]
    fn test_encoded_value_is_url_safe_ascii() {
        let raw = encode(&sample_snapshot());
        assert!(!raw.is_empty());
        assert!(raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
    }

    #[test]
    fn test_names_survive_non_ascii() {
        let mut snapshot = sample_snapshot();
        snapshot.services[0].name = "Dhobi Ghat Wäsche".to_string();
        let decoded = decode(&encode(&snapshot)).unwrap();
        assert_eq!(decoded.services[0].name, "Dhobi Ghat Wäsche");
    }
}
