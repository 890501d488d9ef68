//! Tests for decode module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::value::RawValue;

#[derive(Debug, PartialEq, Deserialize)]
struct Item {
    id: u32,
    name: String,
}

fn raw(json: &str) -> Box<RawValue> {
    RawValue::from_string(json.to_string()).unwrap()
}

#[test]
fn test_decode_entities_preserves_order() {
    let block = raw(r#"[{"id": 2, "name": "b"}, {"id": 1, "name": "a"}]"#);
    let items: Vec<Item> = decode_entities(&block).unwrap();

    assert_eq!(
        items,
        vec![
            Item {
                id: 2,
                name: "b".to_string()
            },
            Item {
                id: 1,
                name: "a".to_string()
            },
        ]
    );
}

#[test]
fn test_decode_entities_rejects_wrong_shape() {
    let block = raw(r#"{"id": 1, "name": "not a list"}"#);
    let err = decode_entities::<Item>(&block).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));

    let block = raw(r#"[{"id": "not a number", "name": "a"}]"#);
    let err = decode_entities::<Item>(&block).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_decode_entity_single() {
    let item: Item = decode_entity(br#"{"id": 7, "name": "seven"}"#).unwrap();
    assert_eq!(item.id, 7);
    assert_eq!(item.name, "seven");
}

#[test]
fn test_json_entity_decoder_delegates() {
    let decoder = JsonEntityDecoder::<Item>::new();
    let block = raw(r#"[{"id": 3, "name": "c"}]"#);

    let items = decoder.decode(&block).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 3);
}

#[test]
fn test_json_entity_decoder_empty_block() {
    let decoder = JsonEntityDecoder::<Item>::new();
    let items = decoder.decode(&raw("[]")).unwrap();
    assert!(items.is_empty());
}
