//! Cache key codec tests

use flowcache_domain::constants::INTEGER_ABSENT_SENTINEL;
use flowcache_domain::{CacheKey, IntegerKey, JsonKey, StorageKind, StoredValue, StringKey};
use serde::{Deserialize, Serialize};
use std::any::TypeId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Forecast {
    city: String,
    celsius: Vec<i32>,
}

#[test]
fn test_string_key_identity_codec() {
    let key = StringKey::new("greeting");

    assert_eq!(key.name(), "greeting");
    assert_eq!(key.storage_kind(), StorageKind::Text);

    let stored = key.encode(&"hello".to_string()).unwrap();
    assert_eq!(stored, StoredValue::Text("hello".to_string()));
    assert_eq!(key.decode(stored), Some("hello".to_string()));
}

#[test]
fn test_string_key_rejects_integer_storage() {
    let key = StringKey::new("greeting");
    assert_eq!(key.decode(StoredValue::Integer(5)), None);
}

#[test]
fn test_integer_key_codec() {
    let key = IntegerKey::new("counter");

    assert_eq!(key.storage_kind(), StorageKind::Integer);
    let stored = key.encode(&-42).unwrap();
    assert_eq!(stored, StoredValue::Integer(-42));
    assert_eq!(key.decode(stored), Some(-42));
    assert_eq!(key.decode(StoredValue::Integer(0)), Some(0));
}

#[test]
fn test_integer_key_sentinel_reads_as_absent() {
    let key = IntegerKey::new("counter");

    assert_eq!(IntegerKey::sentinel(), INTEGER_ABSENT_SENTINEL);
    // The sentinel still encodes, it just never decodes.
    let stored = key.encode(&INTEGER_ABSENT_SENTINEL).unwrap();
    assert_eq!(stored, StoredValue::Integer(i64::MIN));
    assert_eq!(key.decode(stored), None);
}

#[test]
fn test_integer_key_rejects_text_storage() {
    let key = IntegerKey::new("counter");
    assert_eq!(key.decode(StoredValue::Text("12".to_string())), None);
}

#[test]
fn test_json_key_round_trip() {
    let key = JsonKey::<Forecast>::new("forecast");
    let value = Forecast {
        city: "Lisbon".to_string(),
        celsius: vec![18, 21, 19],
    };

    assert_eq!(key.storage_kind(), StorageKind::Text);
    let stored = key.encode(&value).unwrap();
    assert!(stored.as_text().unwrap().contains("Lisbon"));
    assert_eq!(key.decode(stored), Some(value));
}

#[test]
fn test_json_key_malformed_text_is_absent() {
    let key = JsonKey::<Forecast>::new("forecast");

    assert_eq!(key.decode(StoredValue::Text("not json".to_string())), None);
    assert_eq!(
        key.decode(StoredValue::Text(r#"{"city": 3}"#.to_string())),
        None
    );
    assert_eq!(key.decode(StoredValue::Integer(1)), None);
}

#[test]
fn test_type_matches() {
    let string_key = StringKey::new("a");
    let integer_key = IntegerKey::new("b");
    let json_key = JsonKey::<Forecast>::new("c");

    assert!(string_key.type_matches(TypeId::of::<String>()));
    assert!(!string_key.type_matches(TypeId::of::<i64>()));
    assert!(integer_key.type_matches(TypeId::of::<i64>()));
    assert!(json_key.type_matches(TypeId::of::<Forecast>()));
    assert!(!json_key.type_matches(TypeId::of::<String>()));
    assert!(json_key.value_type_name().ends_with("Forecast"));
}

#[test]
fn test_json_key_clone_and_debug() {
    let key = JsonKey::<Forecast>::new("forecast");
    let cloned = key.clone();

    assert_eq!(cloned.name(), "forecast");
    assert!(format!("{key:?}").contains("forecast"));
}
