use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use leafdb::{memory::InMemoryStore, prelude::*};

fn fields(value: Value) -> Fields {
    value.as_object().cloned().unwrap()
}

fn new_store() -> DocumentStore<InMemoryStore> {
    DocumentStore::new(InMemoryStore::new())
}

#[test]
fn test_insert_then_get_by_id() {
    let mut store = new_store();
    let data = fields(json!({"key1": "value1", "nested": {"list": [1, "two", null]}}));

    let doc = store.insert(data.clone());

    assert_eq!(store.get_by_id(doc.id).map(Document::into_data), Some(data));
}

#[test]
fn test_get_missing_is_absent() {
    let store = new_store();
    assert_eq!(store.get_by_id(12345), None);
}

#[test]
fn test_delete_then_get_is_absent() {
    let mut store = new_store();
    let doc = store.insert(fields(json!({"a": 1})));

    store.delete_by_id(doc.id);
    assert_eq!(store.get_by_id(doc.id), None);

    // Deleting again, or deleting something never stored, is a no-op
    store.delete_by_id(doc.id);
    store.delete_by_id(-42);
    assert!(store.is_empty());
}

#[test]
fn test_overwrite_missing_id_creates_nothing() {
    let mut store = new_store();
    store.insert(fields(json!({"a": 1})));
    let before = store.len();

    assert_eq!(store.overwrite_by_id(999, fields(json!({"b": 2}))), None);
    assert_eq!(store.len(), before);
    assert!(!store.contains(999));
}

#[test]
fn test_overwrite_existing_id_replaces_fields() {
    let mut store = new_store();
    let doc = store.insert(fields(json!({"a": 1, "b": 2})));

    let replaced = store.overwrite_by_id(doc.id, fields(json!({"c": 3}))).unwrap();

    assert_eq!(replaced, Document::new(doc.id, fields(json!({"c": 3}))));
    assert_eq!(store.get_by_id(doc.id), Some(replaced));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_find_documents_with_empty_criteria_returns_everything() {
    let mut store = new_store();
    for n in 0..10 {
        store.insert(fields(json!({ "n": n })));
    }

    assert_eq!(store.find_documents(&Criteria::new()).len(), 10);
}

#[test]
fn test_find_documents_filters_on_exact_pair() {
    let mut store = new_store();
    let hit = store.insert(fields(json!({"key1": "value1", "other": true})));
    store.insert(fields(json!({"key1": "value2"})));
    store.insert(fields(json!({"key2": "value1"})));
    store.insert(fields(json!({"key1": 1})));
    let hit_again = store.insert(fields(json!({"key1": "value1"})));

    let found = store.find_documents(&Criteria::new().eq("key1", "value1"));

    assert_eq!(found, vec![hit, hit_again]);
}

#[test]
fn test_find_first() {
    let mut store = new_store();
    assert_eq!(store.find_first(&Criteria::new()), None);

    store.insert(fields(json!({"kind": "zombie"})));
    let creeper = store.insert(fields(json!({"kind": "creeper", "hp": 20})));

    assert_eq!(store.find_first(&Criteria::new().eq("kind", "creeper")), Some(creeper));
    assert_eq!(store.find_first(&Criteria::new().eq("kind", "ghast")), None);
}

#[test]
fn test_find_on_nested_values_uses_deep_equality() {
    let mut store = new_store();
    let doc = store.insert(fields(json!({"pos": {"x": 1, "y": 64, "z": -3}, "hp": 20})));

    let criteria = Criteria::new()
        .eq("pos", json!({"z": -3, "y": 64, "x": 1}))
        .eq("hp", json!(20.0));
    assert_eq!(store.find_first(&criteria), Some(doc));

    let criteria = Criteria::new().eq("pos", json!({"x": 1, "y": 64}));
    assert_eq!(store.find_first(&criteria), None);
}

#[test]
fn test_export_single_document() {
    let mut store = new_store();
    let doc = store.insert(fields(json!({"key1": "value1"})));

    let exported: Value = serde_json::from_str(&store.export_to_json().unwrap()).unwrap();

    assert_eq!(exported, json!([{"id": doc.id, "data": {"key1": "value1"}}]));
    assert_eq!(exported[0]["data"]["key1"], "value1");
}

#[test]
fn test_export_empty_store() {
    let store = new_store();
    assert_eq!(store.export_to_json().unwrap(), "[]");
}

#[test]
fn test_export_pretty_parses_to_same_documents() {
    let mut store = new_store();
    store.insert(fields(json!({"a": [1, 2, 3]})));
    store.insert(fields(json!({"b": {"c": null}})));

    let compact: Value = serde_json::from_str(&store.export_to_json().unwrap()).unwrap();
    let pretty: Value = serde_json::from_str(&store.export_to_json_pretty().unwrap()).unwrap();

    assert_eq!(compact, pretty);
}

#[test]
fn test_export_import_round_trip() {
    let mut store = new_store();
    store.insert(fields(json!({"key1": "value1"})));
    store.insert(fields(json!({"deep": {"list": [true, null, 1.5, "s"]}})));
    store.insert(Fields::new());
    let before = store.find_documents(&Criteria::new());

    let text = store.export_to_json().unwrap();

    // Re-importing into the same store changes nothing
    assert_eq!(store.import_from_json(&text).unwrap(), 3);
    assert_eq!(store.find_documents(&Criteria::new()), before);

    // Importing into a fresh store reproduces it
    let mut copy = new_store();
    copy.import_from_json(&text).unwrap();
    assert_eq!(copy.find_documents(&Criteria::new()), before);
}

#[test]
fn test_import_merges_by_id() {
    let mut store = new_store();
    store
        .import_from_json(r#"[{"id": 1, "data": {"v": "kept"}}, {"id": 2, "data": {"v": "old"}}]"#)
        .unwrap();

    let imported = store
        .import_from_json(r#"[{"id": 2, "data": {"v": "new"}}, {"id": 3, "data": {}}]"#)
        .unwrap();

    assert_eq!(imported, 2);
    assert_eq!(store.len(), 3);
    assert_eq!(store.get_by_id(1).unwrap().data, fields(json!({"v": "kept"})));
    assert_eq!(store.get_by_id(2).unwrap().data, fields(json!({"v": "new"})));
}

#[test]
fn test_import_invalid_text_is_parse_error() {
    let mut store = new_store();
    let doc = store.insert(fields(json!({"key1": "value1"})));

    let err = store.import_from_json("not valid text").unwrap_err();

    assert!(matches!(err, DocumentStoreError::Parse(_)));
    assert_eq!(store.find_documents(&Criteria::new()), vec![doc]);
}

#[test]
fn test_import_wrong_shape_is_parse_error() {
    let mut store = new_store();

    for text in [
        r#"{"id": 1, "data": {}}"#,
        r#"[{"id": 1}]"#,
        r#"[{"id": 1, "data": {}, "extra": 0}]"#,
        r#"[{"id": "1", "data": {}}]"#,
        r#"[{"id": 1.5, "data": {}}]"#,
        r#"[{"id": 1, "data": [1, 2]}]"#,
        r#"[{"id": 1, "data": null}]"#,
    ] {
        let err = store.import_from_json(text).unwrap_err();
        assert!(matches!(err, DocumentStoreError::Parse(_)), "accepted {text}");
    }

    assert!(store.is_empty());
}

#[test]
fn test_import_null_is_empty_export() {
    let mut store = new_store();
    store.insert(Fields::new());

    assert_eq!(store.import_from_json("null").unwrap(), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_wall_clock_collisions_overwrite() {
    let mut store = DocumentStore::builder(InMemoryStore::new())
        .id_strategy(IdStrategy::WallClock)
        .build();

    let ids = (0..200)
        .map(|n| store.insert(fields(json!({ "n": n }))).id)
        .collect::<Vec<_>>();
    let distinct = ids.iter().collect::<HashSet<_>>().len();

    assert_eq!(store.len(), distinct);
}

#[test]
fn test_monotonic_ids_are_unique() {
    let mut store = new_store();

    let ids = (0..200)
        .map(|n| store.insert(fields(json!({ "n": n }))).id)
        .collect::<Vec<_>>();

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(store.len(), 200);
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Player {
    name: String,
    level: u32,
    inventory: Vec<String>,
}

#[test]
fn test_insert_record_and_decode() {
    let mut store = new_store();
    let player = Player {
        name: "alex".to_string(),
        level: 12,
        inventory: vec!["pickaxe".to_string()],
    };

    let doc = store.insert_record(&player).unwrap();

    assert_eq!(store.find_first(&Criteria::new().eq("name", "alex")), Some(doc.clone()));
    assert_eq!(doc.decode::<Player>().unwrap(), player);
}

#[test]
fn test_insert_record_rejects_non_objects() {
    let mut store = new_store();

    let err = store.insert_record("just a string").unwrap_err();

    assert!(matches!(err, DocumentStoreError::Serialization(_)));
    assert!(store.is_empty());
}

#[test]
fn test_seeded_backend_through_builder() {
    let backend = InMemoryStore::builder()
        .document(Document::new(7, fields(json!({"seed": true}))))
        .build()
        .unwrap();
    let store = DocumentStore::new(backend);

    assert_eq!(store.find_first(&Criteria::new().eq("seed", true)).map(|doc| doc.id), Some(7));
}

#[test]
fn test_dynamic_backend() {
    let backend: Box<dyn StoreBackend> = Box::new(InMemoryStore::new());
    let mut store = DocumentStore::new(backend);

    let doc = store.insert(fields(json!({"key1": "value1"})));

    assert_eq!(store.get_by_id(doc.id), Some(doc));
}
