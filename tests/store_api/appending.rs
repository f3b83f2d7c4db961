//! append_array / append_unique and their uniqueness rules

use crate::util::sample_store;
use pathtree::{DocumentStore, Error, TreeError};
use serde_json::json;

#[test]
fn append_grows_the_sequence_by_one() {
    let mut store = sample_store();
    let before = store.get("settings.languages").unwrap().unwrap().clone();

    store.append_array("settings.languages", "de", false).unwrap();

    let after = store.get("settings.languages").unwrap().unwrap();
    assert_eq!(after.as_array().unwrap().len(), before.as_array().unwrap().len() + 1);
    assert_eq!(after.as_array().unwrap().last(), Some(&json!("de")));
}

#[test]
fn append_to_absent_path_starts_a_sequence() {
    let mut store = DocumentStore::in_memory();
    store.append_array("users.hobbies", "Tennis", true).unwrap();
    assert_eq!(store.get("users.hobbies").unwrap(), Some(&json!(["Tennis"])));
}

#[test]
fn append_unchecked_allows_duplicates() {
    let mut store = sample_store();
    store.append_array("settings.languages", "en", false).unwrap();
    let languages = store.get("settings.languages").unwrap().unwrap();
    assert_eq!(languages, &json!(["en", "es", "fr", "en"]));
}

#[test]
fn enforced_append_rejects_existing_value() {
    let mut store = sample_store();
    let err = store
        .append_array("settings.languages", "en", true)
        .unwrap_err();
    assert!(matches!(err, Error::Tree(TreeError::Duplicate { .. })));
    // nothing was committed
    assert_eq!(
        store.get("settings.languages").unwrap(),
        Some(&json!(["en", "es", "fr"]))
    );
}

#[test]
fn enforced_append_compares_loosely() {
    let mut store = DocumentStore::in_memory();
    store.set("nums", json!([5])).unwrap();

    // "5" coerces equal to 5, so it counts as a duplicate
    let err = store.append_array("nums", "5", true).unwrap_err();
    assert!(matches!(err, Error::Tree(TreeError::Duplicate { .. })));
}

#[test]
fn append_to_non_sequence_fails() {
    let mut store = sample_store();
    let err = store.append_array("settings.theme", "x", false).unwrap_err();
    assert!(matches!(
        err,
        Error::Tree(TreeError::WrongKind {
            expected: "array",
            found: "string",
            ..
        })
    ));

    let err = store.append_array("settings", "x", false).unwrap_err();
    assert!(matches!(
        err,
        Error::Tree(TreeError::WrongKind { found: "object", .. })
    ));
}

#[test]
fn unique_append_compares_strictly() {
    let mut store = DocumentStore::in_memory();
    store.set("nums", json!([5])).unwrap();

    // strictly, the string "5" is a different value
    store.append_unique("nums", "5", false).unwrap();
    assert_eq!(store.get("nums").unwrap(), Some(&json!([5, "5"])));

    let err = store.append_unique("nums", 5, false).unwrap_err();
    assert!(matches!(err, Error::Tree(TreeError::Duplicate { .. })));
}

#[test]
fn unique_append_by_structure_detects_equal_containers() {
    let mut store = sample_store();
    let existing = json!({
        "id": 1,
        "name": "Alice",
        "roles": ["admin", "user"],
        "profile": {
            "age": 30,
            "address": {"city": "Wonderland", "zip": "12345"}
        }
    });

    let err = store.append_unique("users", existing, true).unwrap_err();
    assert!(matches!(err, Error::Tree(TreeError::Duplicate { .. })));

    store
        .append_unique("users", json!({"id": 3, "name": "Carol"}), true)
        .unwrap();
    assert_eq!(store.get("users.2.name").unwrap(), Some(&json!("Carol")));
}

#[test]
fn unique_append_by_structure_ignores_field_order() {
    let mut store = DocumentStore::in_memory();
    store.set("pairs", json!([{"a": 1, "b": 2}])).unwrap();

    // structural equality is shape + values, not spelling order
    let err = store
        .append_unique("pairs", json!({"b": 2, "a": 1}), true)
        .unwrap_err();
    assert!(matches!(err, Error::Tree(TreeError::Duplicate { .. })));
}
