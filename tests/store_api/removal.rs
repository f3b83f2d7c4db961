//! remove and the filtered sequence removals

use crate::util::sample_store;
use pathtree::{DocumentStore, Error, TreeError};
use serde_json::json;

#[test]
fn remove_deletes_a_leaf() {
    let mut store = sample_store();
    let removed = store.remove("settings.notifications.sms").unwrap();
    assert_eq!(removed, Some(json!(false)));
    assert_eq!(store.get("settings.notifications.sms").unwrap(), None);
    // siblings survive
    assert_eq!(
        store.get("settings.notifications.email").unwrap(),
        Some(&json!(true))
    );
}

#[test]
fn remove_deletes_a_subtree() {
    let mut store = sample_store();
    let removed = store.remove("users.0.profile").unwrap().unwrap();
    assert_eq!(removed["address"]["city"], json!("Wonderland"));
    assert_eq!(store.get("users.0.profile").unwrap(), None);
    assert_eq!(store.get("users.0.name").unwrap(), Some(&json!("Alice")));
}

#[test]
fn remove_missing_path_is_a_silent_noop() {
    let mut store = sample_store();
    let before = store.all().clone();
    assert_eq!(store.remove("settings.fonts.size").unwrap(), None);
    assert_eq!(store.remove("nope").unwrap(), None);
    assert_eq!(store.all(), &before);
}

#[test]
fn remove_is_idempotent() {
    let mut store = sample_store();
    store.remove("settings.theme").unwrap();
    let once = store.all().clone();
    assert_eq!(store.remove("settings.theme").unwrap(), None);
    assert_eq!(store.all(), &once);
}

#[test]
fn remove_sequence_element_shifts_the_tail() {
    let mut store = sample_store();
    let removed = store.remove("settings.languages.0").unwrap();
    assert_eq!(removed, Some(json!("en")));
    assert_eq!(
        store.get("settings.languages").unwrap(),
        Some(&json!(["es", "fr"]))
    );
}

#[test]
fn remove_array_value_filters_every_match() {
    let mut store = DocumentStore::in_memory();
    store.set("items", json!(["a", "b", "a", "c"])).unwrap();

    let removed = store.remove_array_value("items", &json!("a")).unwrap();
    assert_eq!(removed, 2);
    assert_eq!(store.get("items").unwrap(), Some(&json!(["b", "c"])));
}

#[test]
fn remove_array_value_is_strict() {
    let mut store = DocumentStore::in_memory();
    store.set("items", json!([1, "1", 2])).unwrap();

    // the string "1" does not match the number 1
    let removed = store.remove_array_value("items", &json!(1)).unwrap();
    assert_eq!(removed, 1);
    assert_eq!(store.get("items").unwrap(), Some(&json!(["1", 2])));
}

#[test]
fn remove_array_where_reindexes_densely() {
    let mut store = DocumentStore::in_memory();
    store.set("items", json!(["1", "2", "3"])).unwrap();

    let removed = store
        .remove_array_where("items", |item| item == &json!("1"))
        .unwrap();
    assert_eq!(removed, 1);
    assert_eq!(store.get("items").unwrap(), Some(&json!(["2", "3"])));
    assert_eq!(store.get("items.0").unwrap(), Some(&json!("2")));
}

#[test]
fn remove_array_where_with_structured_elements() {
    let mut store = sample_store();
    let removed = store
        .remove_array_where("users", |user| user["id"] == json!(1))
        .unwrap();
    assert_eq!(removed, 1);
    assert_eq!(store.get("users.0.name").unwrap(), Some(&json!("Bob")));
}

#[test]
fn filtered_removal_on_non_sequence_fails() {
    let mut store = sample_store();
    let err = store
        .remove_array_value("settings.theme", &json!("dark"))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Tree(TreeError::WrongKind { expected: "array", .. })
    ));

    let err = store
        .remove_array_where("users.0", |_| true)
        .unwrap_err();
    assert!(matches!(err, Error::Tree(TreeError::WrongKind { .. })));
}
