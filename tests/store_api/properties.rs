//! Property-based algebra of the accessor operations

use pathtree::DocumentStore;
use proptest::prelude::*;
use serde_json::Value;

fn segment() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn dotted_path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..4).prop_map(|segs| segs.join("."))
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn set_then_get_round_trips(path in dotted_path(), value in leaf()) {
        let mut store = DocumentStore::in_memory();
        store.set(&path, value.clone()).unwrap();
        prop_assert_eq!(store.get(&path).unwrap(), Some(&value));
    }

    #[test]
    fn absent_paths_read_as_none(path in dotted_path()) {
        let store = DocumentStore::in_memory();
        prop_assert_eq!(store.get(&path).unwrap(), None);
    }

    #[test]
    fn remove_is_idempotent(path in dotted_path(), value in leaf()) {
        let mut store = DocumentStore::in_memory();
        store.set(&path, value).unwrap();
        store.remove(&path).unwrap();
        let once = store.all().clone();
        prop_assert_eq!(store.remove(&path).unwrap(), None);
        prop_assert_eq!(store.all(), &once);
    }

    #[test]
    fn append_grows_length_by_exactly_one(path in dotted_path(), value in leaf()) {
        let mut store = DocumentStore::in_memory();
        store.append_array(&path, value.clone(), false).unwrap();
        store.append_array(&path, value, false).unwrap();
        let stored = store.get(&path).unwrap().unwrap();
        prop_assert_eq!(stored.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn unique_append_rejects_what_it_stored(path in dotted_path(), value in leaf()) {
        let mut store = DocumentStore::in_memory();
        store.append_array(&path, value.clone(), true).unwrap();
        prop_assert!(store.append_array(&path, value, true).is_err());
    }

    #[test]
    fn find_paths_locates_every_set_leaf(path in dotted_path(), value in leaf()) {
        let mut store = DocumentStore::in_memory();
        store.set(&path, value.clone()).unwrap();
        let pairs = store.find_paths(|_, p| p == path);
        prop_assert_eq!(pairs, vec![(path, value)]);
    }
}
