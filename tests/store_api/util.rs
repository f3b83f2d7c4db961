//! Shared fixtures for the store suite

use pathtree::DocumentStore;
use serde_json::{json, Value};

/// Two users plus settings, enough nesting to exercise every operation.
pub fn sample_document() -> Value {
    json!({
        "users": [
            {
                "id": 1,
                "name": "Alice",
                "roles": ["admin", "user"],
                "profile": {
                    "age": 30,
                    "address": {"city": "Wonderland", "zip": "12345"}
                }
            },
            {
                "id": 2,
                "name": "Bob",
                "roles": ["user"],
                "profile": {
                    "age": 25,
                    "address": {"city": "Fruitville", "zip": "67890"}
                }
            }
        ],
        "settings": {
            "theme": "dark",
            "languages": ["en", "es", "fr"],
            "notifications": {"email": true, "sms": false}
        }
    })
}

pub fn sample_store() -> DocumentStore {
    DocumentStore::builder()
        .initial(sample_document())
        .open()
        .unwrap()
}
