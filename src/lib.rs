//! Pathtree: dot-notation access to JSON documents persisted on disk
//!
//! Pathtree lets a caller read, write, append, deduplicate, and recursively
//! search nested JSON structures addressed by dotted path strings
//! (`settings.fonts.size`) instead of manual tree traversal, and can flush
//! every mutation straight back to the backing file.
//!
//! # Quick Start
//!
//! ```
//! use pathtree::DocumentStore;
//! use serde_json::json;
//!
//! let mut store = DocumentStore::in_memory();
//!
//! store.set("settings.fonts.size", 14)?;
//! store.append_array("users.0.roles", "admin", true)?;
//!
//! assert_eq!(store.get("settings.fonts.size")?, Some(&json!(14)));
//! assert_eq!(store.all()["users"][0]["roles"], json!(["admin"]));
//!
//! // recursive search keeps the original nesting
//! let admins = store.find(|value, _path| value == &json!("admin"));
//! assert_eq!(admins, json!({"users": [{"roles": ["admin"]}]}));
//! # Ok::<(), pathtree::Error>(())
//! ```
//!
//! # Architecture
//!
//! The path/tree engine lives in `pathtree-core` (pure, no I/O); the
//! [`DocumentStore`] facade and file persistence live in `pathtree-store`.
//! This crate re-exports the public API of both.

pub use pathtree_core::{DotPath, PathError, PathSegment, TreeError};
pub use pathtree_store::{DocumentStore, DocumentStoreBuilder, Error, Result};
