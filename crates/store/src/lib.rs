//! File-backed JSON document store with dot-notation access
//!
//! [`DocumentStore`] owns a JSON document, exposes the dot-notation
//! operations from `pathtree-core`, and optionally flushes the whole
//! document back to its backing file after every mutation (autosave).
//!
//! Persistence is whole-document: read the entire file, write the entire
//! file. Writes go through a temp file and an atomic rename, so a crash
//! mid-write cannot tear the target. There is no locking, so against
//! concurrent external writers the last writer wins.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod file;
pub mod store;

pub use error::{Error, Result};
pub use store::{DocumentStore, DocumentStoreBuilder};
