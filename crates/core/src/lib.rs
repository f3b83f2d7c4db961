//! Core path and tree primitives for pathtree
//!
//! This crate is pure: no I/O, no logging. It defines:
//! - DotPath / PathSegment: dot-notation paths (`settings.fonts.size`)
//! - tree: navigation, mutation, sequence appends, recursive search
//! - node: kind names and the two equality strategies
//!
//! Documents are plain [`serde_json::Value`] trees; the `preserve_order`
//! feature keeps mapping iteration in insertion order, which the recursive
//! finder's pre-order contract relies on.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod node;
pub mod path;
pub mod tree;

// Re-export commonly used types and functions
pub use node::{kind, loose_eq, strict_eq};
pub use path::{DotPath, PathError, PathSegment};
pub use tree::{
    append_array, append_unique, find, find_paths, get, remove, remove_array_value,
    remove_array_where, set, TreeError,
};
