//! Tree navigation, mutation, and recursive search
//!
//! The operations here are the whole engine behind dot-notation access:
//!
//! - [`get`]: read resolve, short-circuits to `None` on any miss
//! - [`set`]: write resolve, creates or coerces intermediates, never fails
//! - [`remove`]: read-only descent, silent no-op when the path is absent
//! - [`append_array`] / [`append_unique`]: sequence appends with two
//!   distinct uniqueness strategies
//! - [`remove_array_value`] / [`remove_array_where`]: filtered sequence
//!   removal with dense reindexing
//! - [`find_paths`] / [`find`]: depth-first pre-order search over the whole
//!   document, with reconstruction of the matched fragments
//!
//! The sequence operations all follow read-transform-set: the current value
//! is copied out, validated, transformed, and written back through [`set`].
//! A failure before the write-back leaves the document untouched.

use crate::node::{kind, loose_eq, strict_eq};
use crate::path::{DotPath, PathSegment};
use serde_json::{Map, Value};
use thiserror::Error;

/// Error type for tree mutations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The node at the path has the wrong kind for the operation
    #[error("expected {expected} at '{path}', found {found}")]
    WrongKind {
        /// The offending path
        path: String,
        /// Kind the operation requires
        expected: &'static str,
        /// Kind actually found
        found: &'static str,
    },

    /// A uniqueness-enforcing append found an equal element
    #[error("duplicate value for '{path}'")]
    Duplicate {
        /// The sequence path the duplicate was found at
        path: String,
    },
}

// =============================================================================
// Read resolve
// =============================================================================

/// Resolve `path` against `root` for reading.
///
/// Follows the path segment by segment. A key segment looks up an object
/// entry; an index segment indexes a sequence, or falls back to the decimal
/// string key when the node is an object. Any other combination, a missing
/// entry, or a resolved null short-circuits to `None`; a stored null is
/// indistinguishable from an absent entry.
///
/// # Examples
///
/// ```
/// use pathtree_core::tree::get;
/// use serde_json::json;
///
/// let doc = json!({"users": [{"name": "Alice"}]});
/// let path = "users.0.name".parse().unwrap();
/// assert_eq!(get(&doc, &path), Some(&json!("Alice")));
///
/// let missing = "users.1.name".parse().unwrap();
/// assert_eq!(get(&doc, &missing), None);
/// ```
pub fn get<'a>(root: &'a Value, path: &DotPath) -> Option<&'a Value> {
    let mut node = root;
    for seg in path.segments() {
        node = match seg {
            PathSegment::Key(key) => match node {
                Value::Object(map) => map.get(key)?,
                _ => return None,
            },
            PathSegment::Index(idx) => match node {
                Value::Array(items) => items.get(*idx)?,
                Value::Object(map) => map.get(idx.to_string().as_str())?,
                _ => return None,
            },
        };
        if node.is_null() {
            return None;
        }
    }
    Some(node)
}

// =============================================================================
// Write resolve
// =============================================================================

/// Set `value` at `path` inside `root`, creating intermediates as needed.
///
/// For every segment except the last, the addressed child is created when
/// missing; a non-container child in the way is overwritten with a fresh
/// empty container whose kind is picked by the next segment (key → mapping,
/// index → sequence). This coercion is destructive on purpose: writing
/// through a scalar discards it.
///
/// Index segments grow a sequence at its back edge (`idx == len` appends).
/// An index that a sequence cannot take, or any segment addressing a
/// non-container, falls back to keyed access on a mapping; existing
/// sequence elements are kept under their decimal positions.
///
/// # Examples
///
/// ```
/// use pathtree_core::tree::{get, set};
/// use serde_json::json;
///
/// let mut doc = json!({});
/// set(&mut doc, &"settings.fonts.size".parse().unwrap(), json!(14));
/// assert_eq!(doc, json!({"settings": {"fonts": {"size": 14}}}));
///
/// // writing through a scalar replaces it
/// set(&mut doc, &"settings.fonts.size.unit".parse().unwrap(), json!("pt"));
/// assert_eq!(doc, json!({"settings": {"fonts": {"size": {"unit": "pt"}}}}));
/// ```
pub fn set(root: &mut Value, path: &DotPath, value: Value) {
    let segments = path.segments();
    let Some((last, parents)) = segments.split_last() else {
        return;
    };
    let mut node = root;
    for (pos, seg) in parents.iter().enumerate() {
        let child = slot_mut(node, seg);
        if !child.is_object() && !child.is_array() {
            *child = fresh_container(&segments[pos + 1]);
        }
        node = child;
    }
    *slot_mut(node, last) = value;
}

/// Mutable slot addressed by `seg` inside `node`.
///
/// Reshapes `node` when it cannot hold the segment; missing entries are
/// created as null placeholders for the caller to fill.
fn slot_mut<'a>(node: &'a mut Value, seg: &PathSegment) -> &'a mut Value {
    if let PathSegment::Index(idx) = seg {
        // an index can seed a fresh sequence, or grow an existing one at
        // its back edge
        if *idx == 0 && !node.is_object() && !node.is_array() {
            *node = Value::Array(Vec::new());
        }
    }
    let sequence_position = match (seg, &*node) {
        (PathSegment::Index(idx), Value::Array(items)) => *idx <= items.len(),
        _ => false,
    };
    if sequence_position {
        let (Value::Array(items), PathSegment::Index(idx)) = (node, seg) else {
            unreachable!("sequence position checked above");
        };
        if *idx == items.len() {
            items.push(Value::Null);
        }
        &mut items[*idx]
    } else {
        // keyed access; sequences that cannot take the segment are demoted
        // to mappings keyed by decimal position
        if !node.is_object() {
            demote_to_object(node);
        }
        let key = match seg {
            PathSegment::Key(key) => key.clone(),
            PathSegment::Index(idx) => idx.to_string(),
        };
        match node {
            Value::Object(map) => map.entry(key).or_insert(Value::Null),
            _ => unreachable!("node was just coerced to an object"),
        }
    }
}

/// Replace `node` with a mapping. Sequence elements are preserved under
/// their decimal positions; scalars are discarded.
fn demote_to_object(node: &mut Value) {
    let map = match std::mem::take(node) {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(pos, item)| (pos.to_string(), item))
            .collect(),
        _ => Map::new(),
    };
    *node = Value::Object(map);
}

/// Empty container for an intermediate slot, picked by the next segment.
fn fresh_container(next: &PathSegment) -> Value {
    match next {
        PathSegment::Key(_) => Value::Object(Map::new()),
        PathSegment::Index(_) => Value::Array(Vec::new()),
    }
}

// =============================================================================
// Removal
// =============================================================================

/// Remove the node at `path`, returning it.
///
/// Descends read-only: no intermediates are created, and any missing or
/// incompatible segment along the way makes the whole call a silent no-op.
/// Removing an object key keeps the iteration order of the remaining keys;
/// removing a sequence element shifts the tail left (dense reindex).
pub fn remove(root: &mut Value, path: &DotPath) -> Option<Value> {
    let (last, parents) = path.segments().split_last()?;
    let mut node = root;
    for seg in parents {
        node = match seg {
            PathSegment::Key(key) => match node {
                Value::Object(map) => map.get_mut(key)?,
                _ => return None,
            },
            PathSegment::Index(idx) => match node {
                Value::Array(items) => items.get_mut(*idx)?,
                Value::Object(map) => map.get_mut(idx.to_string().as_str())?,
                _ => return None,
            },
        };
    }
    match last {
        PathSegment::Key(key) => match node {
            Value::Object(map) => map.shift_remove(key),
            _ => None,
        },
        PathSegment::Index(idx) => match node {
            Value::Array(items) if *idx < items.len() => Some(items.remove(*idx)),
            Value::Object(map) => map.shift_remove(idx.to_string().as_str()),
            _ => None,
        },
    }
}

// =============================================================================
// Sequence operations (read-transform-set)
// =============================================================================

/// Copy of the sequence at `path`; absent resolves to an empty sequence.
fn sequence_at(root: &Value, path: &DotPath) -> Result<Vec<Value>, TreeError> {
    match get(root, path) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(other) => Err(TreeError::WrongKind {
            path: path.to_string(),
            expected: "array",
            found: kind(other),
        }),
    }
}

/// Append `value` to the sequence at `path`.
///
/// An absent path starts a new sequence. With `enforce_unique`, a
/// loose-equality match (coercive across numeric representations and
/// numeric strings) against any existing element fails with
/// [`TreeError::Duplicate`] and leaves the document untouched.
pub fn append_array(
    root: &mut Value,
    path: &DotPath,
    value: Value,
    enforce_unique: bool,
) -> Result<(), TreeError> {
    let mut items = sequence_at(root, path)?;
    if enforce_unique && items.iter().any(|item| loose_eq(item, &value)) {
        return Err(TreeError::Duplicate {
            path: path.to_string(),
        });
    }
    items.push(value);
    set(root, path, Value::Array(items));
    Ok(())
}

/// Append `value` to the sequence at `path`, always enforcing uniqueness.
///
/// With `by_structure` and a container value, any structurally equal
/// container element counts as a duplicate; otherwise elements are compared
/// with strict type-and-value equality.
pub fn append_unique(
    root: &mut Value,
    path: &DotPath,
    value: Value,
    by_structure: bool,
) -> Result<(), TreeError> {
    let mut items = sequence_at(root, path)?;
    let duplicate = if by_structure && (value.is_object() || value.is_array()) {
        items
            .iter()
            .filter(|item| item.is_object() || item.is_array())
            .any(|item| strict_eq(item, &value))
    } else {
        items.iter().any(|item| strict_eq(item, &value))
    };
    if duplicate {
        return Err(TreeError::Duplicate {
            path: path.to_string(),
        });
    }
    items.push(value);
    set(root, path, Value::Array(items));
    Ok(())
}

/// Remove every element strictly equal to `value` from the sequence at
/// `path`, reindexing densely. Returns the number removed.
pub fn remove_array_value(
    root: &mut Value,
    path: &DotPath,
    value: &Value,
) -> Result<usize, TreeError> {
    remove_array_where(root, path, |item| strict_eq(item, value))
}

/// Remove every element the predicate selects from the sequence at `path`,
/// reindexing densely. Returns the number removed.
pub fn remove_array_where<F>(
    root: &mut Value,
    path: &DotPath,
    mut predicate: F,
) -> Result<usize, TreeError>
where
    F: FnMut(&Value) -> bool,
{
    let items = sequence_at(root, path)?;
    let before = items.len();
    let kept: Vec<Value> = items.into_iter().filter(|item| !predicate(item)).collect();
    let removed = before - kept.len();
    set(root, path, Value::Array(kept));
    Ok(removed)
}

// =============================================================================
// Recursive search
// =============================================================================

/// Collect every `(path, value)` pair the predicate matches, depth-first
/// pre-order.
///
/// Containers iterate their entries in natural order (insertion order for
/// mappings, position order for sequences). Each entry, container or
/// scalar, is offered to the predicate exactly once with its fully
/// qualified dot path; a matched container is recorded before any of its
/// children.
pub fn find_paths<F>(root: &Value, mut predicate: F) -> Vec<(String, Value)>
where
    F: FnMut(&Value, &str) -> bool,
{
    let mut matches = Vec::new();
    walk(root, "", &mut predicate, &mut matches);
    matches
}

fn walk<F>(node: &Value, prefix: &str, predicate: &mut F, matches: &mut Vec<(String, Value)>)
where
    F: FnMut(&Value, &str) -> bool,
{
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                visit(child, join(prefix, key), predicate, matches);
            }
        }
        Value::Array(items) => {
            for (pos, child) in items.iter().enumerate() {
                visit(child, join(prefix, &pos.to_string()), predicate, matches);
            }
        }
        _ => {}
    }
}

fn visit<F>(child: &Value, path: String, predicate: &mut F, matches: &mut Vec<(String, Value)>)
where
    F: FnMut(&Value, &str) -> bool,
{
    if predicate(child, &path) {
        matches.push((path.clone(), child.clone()));
    }
    walk(child, &path, predicate, matches);
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Rebuild the matches of [`find_paths`] into a new minimal document.
///
/// Each matched path is re-parsed and written into an initially empty
/// document with [`set`], so the original nesting (including sequence
/// positions) is preserved, and matches sharing a prefix coexist under the
/// same rebuilt ancestor. Keys that are empty or contain a literal dot
/// cannot be re-addressed and are skipped.
///
/// # Examples
///
/// ```
/// use pathtree_core::tree::find;
/// use serde_json::json;
///
/// let doc = json!({"users": [{"id": 1, "hobbies": ["Chess"]}]});
/// let matched = find(&doc, |value, _| value == &json!("Chess"));
/// assert_eq!(matched, json!({"users": [{"hobbies": ["Chess"]}]}));
/// ```
pub fn find<F>(root: &Value, predicate: F) -> Value
where
    F: FnMut(&Value, &str) -> bool,
{
    let pairs = find_paths(root, predicate);
    if pairs.is_empty() {
        return Value::Object(Map::new());
    }
    let mut rebuilt = Value::Null;
    for (path, value) in pairs {
        if let Ok(parsed) = path.parse::<DotPath>() {
            set(&mut rebuilt, &parsed, value);
        }
    }
    rebuilt
}
