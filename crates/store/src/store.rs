//! DocumentStore: dot-notation facade over an owned JSON document
//!
//! The store owns its document exclusively; there is no external aliasing
//! and no internal locking. Every operation is a finite, synchronous
//! traversal. With autosave enabled, each mutation is followed by an
//! immediate, blocking flush of the whole document to the backing file.

use crate::error::{Error, Result};
use crate::file;
use pathtree_core::path::DotPath;
use pathtree_core::tree;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

fn empty_document() -> Value {
    Value::Object(Map::new())
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`DocumentStore`]
///
/// # Examples
///
/// ```
/// use pathtree_store::DocumentStore;
/// use serde_json::json;
///
/// // in-memory store seeded with an initial document
/// let store = DocumentStore::builder()
///     .initial(json!({"theme": "dark"}))
///     .open()
///     .unwrap();
/// assert_eq!(store.get("theme").unwrap(), Some(&json!("dark")));
/// ```
#[derive(Debug)]
pub struct DocumentStoreBuilder {
    path: Option<PathBuf>,
    autosave: bool,
    pretty: bool,
    initial: Option<Value>,
}

impl DocumentStoreBuilder {
    /// Create a builder with defaults: no backing file, autosave off,
    /// pretty output on.
    pub fn new() -> Self {
        DocumentStoreBuilder {
            path: None,
            autosave: false,
            pretty: true,
            initial: None,
        }
    }

    /// Set the backing file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Flush the document back to disk after every mutation
    pub fn autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    /// Write indented JSON (on by default); `false` writes compact
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Document to start from when there is no backing file to load
    pub fn initial(mut self, doc: Value) -> Self {
        self.initial = Some(doc);
        self
    }

    /// Open the store.
    ///
    /// When a backing file is configured and present, it is loaded; a
    /// missing file (or no path at all) yields the `initial` document,
    /// defaulting to an empty mapping.
    pub fn open(self) -> Result<DocumentStore> {
        let data = match &self.path {
            Some(path) => match file::read_document(path)? {
                Some(doc) => doc,
                None => self.initial.unwrap_or_else(empty_document),
            },
            None => self.initial.unwrap_or_else(empty_document),
        };
        Ok(DocumentStore {
            path: self.path,
            data,
            autosave: self.autosave,
            pretty: self.pretty,
        })
    }
}

impl Default for DocumentStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// DocumentStore
// =============================================================================

/// A JSON document with dot-notation access and optional file persistence
///
/// # Examples
///
/// ```
/// use pathtree_store::DocumentStore;
/// use serde_json::json;
///
/// let mut store = DocumentStore::in_memory();
/// store.set("settings.fonts.size", 14)?;
/// store.append_array("settings.languages", "en", true)?;
///
/// assert_eq!(store.get("settings.fonts.size")?, Some(&json!(14)));
/// assert_eq!(store.get("settings.languages")?, Some(&json!(["en"])));
/// # Ok::<(), pathtree_store::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// Backing file path; `None` for an in-memory store
    path: Option<PathBuf>,
    /// The owned document root
    data: Value,
    /// Flush after every mutation
    autosave: bool,
    /// Indented output on save
    pretty: bool,
}

impl DocumentStore {
    /// Start building a store
    pub fn builder() -> DocumentStoreBuilder {
        DocumentStoreBuilder::new()
    }

    /// Open a file-backed store; a missing file starts an empty document
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    /// A store with no backing file; autosave is a no-op and [`save`]
    /// fails with [`Error::NoPath`]
    ///
    /// [`save`]: DocumentStore::save
    pub fn in_memory() -> Self {
        DocumentStore {
            path: None,
            data: empty_document(),
            autosave: false,
            pretty: true,
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// The backing file path, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Retarget the backing file without writing anything
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Whether autosave is enabled
    pub fn is_autosave(&self) -> bool {
        self.autosave
    }

    /// Enable or disable the autosave flush after mutations
    pub fn set_autosave(&mut self, autosave: bool) {
        self.autosave = autosave;
    }

    /// Switch between indented and compact output on save
    pub fn set_pretty(&mut self, pretty: bool) {
        self.pretty = pretty;
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// The whole document
    pub fn all(&self) -> &Value {
        &self.data
    }

    /// Consume the store, returning the document
    pub fn into_inner(self) -> Value {
        self.data
    }

    /// Value at `path`, or `None` when absent.
    ///
    /// A stored null reads as absent.
    pub fn get(&self, path: &str) -> Result<Option<&Value>> {
        let parsed: DotPath = path.parse()?;
        Ok(tree::get(&self.data, &parsed))
    }

    /// Value at `path`, or `default` when absent
    pub fn get_or<'a>(&'a self, path: &str, default: &'a Value) -> Result<&'a Value> {
        Ok(self.get(path)?.unwrap_or(default))
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Set `value` at `path`, creating intermediate containers as needed.
    ///
    /// Writing through a scalar intermediate replaces it with a fresh
    /// container; see [`pathtree_core::tree::set`] for the exact rules.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        let parsed: DotPath = path.parse()?;
        tree::set(&mut self.data, &parsed, value.into());
        self.autosave_hook()
    }

    /// Remove the node at `path`, returning it.
    ///
    /// An absent path is a silent no-op (`Ok(None)`), and in that case the
    /// autosave flush is skipped since nothing changed.
    pub fn remove(&mut self, path: &str) -> Result<Option<Value>> {
        let parsed: DotPath = path.parse()?;
        let removed = tree::remove(&mut self.data, &parsed);
        if removed.is_some() {
            self.autosave_hook()?;
        }
        Ok(removed)
    }

    /// Append `value` to the sequence at `path`.
    ///
    /// An absent path starts a new sequence; a non-sequence node is
    /// [`TreeError::WrongKind`]. With `enforce_unique`, a loose-equality
    /// match against an existing element is [`TreeError::Duplicate`].
    ///
    /// [`TreeError::WrongKind`]: pathtree_core::tree::TreeError::WrongKind
    /// [`TreeError::Duplicate`]: pathtree_core::tree::TreeError::Duplicate
    pub fn append_array(
        &mut self,
        path: &str,
        value: impl Into<Value>,
        enforce_unique: bool,
    ) -> Result<()> {
        let parsed: DotPath = path.parse()?;
        tree::append_array(&mut self.data, &parsed, value.into(), enforce_unique)?;
        self.autosave_hook()
    }

    /// Append `value` to the sequence at `path`, always enforcing
    /// uniqueness: strict equality for scalars, deep structural equality
    /// for container values when `by_structure` is set.
    pub fn append_unique(
        &mut self,
        path: &str,
        value: impl Into<Value>,
        by_structure: bool,
    ) -> Result<()> {
        let parsed: DotPath = path.parse()?;
        tree::append_unique(&mut self.data, &parsed, value.into(), by_structure)?;
        self.autosave_hook()
    }

    /// Remove every element strictly equal to `value` from the sequence at
    /// `path`, reindexing densely. Returns the number removed.
    pub fn remove_array_value(&mut self, path: &str, value: &Value) -> Result<usize> {
        let parsed: DotPath = path.parse()?;
        let removed = tree::remove_array_value(&mut self.data, &parsed, value)?;
        self.autosave_hook()?;
        Ok(removed)
    }

    /// Remove every element the predicate selects from the sequence at
    /// `path`, reindexing densely. Returns the number removed.
    pub fn remove_array_where<F>(&mut self, path: &str, predicate: F) -> Result<usize>
    where
        F: FnMut(&Value) -> bool,
    {
        let parsed: DotPath = path.parse()?;
        let removed = tree::remove_array_where(&mut self.data, &parsed, predicate)?;
        self.autosave_hook()?;
        Ok(removed)
    }

    /// Replace the whole document
    pub fn replace(&mut self, doc: Value) -> Result<()> {
        self.data = doc;
        self.autosave_hook()
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Every `(path, value)` pair the predicate matches, in depth-first
    /// pre-order; the predicate sees each node with its fully qualified
    /// dot path
    pub fn find_paths<F>(&self, predicate: F) -> Vec<(String, Value)>
    where
        F: FnMut(&Value, &str) -> bool,
    {
        tree::find_paths(&self.data, predicate)
    }

    /// A new minimal document holding only the matched nodes, with the
    /// original nesting (including sequence positions) preserved
    pub fn find<F>(&self, predicate: F) -> Value
    where
        F: FnMut(&Value, &str) -> bool,
    {
        tree::find(&self.data, predicate)
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Re-read the document from the backing file, discarding in-memory
    /// state. A missing file (or no path) leaves an empty document.
    pub fn reload(&mut self) -> Result<()> {
        self.data = match &self.path {
            Some(path) => file::read_document(path)?.unwrap_or_else(empty_document),
            None => empty_document(),
        };
        debug!(path = ?self.path, "document reloaded");
        Ok(())
    }

    /// Write the document to the backing file
    pub fn save(&self) -> Result<()> {
        let path = self.path.as_deref().ok_or(Error::NoPath)?;
        file::write_document(path, &self.data, self.pretty)
    }

    /// Retarget the backing file, then save to it
    pub fn save_to(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.path = Some(path.into());
        self.save()
    }

    /// Flush after a mutation when autosave is on. An in-memory store has
    /// nothing to flush, so this is a no-op for it.
    fn autosave_hook(&self) -> Result<()> {
        if !self.autosave {
            return Ok(());
        }
        match self.path.as_deref() {
            Some(path) => file::write_document(path, &self.data, self.pretty),
            None => Ok(()),
        }
    }
}
