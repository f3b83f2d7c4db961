//! Backing-file collaborator
//!
//! Whole-document JSON persistence. Writes use the temp-file + rename
//! pattern so a crash mid-write cannot leave a torn target file; there is
//! no locking against concurrent external writers.

use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Read a document from `path`.
///
/// Returns `None` when the file does not exist. A blank file reads as an
/// empty mapping; malformed JSON is an [`Error::Parse`], never an empty
/// document.
pub fn read_document(path: &Path) -> Result<Option<Value>> {
    if !path.exists() {
        debug!(path = %path.display(), "backing file missing");
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Ok(Some(Value::Object(Map::new())));
    }
    let doc = serde_json::from_str(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "document loaded");
    Ok(Some(doc))
}

/// Write `doc` to `path` as JSON text.
///
/// Serializes compact or indented per `pretty` (forward slashes are never
/// escaped), then:
/// 1. Writes to a sibling temp file
/// 2. Syncs it to disk
/// 3. Renames it over the target (atomic on POSIX)
///
/// Missing parent directories are created. If any step fails, the temp
/// file is cleaned up and the error surfaces.
pub fn write_document(path: &Path, doc: &Value, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let text = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };

    let temp_path = path.with_extension("json.tmp");
    if temp_path.exists() {
        warn!(path = %temp_path.display(), "removing stale temp file");
        let _ = fs::remove_file(&temp_path);
    }

    let written = write_and_sync(&temp_path, text.as_bytes())
        .and_then(|()| fs::rename(&temp_path, path).map_err(Error::from));

    match written {
        Ok(()) => {
            debug!(path = %path.display(), bytes = text.len(), pretty, "document written");
            Ok(())
        }
        Err(e) => {
            warn!(path = %temp_path.display(), error = %e, "write failed, cleaning up temp file");
            let _ = fs::remove_file(&temp_path);
            Err(e)
        }
    }
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}
