//! JSON file access for snapshots and settings
//!
//! Snapshots are written by the fetching layer and only read here. Settings
//! are the one file SpendLens writes, always through a temp file in the same
//! directory that is persisted over the target.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{SpendError, SpendResult};

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> SpendError {
    SpendError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read a JSON file, `None` when it does not exist
///
/// A file that exists but does not parse is an error.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> SpendResult<Option<T>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no file, using empty collection");
            return Ok(None);
        }
        Err(err) => return Err(storage_error("open", path, err)),
    };

    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|e| storage_error("parse", path, e))
}

/// Replace `path` with the pretty-printed JSON of `data`
pub fn write_json_atomic<T: Serialize>(path: impl AsRef<Path>, data: &T) -> SpendResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| storage_error("create directory", dir, e))?;

    let temp = NamedTempFile::new_in(dir).map_err(|e| storage_error("create temp file in", dir, e))?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| storage_error("serialize", path, e))?;
        writer.flush().map_err(|e| storage_error("write", path, e))?;
    }
    temp.as_file()
        .sync_all()
        .map_err(|e| storage_error("sync", path, e))?;
    temp.persist(path)
        .map_err(|e| storage_error("replace", path, e.error))?;

    debug!(path = %path.display(), "wrote file");
    Ok(())
}
