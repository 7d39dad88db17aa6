// src/store.rs
//
// JSON snapshot of collected movies. The collector writes it, the reporter
// and the GUI read it back.

use std::{fs, path::Path};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::StoreError;
use crate::file::ensure_directory;
use crate::model::MovieRecord;

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io { path: path.display().to_string(), source }
}

/// Pretty JSON array, four-space indent.
pub fn to_json(records: &[MovieRecord]) -> Result<String, StoreError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn from_json(text: &str) -> Result<Vec<MovieRecord>, StoreError> {
    Ok(serde_json::from_str(text)?)
}

pub fn save_records(path: &Path, records: &[MovieRecord]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err(parent))?;
        }
    }
    fs::write(path, to_json(records)?).map_err(io_err(path))?;
    logf!("Store: saved {} record(s) → {}", records.len(), path.display());
    Ok(())
}

pub fn load_records(path: &Path) -> Result<Vec<MovieRecord>, StoreError> {
    let text = fs::read_to_string(path).map_err(io_err(path))?;
    let records = from_json(&text)?;
    logd!("Store: loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}
