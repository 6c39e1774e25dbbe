//! Helpers for running commands against temporary catalogues.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

use super::*;

/// A catalogue file inside a temporary directory.
pub(super) struct CatalogueFile {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl CatalogueFile {
    pub(super) fn new(contents: &str) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let path = root.join("restaurants.json");
        fs::write(&path, contents).expect("write catalogue");
        Self { _dir: dir, path }
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Capture the JSON a command writes and return the ids it lists.
pub(super) fn ids_written<F>(run: F) -> Vec<String>
where
    F: FnOnce(&mut dyn Write) -> Result<(), CliError>,
{
    ids_of(&json_written(run))
}

/// Decode written JSON and return the ids it lists.
pub(super) fn ids_in(written: &[u8]) -> Vec<String> {
    let parsed: Value = serde_json::from_slice(written).expect("output should be JSON");
    ids_of(&parsed)
}

fn ids_of(parsed: &Value) -> Vec<String> {
    parsed
        .as_array()
        .expect("output should be a JSON array")
        .iter()
        .map(|entry| {
            entry
                .get("id")
                .and_then(Value::as_str)
                .expect("entry should carry an id")
                .to_owned()
        })
        .collect()
}

/// Capture the JSON a command writes.
pub(super) fn json_written<F>(run: F) -> Value
where
    F: FnOnce(&mut dyn Write) -> Result<(), CliError>,
{
    let mut buffer: Vec<u8> = Vec::new();
    run(&mut buffer).expect("command should succeed");
    assert!(buffer.ends_with(b"\n"), "output should end with a newline");
    serde_json::from_slice(&buffer).expect("output should be JSON")
}
