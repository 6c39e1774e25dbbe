//! JSON catalogue decoding with per-record rejection.

use std::io::{BufReader, Read};

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use serde_json::Value;
use tandoor_core::Restaurant;
use thiserror::Error;

use crate::fs::open_utf8_file;

/// Bundled catalogue of Indian restaurants in the browser application's
/// JSON shape.
pub const BUNDLED_CATALOGUE: &str = include_str!("../fixtures/restaurants.json");

/// Errors raised while loading a restaurant catalogue.
///
/// Individual malformed records do not fail the load; they are listed in
/// [`LoadReport::rejected`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// Opening the catalogue file failed.
    #[error("failed to open restaurant catalogue at {path:?}: {source}")]
    Open {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The catalogue file is not a JSON array.
    #[error("failed to parse restaurant catalogue at {path:?}: {source}")]
    ParseFile {
        /// Path of the malformed catalogue.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The catalogue stream is not a JSON array.
    #[error("failed to parse restaurant catalogue: {0}")]
    Parse(#[source] serde_json::Error),
}

/// A record skipped during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Zero-based index of the record in the catalogue array.
    pub index: usize,
    /// The record's `id`, when one could be read.
    pub id: Option<String>,
    /// Why the record was rejected.
    pub reason: String,
}

/// Outcome of loading a catalogue.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadReport {
    /// Records that passed validation, in catalogue order.
    pub restaurants: Vec<Restaurant>,
    /// Records that were skipped.
    pub rejected: Vec<RejectedRecord>,
}

impl LoadReport {
    /// Report whether every record was accepted.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Load a JSON catalogue from `path`.
///
/// # Errors
/// Returns [`LoadError::Open`] when the file cannot be opened and
/// [`LoadError::ParseFile`] when it is not a JSON array.
pub fn load_restaurants(path: &Utf8Path) -> Result<LoadReport, LoadError> {
    let file = open_utf8_file(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let report = decode(BufReader::new(file)).map_err(|source| LoadError::ParseFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "loaded {} restaurants from {path} ({} rejected)",
        report.restaurants.len(),
        report.rejected.len()
    );
    Ok(report)
}

/// Decode a JSON catalogue from `reader`.
///
/// # Errors
/// Returns [`LoadError::Parse`] when the stream is not a JSON array.
pub fn parse_restaurants<R: Read>(reader: R) -> Result<LoadReport, LoadError> {
    decode(reader).map_err(LoadError::Parse)
}

/// Decode the bundled fixture catalogue.
///
/// # Errors
/// Returns [`LoadError::Parse`] if the bundled fixture is not a JSON array.
///
/// # Examples
/// ```
/// let report = tandoor_data::bundled_restaurants().unwrap();
/// assert!(report.is_clean());
/// assert!(!report.restaurants.is_empty());
/// ```
pub fn bundled_restaurants() -> Result<LoadReport, LoadError> {
    parse_restaurants(BUNDLED_CATALOGUE.as_bytes())
}

fn decode<R: Read>(reader: R) -> Result<LoadReport, serde_json::Error> {
    let values: Vec<Value> = serde_json::from_reader(reader)?;
    let mut report = LoadReport::default();
    for (index, value) in values.into_iter().enumerate() {
        let id = value
            .get("id")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned);
        match serde_json::from_value::<Restaurant>(value) {
            Ok(restaurant) => report.restaurants.push(restaurant),
            Err(error) => {
                warn!("skipping restaurant record {index}: {error}");
                report.rejected.push(RejectedRecord {
                    index,
                    id,
                    reason: error.to_string(),
                });
            }
        }
    }
    Ok(report)
}
