//! Catalogue resolution shared by every subcommand.

use camino::Utf8Path;
use log::info;
use tandoor_core::Restaurant;
use tandoor_data::{bundled_restaurants, fs::file_is_file, load_restaurants};

use crate::{ARG_RESTAURANTS, CliError};

/// Load the catalogue from `path`, or the bundled sample when absent.
pub(crate) fn load_catalogue(path: Option<&Utf8Path>) -> Result<Vec<Restaurant>, CliError> {
    let report = path.map_or_else(
        || bundled_restaurants().map_err(CliError::from),
        |source| {
            require_existing(source, ARG_RESTAURANTS)?;
            load_restaurants(source).map_err(CliError::from)
        },
    )?;
    info!(
        "loaded {} restaurants ({} rejected)",
        report.restaurants.len(),
        report.rejected.len()
    );
    Ok(report.restaurants)
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
