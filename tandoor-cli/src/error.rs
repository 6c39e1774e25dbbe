//! Error types emitted by the Tandoor CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use tandoor_core::QueryError;
use tandoor_data::LoadError;
use tandoor_ranker::{RecommendError, UnknownSortOption};
use thiserror::Error;

/// Errors emitted by the Tandoor CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Long flag name of the option naming the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Long flag name of the option naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Long flag name of the option naming the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Loading the restaurant catalogue failed.
    #[error(transparent)]
    LoadCatalogue(#[from] LoadError),
    /// The query options are out of range.
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryError),
    /// The recommender rejected the request.
    #[error(transparent)]
    Recommend(#[from] RecommendError),
    /// The sort option is not recognised.
    #[error(transparent)]
    InvalidSort(#[from] UnknownSortOption),
    /// A price band in `--price` is not recognised.
    #[error("invalid --price value: {0}")]
    InvalidPriceRange(String),
    /// Installing the logger failed.
    #[error("failed to initialise logging: {0}")]
    InitLogging(#[source] log::SetLoggerError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
