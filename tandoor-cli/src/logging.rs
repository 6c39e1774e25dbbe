//! Logger installation for the CLI.
//!
//! Library crates log through the `log` facade; the binary installs an
//! `env_logger` writing to stderr. `--log-level` sets the baseline and
//! `RUST_LOG` directives refine it.

use std::io::Write;

use clap::ValueEnum;
use env_logger::{Builder, Target, WriteStyle};
use log::{Level, LevelFilter};

use crate::CliError;

/// Verbosity accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Progress messages.
    Info,
    /// Pipeline diagnostics.
    Debug,
    /// Everything.
    Trace,
    /// Silence.
    Off,
}

impl LogLevel {
    /// Map to the `log` crate's filter.
    #[must_use]
    pub const fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

/// Install the global logger.
///
/// # Errors
/// Returns [`CliError::InitLogging`] when a logger is already installed.
pub fn init_logger(level: LogLevel) -> Result<(), CliError> {
    let mut builder = Builder::new();
    builder
        .filter_level(level.to_filter())
        .parse_default_env()
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        });
    builder.try_init().map_err(CliError::InitLogging)
}

const fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
