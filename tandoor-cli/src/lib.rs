//! Command-line interface for the Tandoor recommendation engine.
//!
//! Each subcommand layers its options from CLI flags, configuration files
//! and `TANDOOR_CMDS_<COMMAND>_<FIELD>` environment variables, loads the
//! restaurant catalogue, and prints its result as pretty JSON on stdout.
#![forbid(unsafe_code)]

use std::io::{self, Write};

use clap::{Parser, Subcommand};

mod browse;
mod catalogue;
mod error;
mod logging;
mod output;
mod recommend;

pub use error::CliError;
pub use logging::{LogLevel, init_logger};

use browse::{FeaturedArgs, ListArgs, NearbyArgs, PopularArgs};
use recommend::{PersonalisedArgs, RecommendArgs};

const ARG_RESTAURANTS: &str = "restaurants";
const ARG_LAT: &str = "lat";
const ARG_LON: &str = "lon";

/// Run the Tandoor CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// catalogue cannot be loaded, or the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logger(cli.log_level)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    dispatch(cli.command, &mut handle)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => recommend::run_recommend(args, writer),
        Command::Personalised(args) => recommend::run_personalised(args, writer),
        Command::Nearby(args) => browse::run_nearby(args, writer),
        Command::List(args) => browse::run_list(args, writer),
        Command::Popular(args) => browse::run_popular(args, writer),
        Command::Featured(args) => browse::run_featured(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tandoor",
    about = "Rank and browse restaurants near a location",
    version
)]
struct Cli {
    /// Baseline log verbosity; `RUST_LOG` refines it.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend the best restaurants around a location.
    Recommend(RecommendArgs),
    /// Blend favourites-driven picks with general recommendations.
    Personalised(PersonalisedArgs),
    /// List every restaurant within a radius, nearest first.
    Nearby(NearbyArgs),
    /// Search, filter and sort the catalogue.
    List(ListArgs),
    /// Show the highest-rated restaurants.
    Popular(PopularArgs),
    /// Show a featured selection of restaurants.
    Featured(FeaturedArgs),
}

#[cfg(test)]
mod tests;
