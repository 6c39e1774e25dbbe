//! Argument parsing coverage for the top-level command.

use super::*;
use rstest::rstest;

#[rstest]
fn parses_negative_coordinates() {
    let cli = Cli::try_parse_from([
        "tandoor",
        "recommend",
        "--lat",
        "-33.8688",
        "--lon",
        "151.2093",
    ])
    .expect("arguments should parse");
    match cli.command {
        Command::Recommend(args) => {
            assert_eq!(args.lat, Some(-33.8688));
            assert_eq!(args.lon, Some(151.2093));
        }
        other => panic!("expected recommend, found {other:?}"),
    }
}

#[rstest]
#[case(&["tandoor", "popular"], LogLevel::Warn)]
#[case(&["tandoor", "--log-level", "debug", "popular"], LogLevel::Debug)]
#[case(&["tandoor", "popular", "--log-level", "off"], LogLevel::Off)]
fn log_level_is_global(#[case] argv: &[&str], #[case] expected: LogLevel) {
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    assert_eq!(cli.log_level, expected);
}

#[rstest]
fn personalised_accepts_favourite_list() {
    let cli = Cli::try_parse_from([
        "tandoor",
        "personalised",
        "--lat",
        "28.6139",
        "--lon",
        "77.2090",
        "--favourites",
        "del-karims, del-bukhara",
    ])
    .expect("arguments should parse");
    match cli.command {
        Command::Personalised(args) => {
            assert_eq!(args.favourites.as_deref(), Some("del-karims, del-bukhara"));
        }
        other => panic!("expected personalised, found {other:?}"),
    }
}

#[rstest]
fn unknown_subcommand_is_rejected() {
    let err = Cli::try_parse_from(["tandoor", "reserve"]).expect_err("unknown subcommand");
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
}

#[rstest]
#[case(LogLevel::Error, log::LevelFilter::Error)]
#[case(LogLevel::Trace, log::LevelFilter::Trace)]
#[case(LogLevel::Off, log::LevelFilter::Off)]
fn log_levels_map_to_filters(#[case] level: LogLevel, #[case] expected: log::LevelFilter) {
    assert_eq!(level.to_filter(), expected);
}
