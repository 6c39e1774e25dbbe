//! `recommend` and `personalised` command implementations.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tandoor_core::{DEFAULT_TOP_N, RecommendationQuery, validate_origin};
use tandoor_ranker::Recommender;
use tandoor_scorer::WeightedScorer;

use crate::catalogue::load_catalogue;
use crate::output::{split_list, write_json};
use crate::{ARG_LAT, ARG_LON, ARG_RESTAURANTS, CliError};

const ENV_RECOMMEND_LAT: &str = "TANDOOR_CMDS_RECOMMEND_LAT";
const ENV_RECOMMEND_LON: &str = "TANDOOR_CMDS_RECOMMEND_LON";
const ENV_PERSONALISED_LAT: &str = "TANDOOR_CMDS_PERSONALISED_LAT";
const ENV_PERSONALISED_LON: &str = "TANDOOR_CMDS_PERSONALISED_LON";

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank restaurants around a location by distance, rating \
                 and popularity. The catalogue defaults to the bundled \
                 sample when --restaurants is omitted.",
    about = "Recommend the best restaurants around a location"
)]
#[ortho_config(prefix = "TANDOOR")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON restaurant catalogue.
    #[arg(long = ARG_RESTAURANTS, value_name = "path")]
    #[serde(default)]
    pub(crate) restaurants: Option<Utf8PathBuf>,
    /// Latitude of the search origin in degrees.
    #[arg(long = ARG_LAT, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the search origin in degrees.
    #[arg(long = ARG_LON, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Case-insensitive cuisine keyword.
    #[arg(long, value_name = "keyword")]
    #[serde(default)]
    pub(crate) cuisine: Option<String>,
    /// Minimum rating, relaxed once when too few restaurants qualify.
    #[arg(long, value_name = "rating")]
    #[serde(default)]
    pub(crate) min_rating: Option<f64>,
    /// Search radius in kilometres.
    #[arg(long, value_name = "km")]
    #[serde(default)]
    pub(crate) max_distance_km: Option<f64>,
    /// Number of recommendations to return.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Maximum recommendations sharing one locality.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) max_per_locality: Option<usize>,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved options for the `recommend` subcommand.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) restaurants: Option<Utf8PathBuf>,
    pub(crate) query: RecommendationQuery,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let origin = origin_from(args.lat, args.lon, ENV_RECOMMEND_LAT, ENV_RECOMMEND_LON)?;
        let mut query = RecommendationQuery::new(origin);
        if let Some(cuisine) = args.cuisine {
            query = query.with_cuisine(cuisine);
        }
        if let Some(min_rating) = args.min_rating {
            query = query.with_min_rating(min_rating);
        }
        if let Some(max_distance_km) = args.max_distance_km {
            query = query.with_max_distance_km(max_distance_km);
        }
        if let Some(top_n) = args.top_n {
            query = query.with_top_n(top_n);
        }
        if let Some(max_per_locality) = args.max_per_locality {
            query = query.with_max_per_locality(max_per_locality);
        }
        query.validate()?;
        Ok(Self {
            restaurants: args.restaurants,
            query,
        })
    }
}

/// CLI arguments for the `personalised` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Split the results between restaurants sharing the \
                 favourites' most common cuisine and general \
                 recommendations. Favourites are catalogue ids.",
    about = "Blend favourites-driven picks with general recommendations"
)]
#[ortho_config(prefix = "TANDOOR")]
pub(crate) struct PersonalisedArgs {
    /// Path to a JSON restaurant catalogue.
    #[arg(long = ARG_RESTAURANTS, value_name = "path")]
    #[serde(default)]
    pub(crate) restaurants: Option<Utf8PathBuf>,
    /// Latitude of the search origin in degrees.
    #[arg(long = ARG_LAT, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the search origin in degrees.
    #[arg(long = ARG_LON, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Comma-separated ids of favourite restaurants.
    #[arg(long, value_name = "ids")]
    #[serde(default)]
    pub(crate) favourites: Option<String>,
    /// Number of recommendations to return.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
}

impl PersonalisedArgs {
    fn into_config(self) -> Result<PersonalisedConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PersonalisedConfig::try_from(merged)
    }
}

/// Resolved options for the `personalised` subcommand.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PersonalisedConfig {
    pub(crate) restaurants: Option<Utf8PathBuf>,
    pub(crate) origin: Coord<f64>,
    pub(crate) favourites: Vec<String>,
    pub(crate) top_n: usize,
}

impl TryFrom<PersonalisedArgs> for PersonalisedConfig {
    type Error = CliError;

    fn try_from(args: PersonalisedArgs) -> Result<Self, Self::Error> {
        let origin = origin_from(
            args.lat,
            args.lon,
            ENV_PERSONALISED_LAT,
            ENV_PERSONALISED_LON,
        )?;
        validate_origin(origin)?;
        Ok(Self {
            restaurants: args.restaurants,
            origin,
            favourites: split_list(args.favourites.as_deref()),
            top_n: args.top_n.unwrap_or(DEFAULT_TOP_N),
        })
    }
}

/// Build an origin from required latitude and longitude options.
pub(crate) fn origin_from(
    lat: Option<f64>,
    lon: Option<f64>,
    env_lat: &'static str,
    env_lon: &'static str,
) -> Result<Coord<f64>, CliError> {
    let latitude = lat.ok_or(CliError::MissingArgument {
        field: ARG_LAT,
        env: env_lat,
    })?;
    let longitude = lon.ok_or(CliError::MissingArgument {
        field: ARG_LON,
        env: env_lon,
    })?;
    Ok(Coord {
        x: longitude,
        y: latitude,
    })
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_recommend_with(&config, writer)
}

/// Rank the catalogue for `config` and write the results.
pub(crate) fn run_recommend_with(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let records = load_catalogue(config.restaurants.as_deref())?;
    let recommender = Recommender::new(WeightedScorer::default());
    let ranked = recommender.recommend(&records, &config.query)?;
    debug!("writing {} recommendations", ranked.len());
    write_json(writer, &ranked)
}

pub(crate) fn run_personalised(
    args: PersonalisedArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_personalised_with(&config, writer)
}

/// Produce personalised recommendations for `config` and write them.
pub(crate) fn run_personalised_with(
    config: &PersonalisedConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let records = load_catalogue(config.restaurants.as_deref())?;
    let recommender = Recommender::new(WeightedScorer::default());
    let ranked = recommender.recommend_personalised(
        &records,
        config.origin,
        &config.favourites,
        config.top_n,
    )?;
    debug!("writing {} personalised recommendations", ranked.len());
    write_json(writer, &ranked)
}
