//! Catalogue browsing commands: `nearby`, `list`, `popular` and `featured`.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tandoor_core::{DEFAULT_MAX_DISTANCE_KM, PriceRange, validate_origin, validate_radius};
use tandoor_ranker::{
    CuratedLists, DEFAULT_FEATURED_COUNT, DEFAULT_POPULAR_COUNT, ListKind, ListingFilter,
    MemoryListCache, SortOption, list_restaurants, nearby,
};

use crate::catalogue::load_catalogue;
use crate::output::{split_list, write_json};
use crate::recommend::origin_from;
use crate::{ARG_LAT, ARG_LON, ARG_RESTAURANTS, CliError};

const ENV_NEARBY_LAT: &str = "TANDOOR_CMDS_NEARBY_LAT";
const ENV_NEARBY_LON: &str = "TANDOOR_CMDS_NEARBY_LON";
const ENV_LIST_LAT: &str = "TANDOOR_CMDS_LIST_LAT";
const ENV_LIST_LON: &str = "TANDOOR_CMDS_LIST_LON";

/// Seed used for the featured shuffle when none is configured.
pub(crate) const DEFAULT_FEATURED_SEED: u64 = 0;

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List every restaurant within a radius, nearest first")]
#[ortho_config(prefix = "TANDOOR")]
pub(crate) struct NearbyArgs {
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
    /// Inclusive search radius in kilometres.
    #[arg(long, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
}

impl NearbyArgs {
    fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved options for the `nearby` subcommand.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearbyConfig {
    pub(crate) restaurants: Option<Utf8PathBuf>,
    pub(crate) origin: Coord<f64>,
    pub(crate) radius_km: f64,
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let origin = origin_from(args.lat, args.lon, ENV_NEARBY_LAT, ENV_NEARBY_LON)?;
        let radius_km = args.radius_km.unwrap_or(DEFAULT_MAX_DISTANCE_KM);
        validate_origin(origin)?;
        validate_radius(radius_km)?;
        Ok(Self {
            restaurants: args.restaurants,
            origin,
            radius_km,
        })
    }
}

/// CLI arguments for the `list` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Search and filter the catalogue. List options take \
                 comma-separated values; a restaurant matches a list when \
                 it matches any of its values. --max-distance-km needs \
                 both --lat and --lon, and distance sorting uses them.",
    about = "Search, filter and sort the catalogue"
)]
#[ortho_config(prefix = "TANDOOR")]
pub(crate) struct ListArgs {
    /// Path to a JSON restaurant catalogue.
    #[arg(long = ARG_RESTAURANTS, value_name = "path")]
    #[serde(default)]
    pub(crate) restaurants: Option<Utf8PathBuf>,
    /// Case-insensitive text matched against names, descriptions,
    /// cuisines and localities.
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub(crate) search: Option<String>,
    /// Comma-separated cuisine tags.
    #[arg(long, value_name = "tags")]
    #[serde(default)]
    pub(crate) cuisines: Option<String>,
    /// Comma-separated price bands such as `$,$$`.
    #[arg(long, value_name = "bands")]
    #[serde(default)]
    pub(crate) price: Option<String>,
    /// Comma-separated features.
    #[arg(long, value_name = "features")]
    #[serde(default)]
    pub(crate) features: Option<String>,
    /// Latitude of the reference point in degrees.
    #[arg(long = ARG_LAT, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the reference point in degrees.
    #[arg(long = ARG_LON, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Inclusive distance limit in kilometres.
    #[arg(long, value_name = "km")]
    #[serde(default)]
    pub(crate) max_distance_km: Option<f64>,
    /// Sort order: relevance, rating, reviews, distance, price-asc or
    /// price-desc.
    #[arg(long, value_name = "order")]
    #[serde(default)]
    pub(crate) sort: Option<String>,
}

impl ListArgs {
    fn into_config(self) -> Result<ListConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ListConfig::try_from(merged)
    }
}

/// Resolved options for the `list` subcommand.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ListConfig {
    pub(crate) restaurants: Option<Utf8PathBuf>,
    pub(crate) filter: ListingFilter,
    pub(crate) sort: SortOption,
}

impl TryFrom<ListArgs> for ListConfig {
    type Error = CliError;

    fn try_from(args: ListArgs) -> Result<Self, Self::Error> {
        let price_ranges = split_list(args.price.as_deref())
            .iter()
            .map(|band| band.parse::<PriceRange>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(CliError::InvalidPriceRange)?;
        let mut filter = ListingFilter::default()
            .with_cuisines(split_list(args.cuisines.as_deref()))
            .with_price_ranges(price_ranges)
            .with_features(split_list(args.features.as_deref()));
        if let Some(term) = args.search {
            filter = filter.with_search_term(term);
        }
        if args.lat.is_some() || args.lon.is_some() || args.max_distance_km.is_some() {
            filter = filter.with_origin(origin_from(
                args.lat,
                args.lon,
                ENV_LIST_LAT,
                ENV_LIST_LON,
            )?);
        }
        if let Some(max_distance_km) = args.max_distance_km {
            filter = filter.with_max_distance_km(max_distance_km);
        }
        filter.validate()?;
        let sort = args
            .sort
            .as_deref()
            .map(str::parse::<SortOption>)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            restaurants: args.restaurants,
            filter,
            sort,
        })
    }
}

/// CLI arguments for the `popular` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Show the highest-rated restaurants")]
#[ortho_config(prefix = "TANDOOR")]
pub(crate) struct PopularArgs {
    /// Path to a JSON restaurant catalogue.
    #[arg(long = ARG_RESTAURANTS, value_name = "path")]
    #[serde(default)]
    pub(crate) restaurants: Option<Utf8PathBuf>,
    /// Number of restaurants to show.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
}

impl PopularArgs {
    fn into_config(self) -> Result<CuratedConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(CuratedConfig::from(merged))
    }
}

/// CLI arguments for the `featured` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Show a featured selection: flagged restaurants first, \
                 in an order shuffled by --seed.",
    about = "Show a featured selection of restaurants"
)]
#[ortho_config(prefix = "TANDOOR")]
pub(crate) struct FeaturedArgs {
    /// Path to a JSON restaurant catalogue.
    #[arg(long = ARG_RESTAURANTS, value_name = "path")]
    #[serde(default)]
    pub(crate) restaurants: Option<Utf8PathBuf>,
    /// Number of restaurants to show.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Seed for the featured shuffle.
    #[arg(long, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl FeaturedArgs {
    fn into_config(self) -> Result<CuratedConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(CuratedConfig::from(merged))
    }
}

/// Resolved options for the curated list subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CuratedConfig {
    pub(crate) restaurants: Option<Utf8PathBuf>,
    pub(crate) count: usize,
    pub(crate) seed: u64,
}

impl From<PopularArgs> for CuratedConfig {
    fn from(args: PopularArgs) -> Self {
        Self {
            restaurants: args.restaurants,
            count: args.count.unwrap_or(DEFAULT_POPULAR_COUNT),
            seed: DEFAULT_FEATURED_SEED,
        }
    }
}

impl From<FeaturedArgs> for CuratedConfig {
    fn from(args: FeaturedArgs) -> Self {
        Self {
            restaurants: args.restaurants,
            count: args.count.unwrap_or(DEFAULT_FEATURED_COUNT),
            seed: args.seed.unwrap_or(DEFAULT_FEATURED_SEED),
        }
    }
}

pub(crate) fn run_nearby(args: NearbyArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_nearby_with(&config, writer)
}

/// List the restaurants within the configured radius.
pub(crate) fn run_nearby_with(
    config: &NearbyConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let records = load_catalogue(config.restaurants.as_deref())?;
    let within = nearby(&records, config.origin, config.radius_km)?;
    write_json(writer, &within)
}

pub(crate) fn run_list(args: ListArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_list_with(&config, writer)
}

/// Filter and sort the catalogue.
pub(crate) fn run_list_with(config: &ListConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let records = load_catalogue(config.restaurants.as_deref())?;
    let listed = list_restaurants(&records, &config.filter, config.sort)?;
    write_json(writer, &listed)
}

pub(crate) fn run_popular(args: PopularArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_curated_with(&config, ListKind::Popular, writer)
}

pub(crate) fn run_featured(args: FeaturedArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_curated_with(&config, ListKind::Featured, writer)
}

/// Compute one curated list and write it.
pub(crate) fn run_curated_with(
    config: &CuratedConfig,
    kind: ListKind,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let records = load_catalogue(config.restaurants.as_deref())?;
    let lists = CuratedLists::new(MemoryListCache::new(), config.seed);
    let selected = match kind {
        ListKind::Popular => lists.popular(&records, config.count),
        ListKind::Featured => lists.featured(&records, config.count),
    };
    write_json(writer, &selected)
}
