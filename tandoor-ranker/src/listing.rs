//! Catalogue browsing: free-text and facet filtering, sorting, and nearby
//! lookups.
//!
//! Unlike [`Recommender`](crate::Recommender), listings never score, relax
//! or diversify. They narrow the catalogue exactly as asked and order it by
//! a single [`SortOption`].

use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;

use geo::Coord;
use tandoor_core::{
    Candidate, PriceRange, QueryError, Restaurant, haversine_km, validate_origin, validate_radius,
};
use thiserror::Error;

/// Ordering applied to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOption {
    /// Keep catalogue order.
    #[default]
    Relevance,
    /// Highest rating first.
    Rating,
    /// Most reviewed first.
    Reviews,
    /// Nearest first. Needs an origin on the [`ListingFilter`].
    Distance,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
}

impl SortOption {
    /// Every option, in display order.
    pub const ALL: [Self; 6] = [
        Self::Relevance,
        Self::Rating,
        Self::Reviews,
        Self::Distance,
        Self::PriceAsc,
        Self::PriceDesc,
    ];

    /// Return the kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Rating => "rating",
            Self::Reviews => "reviews",
            Self::Distance => "distance",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised [`SortOption`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort option '{0}'; expected one of relevance, rating, reviews, distance, price-asc, price-desc")]
pub struct UnknownSortOption(pub String);

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    /// Accepts kebab-case (`price-asc`), camelCase (`priceAsc`) and
    /// snake-case (`price_asc`) spellings, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalised.as_str() {
            "relevance" => Ok(Self::Relevance),
            "rating" => Ok(Self::Rating),
            "reviews" => Ok(Self::Reviews),
            "distance" => Ok(Self::Distance),
            "priceasc" => Ok(Self::PriceAsc),
            "pricedesc" => Ok(Self::PriceDesc),
            _ => Err(UnknownSortOption(s.to_owned())),
        }
    }
}

/// Facets narrowing a catalogue listing.
///
/// Empty facets accept everything. Within a facet any listed value matches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingFilter {
    /// Case-insensitive text matched against name, description, cuisine
    /// tags and locality.
    pub search_term: Option<String>,
    /// Accepted cuisine tags, compared exactly.
    pub cuisines: Vec<String>,
    /// Accepted price bands.
    pub price_ranges: Vec<PriceRange>,
    /// Features of which a restaurant must offer at least one.
    pub features: Vec<String>,
    /// Reference point for distance limits and distance sorting.
    pub origin: Option<Coord<f64>>,
    /// Inclusive distance limit from `origin` in kilometres. Ignored
    /// without an origin.
    pub max_distance_km: Option<f64>,
}

impl ListingFilter {
    /// Restrict the listing to records whose text mentions `term`.
    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Accept only the given cuisine tags.
    #[must_use]
    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    /// Accept only the given price bands.
    #[must_use]
    pub fn with_price_ranges<I>(mut self, price_ranges: I) -> Self
    where
        I: IntoIterator<Item = PriceRange>,
    {
        self.price_ranges = price_ranges.into_iter().collect();
        self
    }

    /// Require at least one of the given features.
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Measure distances from `origin`.
    #[must_use]
    pub const fn with_origin(mut self, origin: Coord<f64>) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Drop records further than `max_distance_km` from the origin.
    #[must_use]
    pub const fn with_max_distance_km(mut self, max_distance_km: f64) -> Self {
        self.max_distance_km = Some(max_distance_km);
        self
    }

    /// Check the origin and distance limit, when present.
    ///
    /// # Errors
    /// Returns [`QueryError`] for an invalid origin or distance limit.
    pub fn validate(&self) -> Result<(), QueryError> {
        if let Some(origin) = self.origin {
            validate_origin(origin)?;
        }
        if let Some(max_distance_km) = self.max_distance_km {
            validate_radius(max_distance_km)?;
        }
        Ok(())
    }

    fn matches(&self, restaurant: &Restaurant, distance_km: Option<f64>) -> bool {
        self.matches_search(restaurant)
            && (self.cuisines.is_empty()
                || restaurant
                    .cuisines()
                    .iter()
                    .any(|cuisine| self.cuisines.contains(cuisine)))
            && (self.price_ranges.is_empty()
                || self.price_ranges.contains(&restaurant.price_range()))
            && (self.features.is_empty()
                || restaurant
                    .features()
                    .iter()
                    .any(|feature| self.features.contains(feature)))
            && self
                .max_distance_km
                .zip(distance_km)
                .is_none_or(|(limit, distance)| distance <= limit)
    }

    fn matches_search(&self, restaurant: &Restaurant) -> bool {
        let Some(term) = self.search_term.as_deref().map(str::trim) else {
            return true;
        };
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        let contains = |text: &str| text.to_lowercase().contains(&needle);
        contains(restaurant.name())
            || contains(restaurant.description())
            || contains(restaurant.locality())
            || restaurant.cuisines().iter().any(|cuisine| contains(cuisine))
    }
}

/// List the records accepted by `filter`, ordered by `sort`.
///
/// All sorts are stable, so records that compare equal keep catalogue
/// order. [`SortOption::Distance`] without an origin keeps catalogue order.
///
/// # Errors
/// Returns [`QueryError`] when the filter's origin or distance limit is
/// invalid.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tandoor_core::Restaurant;
/// use tandoor_ranker::{ListingFilter, SortOption, list_restaurants};
///
/// let at = Coord { x: 77.2090, y: 28.6139 };
/// let records = vec![
///     Restaurant::new("a", at, 4.1, 10, "Delhi").unwrap().with_name("Karim's"),
///     Restaurant::new("b", at, 4.7, 10, "Delhi").unwrap().with_name("Bukhara"),
/// ];
/// let listed = list_restaurants(&records, &ListingFilter::default(), SortOption::Rating).unwrap();
/// assert_eq!(listed[0].name(), "Bukhara");
/// ```
pub fn list_restaurants<'a>(
    records: &'a [Restaurant],
    filter: &ListingFilter,
    sort: SortOption,
) -> Result<Vec<&'a Restaurant>, QueryError> {
    filter.validate()?;
    let mut listed: Vec<(&'a Restaurant, Option<f64>)> = records
        .iter()
        .map(|restaurant| {
            let distance_km = filter
                .origin
                .map(|origin| haversine_km(origin, restaurant.location()));
            (restaurant, distance_km)
        })
        .filter(|(restaurant, distance_km)| filter.matches(restaurant, *distance_km))
        .collect();
    match sort {
        SortOption::Relevance => {}
        SortOption::Rating => {
            listed.sort_by(|(lhs, _), (rhs, _)| rhs.rating().total_cmp(&lhs.rating()));
        }
        SortOption::Reviews => listed.sort_by_key(|(restaurant, _)| Reverse(restaurant.review_count())),
        SortOption::Distance => listed.sort_by(|(_, lhs), (_, rhs)| compare_distances(*lhs, *rhs)),
        SortOption::PriceAsc => listed.sort_by_key(|(restaurant, _)| restaurant.price_range()),
        SortOption::PriceDesc => {
            listed.sort_by_key(|(restaurant, _)| Reverse(restaurant.price_range()));
        }
    }
    Ok(listed.into_iter().map(|(restaurant, _)| restaurant).collect())
}

fn compare_distances(lhs: Option<f64>, rhs: Option<f64>) -> Ordering {
    match (lhs, rhs) {
        (Some(left), Some(right)) => left.total_cmp(&right),
        _ => Ordering::Equal,
    }
}

/// Return every record within `radius_km` of `origin`, nearest first.
///
/// The radius is inclusive and equal distances keep catalogue order.
///
/// # Errors
/// Returns [`QueryError`] when `origin` or `radius_km` is invalid.
pub fn nearby(
    records: &[Restaurant],
    origin: Coord<f64>,
    radius_km: f64,
) -> Result<Vec<Candidate>, QueryError> {
    validate_origin(origin)?;
    validate_radius(radius_km)?;
    let mut within: Vec<Candidate> = records
        .iter()
        .enumerate()
        .filter_map(|(position, restaurant)| {
            let distance_km = haversine_km(origin, restaurant.location());
            (distance_km <= radius_km)
                .then(|| Candidate::new(restaurant.clone(), distance_km, position))
        })
        .collect();
    within.sort_by(|lhs, rhs| lhs.distance_km.total_cmp(&rhs.distance_km));
    Ok(within)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tandoor_core::test_support::{north_of, restaurant};

    #[fixture]
    fn origin() -> Coord<f64> {
        Coord {
            x: 80.2707,
            y: 13.0827,
        }
    }

    #[fixture]
    fn catalogue(origin: Coord<f64>) -> Vec<Restaurant> {
        vec![
            restaurant("saravana", north_of(origin, 2.0), 4.3, 5400, "Chennai")
                .with_name("Saravana Bhavan")
                .with_description("Classic vegetarian tiffin")
                .with_cuisines(["South Indian", "Vegetarian"])
                .with_price_range(PriceRange::Budget)
                .with_features(["Takeaway"]),
            restaurant("dakshin", north_of(origin, 0.5), 4.8, 900, "Chennai")
                .with_name("Dakshin")
                .with_description("Coastal dishes from four southern states")
                .with_cuisines(["South Indian", "Seafood"])
                .with_price_range(PriceRange::Luxury)
                .with_features(["Fine Dining", "Bar"]),
            restaurant("bukhara", north_of(origin, 8.0), 4.7, 7600, "Delhi")
                .with_name("Bukhara")
                .with_description("Tandoor and dal from the frontier")
                .with_cuisines(["North Indian"])
                .with_price_range(PriceRange::Upscale)
                .with_features(["Fine Dining"]),
            restaurant("murugan", north_of(origin, 1.0), 4.3, 3100, "Chennai")
                .with_name("Murugan Idli Shop")
                .with_cuisines(["South Indian"])
                .with_price_range(PriceRange::Budget),
        ]
    }

    fn ids(listed: &[&Restaurant]) -> Vec<String> {
        listed.iter().map(|restaurant| restaurant.id().to_owned()).collect()
    }

    #[rstest]
    #[case("relevance", SortOption::Relevance)]
    #[case("rating", SortOption::Rating)]
    #[case("Reviews", SortOption::Reviews)]
    #[case("distance", SortOption::Distance)]
    #[case("priceAsc", SortOption::PriceAsc)]
    #[case("price-asc", SortOption::PriceAsc)]
    #[case("priceDesc", SortOption::PriceDesc)]
    #[case("price_desc", SortOption::PriceDesc)]
    fn parses_sort_option_spellings(#[case] input: &str, #[case] expected: SortOption) {
        assert_eq!(input.parse::<SortOption>(), Ok(expected));
    }

    #[rstest]
    fn sort_option_display_round_trips() {
        for option in SortOption::ALL {
            assert_eq!(option.to_string().parse::<SortOption>(), Ok(option));
        }
    }

    #[rstest]
    fn rejects_unknown_sort_option() {
        assert_eq!(
            "cheapest".parse::<SortOption>(),
            Err(UnknownSortOption("cheapest".to_owned()))
        );
    }

    #[rstest]
    fn default_filter_lists_everything_in_order(catalogue: Vec<Restaurant>) {
        let listed = list_restaurants(&catalogue, &ListingFilter::default(), SortOption::Relevance)
            .expect("valid filter");
        assert_eq!(ids(&listed), vec!["saravana", "dakshin", "bukhara", "murugan"]);
    }

    #[rstest]
    #[case("tiffin", vec!["saravana"])]
    #[case("SEAFOOD", vec!["dakshin"])]
    #[case("delhi", vec!["bukhara"])]
    #[case("  ", vec!["saravana", "dakshin", "bukhara", "murugan"])]
    fn search_spans_text_fields(
        catalogue: Vec<Restaurant>,
        #[case] term: &str,
        #[case] expected: Vec<&str>,
    ) {
        let filter = ListingFilter::default().with_search_term(term);
        let listed =
            list_restaurants(&catalogue, &filter, SortOption::Relevance).expect("valid filter");
        assert_eq!(ids(&listed), expected);
    }

    #[rstest]
    fn facets_combine(catalogue: Vec<Restaurant>) {
        let filter = ListingFilter::default()
            .with_cuisines(["South Indian"])
            .with_price_ranges([PriceRange::Budget, PriceRange::Luxury])
            .with_features(["Fine Dining", "Takeaway"]);
        let listed =
            list_restaurants(&catalogue, &filter, SortOption::Relevance).expect("valid filter");
        assert_eq!(ids(&listed), vec!["saravana", "dakshin"]);
    }

    #[rstest]
    #[case(SortOption::Rating, vec!["dakshin", "bukhara", "saravana", "murugan"])]
    #[case(SortOption::Reviews, vec!["bukhara", "saravana", "murugan", "dakshin"])]
    #[case(SortOption::Distance, vec!["dakshin", "murugan", "saravana", "bukhara"])]
    #[case(SortOption::PriceAsc, vec!["saravana", "murugan", "bukhara", "dakshin"])]
    #[case(SortOption::PriceDesc, vec!["dakshin", "bukhara", "saravana", "murugan"])]
    fn sorts_are_stable(
        origin: Coord<f64>,
        catalogue: Vec<Restaurant>,
        #[case] sort: SortOption,
        #[case] expected: Vec<&str>,
    ) {
        let filter = ListingFilter::default().with_origin(origin);
        let listed = list_restaurants(&catalogue, &filter, sort).expect("valid filter");
        assert_eq!(ids(&listed), expected);
    }

    #[rstest]
    fn distance_sort_without_origin_keeps_order(catalogue: Vec<Restaurant>) {
        let listed = list_restaurants(&catalogue, &ListingFilter::default(), SortOption::Distance)
            .expect("valid filter");
        assert_eq!(ids(&listed), vec!["saravana", "dakshin", "bukhara", "murugan"]);
    }

    #[rstest]
    fn distance_limit_applies_with_origin(origin: Coord<f64>, catalogue: Vec<Restaurant>) {
        let filter = ListingFilter::default()
            .with_origin(origin)
            .with_max_distance_km(2.5);
        let listed =
            list_restaurants(&catalogue, &filter, SortOption::Distance).expect("valid filter");
        assert_eq!(ids(&listed), vec!["dakshin", "murugan", "saravana"]);
    }

    #[rstest]
    fn invalid_distance_limit_is_rejected(catalogue: Vec<Restaurant>) {
        let filter = ListingFilter::default().with_max_distance_km(-1.0);
        assert!(matches!(
            list_restaurants(&catalogue, &filter, SortOption::Relevance),
            Err(QueryError::InvalidDistance { .. })
        ));
    }

    #[rstest]
    fn nearby_keeps_records_within_radius_nearest_first(
        origin: Coord<f64>,
        catalogue: Vec<Restaurant>,
    ) {
        let found = nearby(&catalogue, origin, 2.5).expect("valid radius");
        let found_ids: Vec<&str> = found
            .iter()
            .map(|candidate| candidate.restaurant.id())
            .collect();
        assert_eq!(found_ids, vec!["dakshin", "murugan", "saravana"]);
        assert_eq!(
            found.iter().map(|candidate| candidate.position).collect::<Vec<_>>(),
            vec![1, 3, 0]
        );
    }

    #[rstest]
    fn nearby_rejects_invalid_origin(catalogue: Vec<Restaurant>) {
        let origin = Coord { x: 0.0, y: -95.0 };
        assert!(matches!(
            nearby(&catalogue, origin, 5.0),
            Err(QueryError::InvalidOrigin { .. })
        ));
    }
}
