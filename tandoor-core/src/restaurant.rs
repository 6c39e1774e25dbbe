//! Restaurant records consumed by the ranking pipeline.
//!
//! A [`Restaurant`] is validated once, when it is constructed or
//! deserialised, and is immutable afterwards apart from the builder-style
//! `with_*` helpers that consume and return the value.

use std::fmt;
use std::str::FromStr;

use geo::Coord;
use thiserror::Error;

/// Highest rating a restaurant can carry.
pub const MAX_RATING: f64 = 5.0;

/// Price band shown alongside a restaurant, from `$` to `$$$$`.
///
/// # Examples
/// ```
/// use tandoor_core::PriceRange;
///
/// let price: PriceRange = "$$".parse().unwrap();
/// assert_eq!(price, PriceRange::Moderate);
/// assert_eq!(price.to_string(), "$$");
/// assert!(PriceRange::Budget < PriceRange::Luxury);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PriceRange {
    /// `$`
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "$"))]
    Budget,
    /// `$$`
    #[cfg_attr(feature = "serde", serde(rename = "$$"))]
    Moderate,
    /// `$$$`
    #[cfg_attr(feature = "serde", serde(rename = "$$$"))]
    Upscale,
    /// `$$$$`
    #[cfg_attr(feature = "serde", serde(rename = "$$$$"))]
    Luxury,
}

impl PriceRange {
    /// Return the dollar-sign representation.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Upscale => "$$$",
            Self::Luxury => "$$$$",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for PriceRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "$" => Ok(Self::Budget),
            "$$" => Ok(Self::Moderate),
            "$$$" => Ok(Self::Upscale),
            "$$$$" => Ok(Self::Luxury),
            _ => Err(format!("unknown price range '{s}'")),
        }
    }
}

/// Errors returned by [`Restaurant::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RestaurantError {
    /// The identifier was empty or whitespace.
    #[error("restaurant id must not be empty")]
    EmptyId,
    /// The rating was not a finite value in `0.0..=5.0`.
    #[error("rating {rating} for restaurant {id} must be between 0.0 and 5.0")]
    RatingOutOfRange {
        /// Identifier of the rejected record.
        id: String,
        /// Rating supplied by the caller.
        rating: f64,
    },
    /// The location was not a finite WGS84 coordinate.
    #[error("location ({latitude}, {longitude}) for restaurant {id} is not a valid coordinate")]
    InvalidLocation {
        /// Identifier of the rejected record.
        id: String,
        /// Latitude in decimal degrees.
        latitude: f64,
        /// Longitude in decimal degrees.
        longitude: f64,
    },
}

/// A restaurant that can be filtered, scored and listed.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Cuisine tags
/// keep their original order and spelling; matching against them is
/// case-insensitive (see [`Restaurant::matches_cuisine`]). The `locality`
/// (usually the city) groups restaurants for diversity capping.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tandoor_core::Restaurant;
///
/// # fn main() -> Result<(), tandoor_core::RestaurantError> {
/// let restaurant = Restaurant::new("r1", Coord { x: 76.7794, y: 30.7333 }, 4.5, 1200, "Chandigarh")?
///     .with_name("Pal Dhaba")
///     .with_cuisines(["North Indian", "Punjabi"]);
/// assert_eq!(restaurant.latitude(), 30.7333);
/// assert!(restaurant.matches_cuisine("punjabi"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "wire::RestaurantRecord", into = "wire::RestaurantRecord")
)]
pub struct Restaurant {
    id: String,
    name: String,
    description: String,
    location: Coord<f64>,
    rating: f64,
    review_count: u32,
    cuisines: Vec<String>,
    locality: String,
    price_range: PriceRange,
    features: Vec<String>,
    is_featured: bool,
}

impl Restaurant {
    /// Validate and construct a [`Restaurant`].
    ///
    /// Only the fields the ranking pipeline depends on are required; the
    /// descriptive fields default to empty and can be filled with the `with_*`
    /// helpers.
    ///
    /// # Errors
    /// Returns [`RestaurantError`] when the id is blank, the rating is outside
    /// `0.0..=5.0`, or the location is not a finite coordinate with latitude in
    /// `-90..=90` and longitude in `-180..=180`.
    pub fn new(
        id: impl Into<String>,
        location: Coord<f64>,
        rating: f64,
        review_count: u32,
        locality: impl Into<String>,
    ) -> Result<Self, RestaurantError> {
        let owned_id = id.into();
        if owned_id.trim().is_empty() {
            return Err(RestaurantError::EmptyId);
        }
        if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
            return Err(RestaurantError::RatingOutOfRange {
                id: owned_id,
                rating,
            });
        }
        if !is_valid_coordinate(location) {
            return Err(RestaurantError::InvalidLocation {
                id: owned_id,
                latitude: location.y,
                longitude: location.x,
            });
        }
        Ok(Self {
            id: owned_id,
            name: String::new(),
            description: String::new(),
            location,
            rating,
            review_count,
            cuisines: Vec::new(),
            locality: locality.into(),
            price_range: PriceRange::default(),
            features: Vec::new(),
            is_featured: false,
        })
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the cuisine tags, preserving their order.
    #[must_use]
    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    /// Set the price band.
    #[must_use]
    pub const fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = price_range;
        self
    }

    /// Replace the listed amenities (e.g. "Outdoor Seating").
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the restaurant as editorially featured.
    #[must_use]
    pub const fn with_featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Geospatial position (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Average rating in `0.0..=5.0`.
    #[must_use]
    pub const fn rating(&self) -> f64 {
        self.rating
    }

    /// Number of reviews, used as a popularity signal.
    #[must_use]
    pub const fn review_count(&self) -> u32 {
        self.review_count
    }

    /// Cuisine tags in their original order.
    #[must_use]
    pub fn cuisines(&self) -> &[String] {
        &self.cuisines
    }

    /// Grouping key used for diversity capping.
    #[must_use]
    pub fn locality(&self) -> &str {
        &self.locality
    }

    /// Price band.
    #[must_use]
    pub const fn price_range(&self) -> PriceRange {
        self.price_range
    }

    /// Listed amenities.
    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Whether the restaurant is editorially featured.
    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.is_featured
    }

    /// Report whether any cuisine tag contains `keyword`, ignoring case.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use tandoor_core::Restaurant;
    ///
    /// let restaurant = Restaurant::new("r1", Coord { x: 0.0, y: 0.0 }, 4.0, 10, "Chennai")
    ///     .unwrap()
    ///     .with_cuisines(["South Indian"]);
    /// assert!(restaurant.matches_cuisine("indian"));
    /// assert!(!restaurant.matches_cuisine("italian"));
    /// ```
    #[must_use]
    pub fn matches_cuisine(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.cuisines
            .iter()
            .any(|cuisine| cuisine.to_lowercase().contains(&needle))
    }
}

fn is_valid_coordinate(location: Coord<f64>) -> bool {
    location.x.is_finite()
        && location.y.is_finite()
        && (-180.0..=180.0).contains(&location.x)
        && (-90.0..=90.0).contains(&location.y)
}

#[cfg(feature = "serde")]
mod wire {
    //! JSON shape shared with the browser application's fixtures.

    use geo::Coord;
    use serde::{Deserialize, Serialize};

    use super::{PriceRange, Restaurant, RestaurantError};

    #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
    pub(super) struct LatLng {
        lat: f64,
        lng: f64,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct RestaurantRecord {
        id: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        description: String,
        #[serde(default, rename = "cuisine")]
        cuisines: Vec<String>,
        #[serde(default)]
        price_range: PriceRange,
        #[serde(rename = "city")]
        locality: String,
        location: LatLng,
        rating: f64,
        #[serde(default)]
        review_count: u32,
        #[serde(default)]
        features: Vec<String>,
        #[serde(default)]
        is_featured: bool,
    }

    impl TryFrom<RestaurantRecord> for Restaurant {
        type Error = RestaurantError;

        fn try_from(record: RestaurantRecord) -> Result<Self, Self::Error> {
            let location = Coord {
                x: record.location.lng,
                y: record.location.lat,
            };
            Ok(Self::new(
                record.id,
                location,
                record.rating,
                record.review_count,
                record.locality,
            )?
            .with_name(record.name)
            .with_description(record.description)
            .with_cuisines(record.cuisines)
            .with_price_range(record.price_range)
            .with_features(record.features)
            .with_featured(record.is_featured))
        }
    }

    impl From<Restaurant> for RestaurantRecord {
        fn from(restaurant: Restaurant) -> Self {
            Self {
                id: restaurant.id,
                name: restaurant.name,
                description: restaurant.description,
                cuisines: restaurant.cuisines,
                price_range: restaurant.price_range,
                locality: restaurant.locality,
                location: LatLng {
                    lat: restaurant.location.y,
                    lng: restaurant.location.x,
                },
                rating: restaurant.rating,
                review_count: restaurant.review_count,
                features: restaurant.features,
                is_featured: restaurant.is_featured,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn chandigarh() -> Coord<f64> {
        Coord {
            x: 76.7794,
            y: 30.7333,
        }
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank_ids(chandigarh: Coord<f64>, #[case] id: &str) {
        let result = Restaurant::new(id, chandigarh, 4.0, 10, "Chandigarh");
        assert_eq!(result, Err(RestaurantError::EmptyId));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(5.1)]
    #[case(f64::NAN)]
    fn rejects_ratings_outside_scale(chandigarh: Coord<f64>, #[case] rating: f64) {
        let result = Restaurant::new("r1", chandigarh, rating, 10, "Chandigarh");
        assert!(matches!(
            result,
            Err(RestaurantError::RatingOutOfRange { .. })
        ));
    }

    #[rstest]
    #[case(0.0)]
    #[case(5.0)]
    fn accepts_boundary_ratings(chandigarh: Coord<f64>, #[case] rating: f64) {
        assert!(Restaurant::new("r1", chandigarh, rating, 0, "Chandigarh").is_ok());
    }

    #[rstest]
    #[case(Coord { x: 0.0, y: 91.0 })]
    #[case(Coord { x: 181.0, y: 0.0 })]
    #[case(Coord { x: f64::INFINITY, y: 0.0 })]
    fn rejects_invalid_locations(#[case] location: Coord<f64>) {
        let result = Restaurant::new("r1", location, 4.0, 10, "Nowhere");
        assert!(matches!(
            result,
            Err(RestaurantError::InvalidLocation { .. })
        ));
    }

    #[rstest]
    #[case("INDIAN", true)]
    #[case("south", true)]
    #[case("Mughlai", false)]
    fn cuisine_matching_ignores_case(
        chandigarh: Coord<f64>,
        #[case] keyword: &str,
        #[case] expected: bool,
    ) {
        let restaurant = Restaurant::new("r1", chandigarh, 4.0, 10, "Chandigarh")
            .expect("valid restaurant")
            .with_cuisines(["South Indian", "Kerala"]);
        assert_eq!(restaurant.matches_cuisine(keyword), expected);
    }

    #[rstest]
    fn price_range_parsing_rejects_unknown() {
        let err = PriceRange::from_str("€").expect_err("unknown band");
        assert!(err.contains("unknown price range"));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_browser_fixture_shape() {
        let json = r#"{
            "id": "1",
            "name": "Saravana Bhavan",
            "cuisine": ["South Indian", "Pure Veg"],
            "priceRange": "$$",
            "city": "Chennai",
            "location": { "lat": 13.0418, "lng": 80.2341 },
            "rating": 4.4,
            "reviewCount": 2100,
            "isFeatured": true
        }"#;
        let restaurant: Restaurant = serde_json::from_str(json).expect("valid record");
        assert_eq!(restaurant.id(), "1");
        assert_eq!(restaurant.locality(), "Chennai");
        assert_eq!(restaurant.longitude(), 80.2341);
        assert_eq!(restaurant.price_range(), PriceRange::Moderate);
        assert!(restaurant.is_featured());
        assert!(restaurant.features().is_empty());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialisation_applies_validation() {
        let json = r#"{
            "id": "2",
            "city": "Delhi",
            "location": { "lat": 28.6, "lng": 77.2 },
            "rating": 7.5
        }"#;
        let err = serde_json::from_str::<Restaurant>(json).expect_err("rating out of range");
        assert!(err.to_string().contains("between 0.0 and 5.0"));
    }
}
