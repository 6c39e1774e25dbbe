//! Great-circle distance between WGS84 coordinates.
//!
//! Distances use the Haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Inputs are not range-checked: out-of-range latitudes
//! produce a finite but meaningless value, so validate coordinates at the
//! boundary (see [`Restaurant::new`](crate::Restaurant::new) and
//! [`RecommendationQuery::validate`](crate::RecommendationQuery::validate)).
//!
//! # Examples
//! ```
//! use tandoor_core::distance_km;
//!
//! // Chandigarh Sector 17 to Sector 22.
//! let km = distance_km(30.7398, 76.7827, 30.7333, 76.7794);
//! assert!(km > 0.5 && km < 1.0);
//! assert_eq!(distance_km(30.7398, 76.7827, 30.7398, 76.7827), 0.0);
//! ```

use geo::Coord;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometres between two latitude/longitude pairs in degrees.
///
/// The result is symmetric in its arguments and zero when both points
/// coincide.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let half_d_lat = (d_lat / 2.0).sin();
    let half_d_lon = (d_lon / 2.0).sin();

    let a = half_d_lat * half_d_lat
        + lat1.to_radians().cos() * lat2.to_radians().cos() * half_d_lon * half_d_lon;
    // Rounding can push `a` fractionally past 1.0 for antipodal points.
    let bounded = a.clamp(0.0, 1.0);
    let c = 2.0 * bounded.sqrt().atan2((1.0 - bounded).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance in kilometres between two coordinates.
///
/// Coordinates follow the `geo` convention of `x = longitude`,
/// `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tandoor_core::haversine_km;
///
/// let delhi = Coord { x: 77.2090, y: 28.6139 };
/// let agra = Coord { x: 78.0081, y: 27.1767 };
/// let km = haversine_km(delhi, agra);
/// assert!((km - 178.0).abs() < 2.0);
/// ```
#[must_use]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    distance_km(from.y, from.x, to.y, to.x)
}
