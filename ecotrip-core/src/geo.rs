//! Great-circle distance and travel-time estimation.
//!
//! Coordinates are WGS84 [`Coord`] values with `x = longitude` and
//! `y = latitude` in degrees. Distances are kilometres rounded to two
//! decimal places; that precision is the contract for every distance
//! flowing through the engine, so sums of legs stay consistent with the
//! per-leg values reported to callers.

use geo::Coord;

/// Mean Earth radius in kilometres used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average speed assumed for travel-time estimates, in km/h.
///
/// Calibrated for local roads rather than motorways.
pub const DEFAULT_TRAVEL_SPEED_KMH: f64 = 40.0;

/// Round a kilometre or kilogram quantity to two decimal places.
///
/// # Examples
/// ```
/// assert_eq!(ecotrip_core::round2(3.14159), 3.14);
/// assert_eq!(ecotrip_core::round2(2.0), 2.0);
/// ```
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Great-circle distance between two points in kilometres.
///
/// Uses the haversine formula with [`EARTH_RADIUS_KM`]; the result is
/// rounded to two decimal places. Identical points yield exactly `0.0`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use ecotrip_core::haversine_distance;
///
/// let origin = Coord { x: 99.8406, y: 19.9105 };
/// assert_eq!(haversine_distance(origin, origin), 0.0);
/// ```
pub fn haversine_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let dlat = (b.y - a.y).to_radians();
    let dlng = (b.x - a.x).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    // sqrt can overshoot 1.0 by an ulp on antipodal pairs; clamp before asin.
    let c = 2.0 * h.sqrt().min(1.0).asin();

    round2(EARTH_RADIUS_KM * c)
}

/// Distances from `origin` to each point, element-wise.
///
/// Produces exactly the same values as repeated [`haversine_distance`]
/// calls; it exists for convenience over candidate filtering, not as a
/// different algorithm.
pub fn distances_from(origin: Coord<f64>, points: &[Coord<f64>]) -> Vec<f64> {
    points
        .iter()
        .map(|point| haversine_distance(origin, *point))
        .collect()
}

/// Whether `point` lies within `radius_km` of `center` (boundary inclusive).
pub fn is_within_radius(center: Coord<f64>, point: Coord<f64>, radius_km: f64) -> bool {
    haversine_distance(center, point) <= radius_km
}

/// Estimated travel time in hours for `distance_km` at `avg_speed_kmh`.
///
/// Linear model rounded to two decimal places. Non-positive distance or
/// speed yields `0.0`.
///
/// # Examples
/// ```
/// use ecotrip_core::{DEFAULT_TRAVEL_SPEED_KMH, estimate_travel_time};
///
/// assert_eq!(estimate_travel_time(20.0, DEFAULT_TRAVEL_SPEED_KMH), 0.5);
/// assert_eq!(estimate_travel_time(0.0, DEFAULT_TRAVEL_SPEED_KMH), 0.0);
/// ```
pub fn estimate_travel_time(distance_km: f64, avg_speed_kmh: f64) -> f64 {
    if distance_km <= 0.0 || avg_speed_kmh <= 0.0 {
        return 0.0;
    }
    round2(distance_km / avg_speed_kmh)
}
