//! The seam between candidate selection and route ordering.
//!
//! A [`RouteSolver`] turns an unordered slice of places into a visiting
//! sequence with per-leg distances. Implementations live in solver
//! crates; the engine only relies on this trait plus the route-efficiency
//! diagnostic defined here.

use geo::Coord;

use crate::geo::round2;
use crate::place::Place;

/// Heuristic expected distance per stop, km. No empirical basis in the
/// source data; kept as a fixed tunable.
pub const EXPECTED_KM_PER_STOP: f64 = 10.0;

/// Slack multiplier applied to the expected distance before comparing
/// against the actual route length.
pub const EFFICIENCY_MARGIN: f64 = 1.5;

/// One position in a solver's output: which input place goes here and how
/// far it is from the previous position and from the origin.
///
/// `distance_from_start_km` is monotonically non-decreasing across a
/// route; it is the running sum of the (rounded) legs before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderedStop {
    /// Index into the candidate slice handed to the solver.
    pub index: usize,
    /// Leg distance from the previous position (the origin for the first
    /// stop), km.
    pub distance_from_prev_km: f64,
    /// Cumulative distance from the trip origin, km.
    pub distance_from_start_km: f64,
}

/// Order an unordered candidate set into a visiting sequence.
///
/// Implementations must be pure functions of `(origin, places)`: no
/// internal state, deterministic for a stable input order, and
/// `Send + Sync` so requests can run concurrently. An empty input yields
/// an empty route; the caller decides whether that is an error.
pub trait RouteSolver: Send + Sync {
    /// Produce a visiting order over `places` starting from `origin`.
    ///
    /// Every input index appears exactly once in the output.
    fn order(&self, origin: Coord<f64>, places: &[Place]) -> Vec<OrderedStop>;
}

/// Aggregate statistics over a solver's output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummary {
    /// Number of stops in the route.
    pub total_stops: usize,
    /// Total route distance (the last stop's cumulative distance), km.
    pub total_distance_km: f64,
    /// Mean leg-adjusted distance per stop, km.
    pub avg_distance_per_stop_km: f64,
}

/// Summarise an ordered route.
///
/// # Examples
/// ```
/// use ecotrip_core::{OrderedStop, summarise_order};
///
/// let order = [
///     OrderedStop { index: 0, distance_from_prev_km: 3.0, distance_from_start_km: 3.0 },
///     OrderedStop { index: 1, distance_from_prev_km: 2.0, distance_from_start_km: 5.0 },
/// ];
/// let summary = summarise_order(&order);
/// assert_eq!(summary.total_distance_km, 5.0);
/// assert_eq!(summary.avg_distance_per_stop_km, 2.5);
/// ```
pub fn summarise_order(order: &[OrderedStop]) -> RouteSummary {
    let total_stops = order.len();
    let total_distance_km = order.last().map_or(0.0, |stop| stop.distance_from_start_km);
    let avg_distance_per_stop_km = if total_stops == 0 {
        0.0
    } else {
        round2(total_distance_km / total_stops as f64)
    };
    RouteSummary {
        total_stops,
        total_distance_km,
        avg_distance_per_stop_km,
    }
}

/// Route-efficiency diagnostic in `0.0..=1.0`; feeds the eco score.
///
/// Compares the actual total distance against a heuristic expectation of
/// [`EXPECTED_KM_PER_STOP`] per stop with an [`EFFICIENCY_MARGIN`] of
/// slack. Routes of one stop or fewer are perfectly efficient by
/// definition.
///
/// # Examples
/// ```
/// use ecotrip_core::route_efficiency;
///
/// assert_eq!(route_efficiency(0.0, 0), 1.0);
/// assert_eq!(route_efficiency(45.0, 3), 0.0);
/// assert_eq!(route_efficiency(15.0, 2), 0.5);
/// ```
pub fn route_efficiency(total_distance_km: f64, stop_count: usize) -> f64 {
    if stop_count <= 1 {
        return 1.0;
    }
    let expected = stop_count as f64 * EXPECTED_KM_PER_STOP * EFFICIENCY_MARGIN;
    let efficiency = (1.0 - total_distance_km / expected).max(0.0);
    round2(efficiency.min(1.0))
}
