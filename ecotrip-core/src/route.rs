//! Assembled itineraries and their summaries.
//!
//! A [`RouteStop`] binds a place into a specific position of a route;
//! an [`Itinerary`] is the immutable, per-request end product handed to
//! presentation layers.

use geo::Coord;

use crate::carbon::{carbon_reduction_percent, eco_score, route_carbon};
use crate::geo::{estimate_travel_time, round2};
use crate::place::Place;

/// How the stops of an itinerary were selected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SelectionMode {
    /// Theme-relevance selection; carries the theme id.
    Theme(String),
    /// Reference-place similarity selection; carries the matched place name.
    SimilarTo(String),
}

/// One place bound into a specific position of a route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStop {
    /// 1-based sequential position.
    pub stop_number: usize,
    /// The place visited at this position.
    pub place: Place,
    /// Leg distance from the previous stop (the origin for stop 1), km.
    pub distance_from_prev_km: f64,
    /// Cumulative distance from the trip origin, km; monotonically
    /// non-decreasing across stop numbers.
    pub distance_from_start_km: f64,
    /// Emissions attributed to reaching and visiting this stop, kg CO2.
    pub carbon_kg: f64,
}

/// Aggregate figures for a whole trip.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripSummary {
    /// Number of stops.
    pub total_stops: usize,
    /// Total route distance, km.
    pub total_distance_km: f64,
    /// Estimated travel time, hours.
    pub estimated_time_hours: f64,
    /// Total emissions, kg CO2.
    pub total_carbon_kg: f64,
    /// Composite eco-friendliness score, 0-10.
    pub eco_score: f64,
    /// Emissions saved versus the baseline trip, percent.
    pub carbon_reduction_percent: f64,
}

impl TripSummary {
    /// Aggregate a summary from an ordered, carbon-annotated route.
    ///
    /// `route_efficiency` comes from the solver diagnostic
    /// ([`crate::route_efficiency`]); `avg_speed_kmh` and
    /// `baseline_carbon_kg` are planner configuration.
    pub fn for_stops(
        stops: &[RouteStop],
        route_efficiency: f64,
        avg_speed_kmh: f64,
        baseline_carbon_kg: f64,
    ) -> Self {
        let total_stops = stops.len();
        let total_distance_km = stops
            .last()
            .map_or(0.0, |stop| stop.distance_from_start_km);
        let total_carbon_kg = route_carbon(stops);
        let (avg_tourism, avg_rating) = if total_stops == 0 {
            (0.0, 0.0)
        } else {
            let n = total_stops as f64;
            (
                stops.iter().map(|s| s.place.tourism_score).sum::<f64>() / n,
                stops.iter().map(|s| s.place.rating).sum::<f64>() / n,
            )
        };
        Self {
            total_stops,
            total_distance_km: round2(total_distance_km),
            estimated_time_hours: estimate_travel_time(total_distance_km, avg_speed_kmh),
            total_carbon_kg,
            eco_score: eco_score(total_carbon_kg, avg_tourism, avg_rating, route_efficiency),
            carbon_reduction_percent: carbon_reduction_percent(
                total_carbon_kg,
                baseline_carbon_kg,
            ),
        }
    }
}

/// The immutable end product of one planning request.
///
/// Constructed once, never mutated, and dropped with the response.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    /// Trip origin (WGS84, `x = longitude`, `y = latitude`).
    pub origin: Coord<f64>,
    /// How the stops were selected.
    pub mode: SelectionMode,
    /// Stops in visiting order.
    pub stops: Vec<RouteStop>,
    /// Aggregate trip figures.
    pub summary: TripSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carbon::place_carbon;
    use crate::geo::DEFAULT_TRAVEL_SPEED_KMH;
    use rstest::rstest;

    fn stop(number: usize, leg: f64, cumulative: f64, tourism: f64, rating: f64) -> RouteStop {
        let place = Place::new(
            format!("p{number}"),
            format!("Stop {number}"),
            "viewpoint",
            Coord { x: 99.8, y: 19.9 },
        )
        .with_rating(rating, 50)
        .with_scores(tourism, 10.0);
        let carbon_kg = place_carbon(&place, leg);
        RouteStop {
            stop_number: number,
            place,
            distance_from_prev_km: leg,
            distance_from_start_km: cumulative,
            carbon_kg,
        }
    }

    #[rstest]
    fn summary_reads_total_from_last_cumulative() {
        let stops = vec![
            stop(1, 3.0, 3.0, 0.8, 4.0),
            stop(2, 2.0, 5.0, 0.6, 4.5),
            stop(3, 3.0, 8.0, 0.7, 3.5),
        ];
        let summary = TripSummary::for_stops(&stops, 1.0, DEFAULT_TRAVEL_SPEED_KMH, 15.0);
        assert_eq!(summary.total_stops, 3);
        assert_eq!(summary.total_distance_km, 8.0);
        assert_eq!(summary.estimated_time_hours, 0.2);
        // Three transport-only legs: 0.36 + 0.24 + 0.36.
        assert_eq!(summary.total_carbon_kg, 0.96);
        assert_eq!(summary.carbon_reduction_percent, 93.6);
    }

    #[rstest]
    fn summary_of_empty_route_is_all_zero_except_reduction() {
        let summary = TripSummary::for_stops(&[], 1.0, DEFAULT_TRAVEL_SPEED_KMH, 15.0);
        assert_eq!(summary.total_stops, 0);
        assert_eq!(summary.total_distance_km, 0.0);
        assert_eq!(summary.total_carbon_kg, 0.0);
        assert_eq!(summary.carbon_reduction_percent, 100.0);
    }

    #[rstest]
    fn eco_score_reflects_stop_quality() {
        let stops = vec![stop(1, 1.0, 1.0, 1.0, 5.0)];
        let summary = TripSummary::for_stops(&stops, 1.0, DEFAULT_TRAVEL_SPEED_KMH, 15.0);
        // 0.12 kg trip: (1 - 0.006) * 4 + 3 + 2 + 1 = 9.976 → 10.0.
        assert_eq!(summary.eco_score, 10.0);
    }
}
