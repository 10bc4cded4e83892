//! Core domain types and pure computation for the ecotrip engine.
//!
//! The crate models an immutable dataset of places, scores candidates for a
//! trip request, and aggregates carbon emissions for an ordered route. Route
//! ordering itself lives behind the [`RouteSolver`] trait so solver crates
//! can be swapped without touching selection or carbon accounting.
//!
//! All computation here is deterministic and free of I/O; a
//! [`PlaceCatalog`] snapshot may be shared across threads behind an
//! `Arc` because nothing in this crate mutates it.

#![forbid(unsafe_code)]

pub mod carbon;
pub mod catalog;
pub mod geo;
pub mod place;
pub mod route;
pub mod score;
pub mod solver;
pub mod theme;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use carbon::{
    BASELINE_TRIP_CARBON_KG, CARBON_NORMALISATION_KG, CarbonLevel, TRANSPORT_CARBON_PER_KM,
    carbon_reduction_percent, eco_score, place_carbon, transport_carbon, trip_carbon,
};
pub use catalog::{CatalogError, PlaceCatalog};
pub use geo::{
    DEFAULT_TRAVEL_SPEED_KMH, EARTH_RADIUS_KM, distances_from, estimate_travel_time,
    haversine_distance, is_within_radius, round2,
};
pub use place::Place;
pub use route::{Itinerary, RouteStop, SelectionMode, TripSummary};
pub use score::{
    Candidate, ScoreWeights, SelectionError, min_max_normalise, rank_by_similarity, rank_by_theme,
    select_top,
};
pub use solver::{
    EFFICIENCY_MARGIN, EXPECTED_KM_PER_STOP, OrderedStop, RouteSolver, RouteSummary,
    route_efficiency, summarise_order,
};
pub use theme::{Theme, ThemeCatalog, ThemeError};
