//! Facade crate for the eco-trip recommendation engine.
//!
//! Re-exports the core domain types and exposes the route solver and
//! trip planner behind feature flags.

#![forbid(unsafe_code)]

pub use ecotrip_core::{
    BASELINE_TRIP_CARBON_KG, CARBON_NORMALISATION_KG, Candidate, CarbonLevel, CatalogError,
    DEFAULT_TRAVEL_SPEED_KMH, EARTH_RADIUS_KM, EFFICIENCY_MARGIN, EXPECTED_KM_PER_STOP, Itinerary,
    OrderedStop, Place, PlaceCatalog,
    RouteSolver, RouteStop, RouteSummary, ScoreWeights, SelectionError, SelectionMode, Theme,
    ThemeCatalog, ThemeError, TRANSPORT_CARBON_PER_KM, TripSummary, carbon_reduction_percent,
    distances_from, eco_score, estimate_travel_time, haversine_distance, is_within_radius,
    min_max_normalise, place_carbon, rank_by_similarity, rank_by_theme, round2, route_efficiency,
    select_top, summarise_order, transport_carbon, trip_carbon,
};

#[cfg(feature = "test-support")]
pub use ecotrip_core::test_support;

#[cfg(feature = "solver-greedy")]
pub use ecotrip_solver_greedy::{GreedySolver, GreedySolverConfig};

#[cfg(feature = "planner")]
pub use ecotrip_planner::{PlanError, PlannerConfig, TripPlanner, TripRequest};
