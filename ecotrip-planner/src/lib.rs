//! Per-request trip assembly.
//!
//! [`TripPlanner`] runs the planning pipeline over an immutable
//! [`PlaceCatalog`] snapshot: filter by radius, score or match
//! candidates, order them into a route, annotate carbon, and aggregate
//! the trip summary. Each request either completes the whole pipeline or
//! fails before any itinerary exists; no partial results escape, and no
//! state survives between requests, so planners can serve concurrent
//! requests from a shared `Arc` snapshot without locking.

#![forbid(unsafe_code)]

mod error;

use std::sync::Arc;

use geo::Coord;
use log::debug;

use ecotrip_core::{
    BASELINE_TRIP_CARBON_KG, Candidate, DEFAULT_TRAVEL_SPEED_KMH, Itinerary, Place, PlaceCatalog,
    RouteSolver, RouteStop, ScoreWeights, SelectionError, SelectionMode, ThemeCatalog, ThemeError,
    TripSummary, place_carbon, rank_by_similarity, rank_by_theme, route_efficiency, select_top,
};

pub use error::PlanError;

/// Planner configuration; the defaults match the calibrated production
/// constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Feature weights for theme-relevance scoring.
    pub score_weights: ScoreWeights,
    /// Average speed assumed for travel-time estimates, km/h.
    pub avg_speed_kmh: f64,
    /// Baseline trip emissions for the carbon-reduction claim, kg CO2.
    pub baseline_carbon_kg: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            score_weights: ScoreWeights::default(),
            avg_speed_kmh: DEFAULT_TRAVEL_SPEED_KMH,
            baseline_carbon_kg: BASELINE_TRIP_CARBON_KG,
        }
    }
}

/// One trip-planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    /// Trip origin (WGS84, `x = longitude`, `y = latitude`).
    pub origin: Coord<f64>,
    /// Selection criterion: a theme id or a reference place name.
    pub mode: SelectionMode,
    /// Requested stop count; fewer are returned when fewer qualify.
    pub stops: usize,
    /// Candidate search radius around the origin, km.
    pub radius_km: f64,
}

/// Assembles itineraries from an immutable dataset snapshot.
///
/// Generic over the route solver so ordering strategies can be swapped;
/// the planner itself holds no per-request state.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use ecotrip_core::test_support::{SAMPLE_ORIGIN, sample_catalog, sample_themes};
/// use ecotrip_core::SelectionMode;
/// use ecotrip_planner::{TripPlanner, TripRequest};
/// use ecotrip_solver_greedy::GreedySolver;
///
/// let planner = TripPlanner::new(
///     Arc::new(sample_catalog()),
///     sample_themes(),
///     GreedySolver::new(),
/// );
/// let itinerary = planner.plan(&TripRequest {
///     origin: SAMPLE_ORIGIN,
///     mode: SelectionMode::Theme("naturalist".into()),
///     stops: 3,
///     radius_km: 30.0,
/// })?;
/// assert!(itinerary.stops.len() <= 3);
/// # Ok::<(), ecotrip_planner::PlanError>(())
/// ```
#[derive(Debug)]
pub struct TripPlanner<S: RouteSolver> {
    catalog: Arc<PlaceCatalog>,
    themes: ThemeCatalog,
    solver: S,
    config: PlannerConfig,
}

impl<S: RouteSolver> TripPlanner<S> {
    /// Construct a planner with default configuration.
    pub fn new(catalog: Arc<PlaceCatalog>, themes: ThemeCatalog, solver: S) -> Self {
        Self::with_config(catalog, themes, solver, PlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    pub const fn with_config(
        catalog: Arc<PlaceCatalog>,
        themes: ThemeCatalog,
        solver: S,
        config: PlannerConfig,
    ) -> Self {
        Self {
            catalog,
            themes,
            solver,
            config,
        }
    }

    /// Run the full pipeline for one request.
    ///
    /// # Errors
    /// Validation failures ([`PlanError::UnknownTheme`],
    /// [`PlanError::UnknownPlace`], [`PlanError::NoCandidates`]) when the
    /// request cannot be satisfied; [`PlanError::Internal`] when the
    /// solver violates its contract.
    pub fn plan(&self, request: &TripRequest) -> Result<Itinerary, PlanError> {
        // Filtering.
        let candidates = self
            .catalog
            .within_radius(request.origin, request.radius_km);
        debug!(
            "radius filter kept {} of {} places within {} km",
            candidates.len(),
            self.catalog.len(),
            request.radius_km
        );
        if candidates.is_empty() {
            return Err(PlanError::NoCandidates {
                radius_km: request.radius_km,
            });
        }

        // Scoring / similarity.
        let (ranked, mode) = self.rank(candidates, request)?;
        debug!("ranked {} candidates in {mode:?} mode", ranked.len());

        // Selection.
        let selected = select_top(ranked, request.stops);
        if selected.is_empty() {
            return Err(PlanError::NoCandidates {
                radius_km: request.radius_km,
            });
        }
        let places: Vec<Place> = selected.into_iter().map(|c| c.place).collect();

        // Ordering.
        let order = self.solver.order(request.origin, &places);
        if order.len() != places.len() {
            return Err(PlanError::Internal {
                expected: places.len(),
                got: order.len(),
            });
        }

        // Aggregating.
        let stops: Vec<RouteStop> = order
            .iter()
            .enumerate()
            .map(|(position, stop)| {
                let place = places[stop.index].clone();
                let carbon_kg = place_carbon(&place, stop.distance_from_prev_km);
                RouteStop {
                    stop_number: position + 1,
                    place,
                    distance_from_prev_km: stop.distance_from_prev_km,
                    distance_from_start_km: stop.distance_from_start_km,
                    carbon_kg,
                }
            })
            .collect();

        let total_distance_km = stops
            .last()
            .map_or(0.0, |stop| stop.distance_from_start_km);
        let efficiency = route_efficiency(total_distance_km, stops.len());
        let summary = TripSummary::for_stops(
            &stops,
            efficiency,
            self.config.avg_speed_kmh,
            self.config.baseline_carbon_kg,
        );
        debug!(
            "assembled {} stops over {} km, {} kg CO2, eco score {}",
            summary.total_stops,
            summary.total_distance_km,
            summary.total_carbon_kg,
            summary.eco_score
        );

        Ok(Itinerary {
            origin: request.origin,
            mode,
            stops,
            summary,
        })
    }

    /// Rank radius-filtered candidates per the request's selection mode,
    /// resolving the mode value against the catalogs.
    fn rank(
        &self,
        candidates: Vec<Candidate>,
        request: &TripRequest,
    ) -> Result<(Vec<Candidate>, SelectionMode), PlanError> {
        match &request.mode {
            SelectionMode::Theme(theme_id) => {
                let theme = self
                    .themes
                    .lookup(theme_id)
                    .map_err(|_: ThemeError| PlanError::UnknownTheme(theme_id.clone()))?;
                let ranked = rank_by_theme(candidates, theme, &self.config.score_weights)
                    .map_err(|SelectionError::NoCandidates| PlanError::NoCandidates {
                        radius_km: request.radius_km,
                    })?;
                Ok((ranked, SelectionMode::Theme(theme.id.clone())))
            }
            SelectionMode::SimilarTo(query) => {
                let reference = self
                    .catalog
                    .find_by_name(query)
                    .ok_or_else(|| PlanError::UnknownPlace(query.clone()))?;
                let ranked = rank_by_similarity(candidates, reference).map_err(
                    |SelectionError::NoCandidates| PlanError::NoCandidates {
                        radius_km: request.radius_km,
                    },
                )?;
                Ok((ranked, SelectionMode::SimilarTo(reference.name.clone())))
            }
        }
    }
}
