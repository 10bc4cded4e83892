//! Nearest-neighbour construction and first-improvement 2-opt.

use geo::Coord;
use log::debug;

use ecotrip_core::{OrderedStop, Place, RouteSolver, haversine_distance, round2};

/// Configuration for [`GreedySolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedySolverConfig {
    /// Upper bound on 2-opt scan passes. Each pass applies at most one
    /// reversal (first-improvement) and restarts the scan; the cap bounds
    /// worst-case latency on pathological inputs. Zero disables
    /// improvement entirely, leaving the nearest-neighbour order.
    pub max_passes: usize,
}

impl Default for GreedySolverConfig {
    fn default() -> Self {
        Self { max_passes: 100 }
    }
}

/// Route solver using nearest-neighbour construction followed by capped
/// first-improvement 2-opt.
///
/// Stateless and deterministic: ties during construction are broken by
/// input order (first encountered wins), so a stable candidate ordering
/// always yields the same route.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use ecotrip_core::{Place, RouteSolver};
/// use ecotrip_solver_greedy::GreedySolver;
///
/// let origin = Coord { x: 99.8406, y: 19.9105 };
/// let places = vec![
///     Place::new("far", "Far", "viewpoint", Coord { x: 99.8406, y: 19.9825 }),
///     Place::new("near", "Near", "viewpoint", Coord { x: 99.8406, y: 19.9375 }),
/// ];
/// let order = GreedySolver::new().order(origin, &places);
/// assert_eq!(order[0].index, 1); // the nearer place is visited first
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver {
    config: GreedySolverConfig,
}

impl GreedySolver {
    /// Construct a solver with the default pass cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a solver with explicit configuration.
    pub const fn with_config(config: GreedySolverConfig) -> Self {
        Self { config }
    }

    /// Run capped first-improvement 2-opt over `route`, returning the
    /// number of scan passes consumed.
    fn improve(&self, origin: Coord<f64>, places: &[Place], route: &mut [usize]) -> usize {
        let mut passes = 0;
        while passes < self.config.max_passes {
            passes += 1;
            if !apply_first_improvement(origin, places, route) {
                break;
            }
        }
        passes
    }
}

impl RouteSolver for GreedySolver {
    fn order(&self, origin: Coord<f64>, places: &[Place]) -> Vec<OrderedStop> {
        if places.is_empty() {
            return Vec::new();
        }
        let mut route = nearest_neighbour(origin, places);
        // No improving move exists below three stops.
        if route.len() >= 3 {
            let passes = self.improve(origin, places, &mut route);
            debug!(
                "2-opt finished after {passes} of {} passes over {} stops",
                self.config.max_passes,
                route.len()
            );
        }
        route_details(origin, places, &route)
    }
}

/// Greedy construction: always step to the closest unvisited place.
///
/// Strict `<` comparison means the first encountered wins distance ties,
/// keeping the result deterministic for a stable input order.
fn nearest_neighbour(origin: Coord<f64>, places: &[Place]) -> Vec<usize> {
    let mut unvisited: Vec<usize> = (0..places.len()).collect();
    let mut route = Vec::with_capacity(places.len());
    let mut current = origin;

    while !unvisited.is_empty() {
        let mut nearest_pos = 0;
        let mut nearest_dist = f64::INFINITY;
        for (pos, &index) in unvisited.iter().enumerate() {
            let dist = haversine_distance(current, places[index].location);
            if dist < nearest_dist {
                nearest_dist = dist;
                nearest_pos = pos;
            }
        }
        let index = unvisited.remove(nearest_pos);
        current = places[index].location;
        route.push(index);
    }
    route
}

/// Scan pairs `(i, j)` with `j >= i + 2` and apply the first reversal of
/// `route[i..=j]` that strictly shortens the route.
///
/// Reversing that span replaces the edge into position `i` (from the
/// origin when `i == 0`) and the edge out of position `j` (absent when
/// `j` is the last stop); interior edges only flip direction and the
/// haversine is symmetric, so the comparison below accounts for the full
/// length change exactly.
fn apply_first_improvement(origin: Coord<f64>, places: &[Place], route: &mut [usize]) -> bool {
    let len = route.len();
    for i in 0..len.saturating_sub(2) {
        let prev = if i == 0 {
            origin
        } else {
            places[route[i - 1]].location
        };
        for j in (i + 2)..len {
            let current_edges = haversine_distance(prev, places[route[i]].location)
                + edge_out(places, route, i, j, false);
            let reversed_edges = haversine_distance(prev, places[route[j]].location)
                + edge_out(places, route, i, j, true);
            if reversed_edges < current_edges {
                route[i..=j].reverse();
                return true;
            }
        }
    }
    false
}

/// Length of the edge leaving position `j`, for the current route or for
/// the hypothetical reversal of `route[i..=j]`. Zero when `j` is last:
/// the route is open and has no closing edge.
fn edge_out(places: &[Place], route: &[usize], i: usize, j: usize, reversed: bool) -> f64 {
    if j + 1 >= route.len() {
        return 0.0;
    }
    let from = if reversed { route[i] } else { route[j] };
    haversine_distance(places[from].location, places[route[j + 1]].location)
}

/// Single walk over the final order accumulating leg and cumulative
/// distances. The planner reads the total from the last cumulative value,
/// so the reported total is always consistent with the stop list.
fn route_details(origin: Coord<f64>, places: &[Place], route: &[usize]) -> Vec<OrderedStop> {
    let mut current = origin;
    let mut cumulative = 0.0;
    let mut details = Vec::with_capacity(route.len());
    for &index in route {
        let leg = haversine_distance(current, places[index].location);
        cumulative = round2(cumulative + leg);
        details.push(OrderedStop {
            index,
            distance_from_prev_km: leg,
            distance_from_start_km: cumulative,
        });
        current = places[index].location;
    }
    details
}
