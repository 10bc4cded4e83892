//! Greedy route ordering: nearest-neighbour construction with 2-opt
//! local improvement.
//!
//! This crate provides the [`GreedySolver`] implementation of
//! [`ecotrip_core::RouteSolver`]. It targets tens of stops, not
//! thousands: construction is O(n²) and improvement is bounded by a
//! fixed pass cap, trading optimality for predictable latency.

#![forbid(unsafe_code)]

mod solver;

pub use solver::{GreedySolver, GreedySolverConfig};
