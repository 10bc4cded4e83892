//! Errors raised while planning a trip.

use thiserror::Error;

/// Failure modes of [`TripPlanner::plan`](crate::TripPlanner::plan).
///
/// Validation failures are recoverable by the caller with a different
/// request; [`PlanError::Internal`] signals a pipeline invariant
/// violation and is not worth retrying with the same snapshot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The requested theme id is not in the theme table.
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
    /// No place name matched the reference query.
    #[error("no place matching '{0}'")]
    UnknownPlace(String),
    /// Nothing survived radius and category/similarity filtering, or the
    /// requested stop count was zero.
    #[error("no places found within {radius_km} km matching the request")]
    NoCandidates {
        /// Radius that produced the empty pool, km.
        radius_km: f64,
    },
    /// The solver returned a route inconsistent with its input.
    #[error("route solver returned {got} stops for {expected} selected places")]
    Internal {
        /// Number of places handed to the solver.
        expected: usize,
        /// Number of stops it returned.
        got: usize,
    },
}

impl PlanError {
    /// Whether the failure is a user-correctable validation error (a
    /// 4xx-equivalent condition) rather than an internal fault.
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_split_matches_variants() {
        assert!(PlanError::UnknownTheme("x".into()).is_validation());
        assert!(PlanError::UnknownPlace("x".into()).is_validation());
        assert!(PlanError::NoCandidates { radius_km: 5.0 }.is_validation());
        assert!(!PlanError::Internal { expected: 3, got: 2 }.is_validation());
    }
}
