#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! End-to-end planner tests over the in-memory fixture catalog.

use std::sync::Arc;

use ecotrip_core::test_support::{SAMPLE_ORIGIN, sample_catalog, sample_themes};
use ecotrip_core::{CarbonLevel, SelectionMode, place_carbon};
use ecotrip_planner::{PlanError, TripPlanner, TripRequest};
use ecotrip_solver_greedy::GreedySolver;
use rstest::{fixture, rstest};

#[fixture]
fn planner() -> TripPlanner<GreedySolver> {
    TripPlanner::new(
        Arc::new(sample_catalog()),
        sample_themes(),
        GreedySolver::new(),
    )
}

fn theme_request(theme: &str, stops: usize, radius_km: f64) -> TripRequest {
    TripRequest {
        origin: SAMPLE_ORIGIN,
        mode: SelectionMode::Theme(theme.into()),
        stops,
        radius_km,
    }
}

#[rstest]
fn theme_trip_is_sequenced_and_summarised(planner: TripPlanner<GreedySolver>) {
    let itinerary = planner
        .plan(&theme_request("naturalist", 3, 30.0))
        .expect("naturalist trip should plan");

    assert_eq!(itinerary.stops.len(), 3);
    for (position, stop) in itinerary.stops.iter().enumerate() {
        assert_eq!(stop.stop_number, position + 1);
    }

    let mut last = 0.0;
    for stop in &itinerary.stops {
        assert!(stop.distance_from_start_km >= last);
        last = stop.distance_from_start_km;
    }
    assert_eq!(itinerary.summary.total_distance_km, last);
    assert_eq!(itinerary.summary.total_stops, 3);
    assert!((0.0..=10.0).contains(&itinerary.summary.eco_score));
    assert!((0.0..=100.0).contains(&itinerary.summary.carbon_reduction_percent));
}

#[rstest]
fn theme_trip_only_selects_matching_categories(planner: TripPlanner<GreedySolver>) {
    let itinerary = planner
        .plan(&theme_request("cafeist", 5, 30.0))
        .expect("cafeist trip should plan");
    for stop in &itinerary.stops {
        assert!(
            ["tea_garden", "farm"].contains(&stop.place.keyword.as_str()),
            "unexpected keyword {}",
            stop.place.keyword
        );
    }
}

#[rstest]
fn empty_keyword_theme_draws_from_the_whole_radius(planner: TripPlanner<GreedySolver>) {
    let itinerary = planner
        .plan(&theme_request("mood", 20, 30.0))
        .expect("mood trip should plan");
    // Everything but the distant outlier qualifies.
    assert_eq!(itinerary.stops.len(), 8);
}

#[rstest]
fn over_requested_stop_count_returns_what_exists(planner: TripPlanner<GreedySolver>) {
    let itinerary = planner
        .plan(&theme_request("cafeist", 20, 30.0))
        .expect("cafeist trip should plan");
    // Only tea-1 and farm-1 carry cafeist keywords.
    assert_eq!(itinerary.stops.len(), 2);
}

#[rstest]
fn per_stop_carbon_matches_the_model(planner: TripPlanner<GreedySolver>) {
    let itinerary = planner
        .plan(&theme_request("naturalist", 4, 30.0))
        .expect("naturalist trip should plan");
    let mut total = 0.0;
    for stop in &itinerary.stops {
        assert_eq!(
            stop.carbon_kg,
            place_carbon(&stop.place, stop.distance_from_prev_km)
        );
        assert!(stop.carbon_kg >= 0.0);
        total += stop.carbon_kg;
    }
    assert!((itinerary.summary.total_carbon_kg - total).abs() < 1e-9);
    // The summary band should be derivable from the reported total.
    let level = CarbonLevel::for_emissions(itinerary.summary.total_carbon_kg);
    assert!(matches!(level, CarbonLevel::Low | CarbonLevel::Medium));
}

#[rstest]
fn similar_trip_excludes_the_reference_place(planner: TripPlanner<GreedySolver>) {
    let request = TripRequest {
        origin: SAMPLE_ORIGIN,
        mode: SelectionMode::SimilarTo("fixture viewpoint-1".into()),
        stops: 8,
        radius_km: 30.0,
    };
    let itinerary = planner.plan(&request).expect("similar trip should plan");
    assert_eq!(itinerary.mode, SelectionMode::SimilarTo("Fixture viewpoint-1".into()));
    assert!(
        itinerary
            .stops
            .iter()
            .all(|stop| stop.place.id != "viewpoint-1")
    );
    assert!(!itinerary.stops.is_empty());
}

#[rstest]
fn unknown_theme_is_a_validation_error(planner: TripPlanner<GreedySolver>) {
    let err = planner
        .plan(&theme_request("spelunking", 3, 30.0))
        .expect_err("unknown theme must fail");
    assert_eq!(err, PlanError::UnknownTheme("spelunking".into()));
    assert!(err.is_validation());
}

#[rstest]
fn unknown_reference_place_is_a_validation_error(planner: TripPlanner<GreedySolver>) {
    let request = TripRequest {
        origin: SAMPLE_ORIGIN,
        mode: SelectionMode::SimilarTo("atlantis".into()),
        stops: 3,
        radius_km: 30.0,
    };
    let err = planner.plan(&request).expect_err("unknown place must fail");
    assert_eq!(err, PlanError::UnknownPlace("atlantis".into()));
}

#[rstest]
#[case(0.1)] // radius excludes everything
fn empty_radius_is_a_validation_error(
    planner: TripPlanner<GreedySolver>,
    #[case] radius_km: f64,
) {
    let err = planner
        .plan(&theme_request("naturalist", 3, radius_km))
        .expect_err("empty radius must fail");
    assert_eq!(err, PlanError::NoCandidates { radius_km });
    assert!(err.is_validation());
}

#[rstest]
fn keyword_mismatch_inside_radius_is_a_validation_error(planner: TripPlanner<GreedySolver>) {
    // Radius only covers the night market and temple; the cafeist
    // keywords match neither.
    let err = planner
        .plan(&theme_request("cafeist", 3, 2.5))
        .expect_err("no matching category must fail");
    assert!(matches!(err, PlanError::NoCandidates { .. }));
}

#[rstest]
fn zero_requested_stops_is_a_validation_error(planner: TripPlanner<GreedySolver>) {
    let err = planner
        .plan(&theme_request("naturalist", 0, 30.0))
        .expect_err("zero stops must fail");
    assert!(matches!(err, PlanError::NoCandidates { .. }));
}

#[rstest]
fn concurrent_requests_share_one_snapshot() {
    let catalog = Arc::new(sample_catalog());
    let planner = Arc::new(TripPlanner::new(
        Arc::clone(&catalog),
        sample_themes(),
        GreedySolver::new(),
    ));

    let handles: Vec<_> = ["naturalist", "cafeist", "mood"]
        .into_iter()
        .map(|theme| {
            let planner = Arc::clone(&planner);
            let request = theme_request(theme, 3, 30.0);
            std::thread::spawn(move || planner.plan(&request))
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("planner thread must not panic");
        assert!(result.is_ok());
    }
}
