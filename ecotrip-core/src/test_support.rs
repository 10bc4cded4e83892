//! Test-only fixtures shared by unit, integration, and property tests.
//!
//! The sample catalog models a handful of places around Chiang Rai town
//! with kilometre offsets chosen so distances round to friendly values.

use geo::Coord;

use crate::carbon::CarbonLevel;
use crate::catalog::PlaceCatalog;
use crate::geo::EARTH_RADIUS_KM;
use crate::place::Place;
use crate::theme::{Theme, ThemeCatalog};

/// Trip origin used by the fixtures: Chiang Rai town centre.
pub const SAMPLE_ORIGIN: Coord<f64> = Coord {
    x: 99.8406,
    y: 19.9105,
};

/// Kilometres per degree of latitude on the spherical Earth model.
pub fn km_per_degree() -> f64 {
    EARTH_RADIUS_KM * std::f64::consts::PI / 180.0
}

/// A coordinate `north_km`/`east_km` away from `origin`.
///
/// Small-offset approximation; accurate well within the rounding
/// precision at fixture scales (tens of kilometres).
pub fn offset(origin: Coord<f64>, north_km: f64, east_km: f64) -> Coord<f64> {
    let lat = origin.y + north_km / km_per_degree();
    let lng = origin.x + east_km / (km_per_degree() * origin.y.to_radians().cos());
    Coord { x: lng, y: lat }
}

/// A minimal place at a kilometre offset from [`SAMPLE_ORIGIN`].
pub fn place_at(id: &str, keyword: &str, north_km: f64, east_km: f64) -> Place {
    Place::new(
        id,
        format!("Fixture {id}"),
        keyword,
        offset(SAMPLE_ORIGIN, north_km, east_km),
    )
}

/// Eight places around the sample origin plus one far outlier.
///
/// # Panics
/// Panics if the fixture rows fail catalog validation; that indicates a
/// bug in the fixtures themselves.
pub fn sample_catalog() -> PlaceCatalog {
    let places = vec![
        place_at("viewpoint-1", "viewpoint", 5.0, 0.0)
            .with_rating(4.6, 900)
            .with_scores(0.90, 80.0)
            .with_carbon(1.2, 0.6, 0.2),
        place_at("waterfall-1", "waterfall", -3.0, 4.0)
            .with_rating(4.4, 640)
            .with_scores(0.85, 60.0)
            .with_carbon(1.8, 0.4, 0.1),
        place_at("tea-1", "tea_garden", 2.0, -6.0)
            .with_rating(4.2, 310)
            .with_scores(0.70, 45.0)
            .with_carbon(0.9, 0.3, 0.1),
        place_at("cave-1", "cave", 9.0, 2.0)
            .with_rating(4.0, 150)
            .with_scores(0.65, 20.0)
            .with_carbon(2.2, 0.5, 0.2),
        place_at("farm-1", "farm", -6.0, -2.0)
            .with_rating(4.1, 220)
            .with_scores(0.60, 35.0)
            .with_carbon(1.1, 0.7, 0.3),
        place_at("craft-1", "craft_village", 1.0, 8.0)
            .with_rating(4.3, 410)
            .with_scores(0.75, 50.0)
            .with_carbon(1.4, 0.2, 0.1),
        place_at("market-1", "night_market", 0.5, -1.0)
            .with_rating(4.5, 2100)
            .with_scores(0.55, 95.0)
            .with_carbon(0.5, 0.8, 0.4),
        place_at("temple-1", "temple", -1.5, 1.5)
            .with_rating(4.8, 3300)
            .with_scores(0.95, 99.0)
            .with_carbon(0.6, 0.3, 0.1),
        // Beyond any fixture radius; exercises the radius filter.
        place_at("distant-1", "viewpoint", 95.0, 10.0)
            .with_rating(4.7, 1200)
            .with_scores(0.92, 88.0)
            .with_carbon(9.5, 0.6, 0.2),
    ];
    PlaceCatalog::new(places).expect("fixture catalog must validate")
}

/// Theme table mirroring the shape of the production configuration.
///
/// # Panics
/// Panics if the fixture themes fail validation; that indicates a bug in
/// the fixtures themselves.
pub fn sample_themes() -> ThemeCatalog {
    let themes = vec![
        Theme::new("naturalist", "Naturalist", CarbonLevel::Low).with_keywords([
            "viewpoint",
            "waterfall",
            "cave",
            "tea_garden",
        ]),
        Theme::new("cafeist", "Cafe'ist", CarbonLevel::Low).with_keywords(["tea_garden", "farm"]),
        Theme::new("conservative", "Conservative", CarbonLevel::Low)
            .with_keywords(["craft_village", "temple"]),
        Theme::new("mood", "Based on My Mood", CarbonLevel::Medium),
    ];
    ThemeCatalog::new(themes).expect("fixture themes must validate")
}
