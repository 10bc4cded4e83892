//! Carbon accounting for places, legs, and whole trips.
//!
//! Factors are fixed, pre-calibrated constants from the source dataset:
//! transport emissions scale linearly with distance, and each place
//! contributes its activity and visitor factors on top. The eco score
//! blends carbon cost with relevance, satisfaction, and route quality on
//! a 0-10 scale.

use crate::geo::{round1, round2};
use crate::place::Place;
use crate::route::RouteStop;

/// Transport emissions per kilometre for a private car, kg CO2.
pub const TRANSPORT_CARBON_PER_KM: f64 = 0.12;

/// Trip carbon treated as the saturation point when normalising for the
/// eco score; a typical trip lands between 5 and 20 kg.
pub const CARBON_NORMALISATION_KG: f64 = 20.0;

/// Reference trip emissions for the carbon-reduction claim, kg CO2.
pub const BASELINE_TRIP_CARBON_KG: f64 = 15.0;

/// Weight of the activity carbon score within a place's emissions.
const ACTIVITY_CARBON_WEIGHT: f64 = 0.5;

/// Eco-score points awarded for low carbon (40% of the scale).
const ECO_CARBON_POINTS: f64 = 4.0;
/// Eco-score points awarded for tourism relevance (30%).
const ECO_TOURISM_POINTS: f64 = 3.0;
/// Eco-score points awarded for visitor satisfaction (20%).
const ECO_RATING_POINTS: f64 = 2.0;
/// Eco-score points awarded for route efficiency (10%).
const ECO_EFFICIENCY_POINTS: f64 = 1.0;

/// Upper bound of the `Low` emissions band, kg CO2.
const LOW_CARBON_MAX_KG: f64 = 5.0;
/// Upper bound of the `Medium` emissions band, kg CO2.
const MEDIUM_CARBON_MAX_KG: f64 = 12.0;

/// Coarse emissions banding used for theme labels and trip summaries.
///
/// # Examples
/// ```
/// use ecotrip_core::CarbonLevel;
///
/// assert_eq!(CarbonLevel::for_emissions(3.0), CarbonLevel::Low);
/// assert_eq!(CarbonLevel::for_emissions(12.0), CarbonLevel::High);
/// assert_eq!(CarbonLevel::Medium.as_str(), "medium");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CarbonLevel {
    /// Under 5 kg CO2.
    Low,
    /// 5 to under 12 kg CO2.
    Medium,
    /// 12 kg CO2 and above.
    High,
}

impl CarbonLevel {
    /// Band a trip's total emissions.
    pub fn for_emissions(carbon_kg: f64) -> Self {
        if carbon_kg < LOW_CARBON_MAX_KG {
            Self::Low
        } else if carbon_kg < MEDIUM_CARBON_MAX_KG {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Return the band as a lowercase `&str`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for CarbonLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CarbonLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown carbon level '{s}'")),
        }
    }
}

/// Transport emissions for a driven distance, kg CO2 rounded to 2 dp.
///
/// # Examples
/// ```
/// use ecotrip_core::transport_carbon;
///
/// assert_eq!(transport_carbon(10.0), 1.2);
/// assert_eq!(transport_carbon(0.0), 0.0);
/// ```
pub fn transport_carbon(distance_km: f64) -> f64 {
    round2(distance_km * TRANSPORT_CARBON_PER_KM)
}

/// Total emissions attributed to visiting `place`, kg CO2 rounded to 2 dp.
///
/// Combines the transport leg from the previous position with the
/// place's pre-computed activity and visitor factors. Never negative for
/// non-negative inputs.
pub fn place_carbon(place: &Place, distance_from_prev_km: f64) -> f64 {
    let transport = transport_carbon(distance_from_prev_km);
    let activity = place.activity_carbon_score * ACTIVITY_CARBON_WEIGHT;
    let visitor = place.visitor_carbon_factor;
    round2(transport + activity + visitor)
}

/// Total emissions over an ordered route, kg CO2 rounded to 2 dp.
pub fn trip_carbon<'a, I>(legs: I) -> f64
where
    I: IntoIterator<Item = (&'a Place, f64)>,
{
    let total: f64 = legs
        .into_iter()
        .map(|(place, leg_km)| place_carbon(place, leg_km))
        .sum();
    round2(total)
}

/// Sum the per-stop emissions already bound into a route.
pub(crate) fn route_carbon(stops: &[RouteStop]) -> f64 {
    round2(stops.iter().map(|stop| stop.carbon_kg).sum())
}

/// Composite eco-friendliness score on a 0-10 scale, rounded to 1 dp.
///
/// Carbon dominates (4 points), then tourism relevance (3), satisfaction
/// (2), and route quality (1). Inputs outside their documented ranges are
/// absorbed by the final clamp.
///
/// # Examples
/// ```
/// use ecotrip_core::eco_score;
///
/// // Zero-carbon, maximally relevant, five-star, perfectly routed trip.
/// assert_eq!(eco_score(0.0, 1.0, 5.0, 1.0), 10.0);
/// ```
pub fn eco_score(
    total_carbon_kg: f64,
    avg_tourism_score: f64,
    avg_rating: f64,
    route_efficiency: f64,
) -> f64 {
    let normalised_carbon = (total_carbon_kg / CARBON_NORMALISATION_KG).min(1.0);
    let score = (1.0 - normalised_carbon) * ECO_CARBON_POINTS
        + avg_tourism_score * ECO_TOURISM_POINTS
        + (avg_rating / 5.0) * ECO_RATING_POINTS
        + route_efficiency * ECO_EFFICIENCY_POINTS;
    round1(score.clamp(0.0, 10.0))
}

/// Emissions saved versus a baseline trip, as a percentage in `0..=100`
/// rounded to 1 dp.
///
/// A non-positive baseline makes no reduction claim and returns `0.0`.
///
/// # Examples
/// ```
/// use ecotrip_core::{BASELINE_TRIP_CARBON_KG, carbon_reduction_percent};
///
/// assert_eq!(carbon_reduction_percent(15.0, BASELINE_TRIP_CARBON_KG), 0.0);
/// assert_eq!(carbon_reduction_percent(0.0, BASELINE_TRIP_CARBON_KG), 100.0);
/// ```
pub fn carbon_reduction_percent(total_carbon_kg: f64, baseline_carbon_kg: f64) -> f64 {
    if baseline_carbon_kg <= 0.0 {
        return 0.0;
    }
    let reduction = (baseline_carbon_kg - total_carbon_kg) / baseline_carbon_kg * 100.0;
    round1(reduction.clamp(0.0, 100.0))
}
