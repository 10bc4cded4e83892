//! The immutable dataset snapshot.
//!
//! A [`PlaceCatalog`] is constructed once by the host from the external
//! loader's output and shared by reference (typically behind an `Arc`)
//! across concurrent planning requests. It validates coordinates and
//! numeric finiteness up front so the rest of the pipeline never sees a
//! malformed row, keeps an id index for O(1) lookup, and answers the
//! radius queries that open every request.

use std::collections::HashMap;

use geo::Coord;
use thiserror::Error;

use crate::geo::haversine_distance;
use crate::place::Place;
use crate::score::Candidate;

/// Errors raised while constructing a [`PlaceCatalog`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Two rows shared an identifier.
    #[error("duplicate place id '{id}'")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
    /// A row carried coordinates outside ±90 latitude / ±180 longitude.
    #[error("place '{id}' has out-of-range coordinates ({longitude}, {latitude})")]
    InvalidCoordinates {
        /// Identifier of the offending row.
        id: String,
        /// Longitude as loaded.
        longitude: f64,
        /// Latitude as loaded.
        latitude: f64,
    },
    /// A numeric feature was NaN or infinite.
    #[error("place '{id}' has a non-finite value in '{feature}'")]
    NonFiniteFeature {
        /// Identifier of the offending row.
        id: String,
        /// Name of the malformed feature column.
        feature: &'static str,
    },
}

/// Read-only snapshot of every place known to the engine.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use ecotrip_core::{Place, PlaceCatalog};
///
/// let catalog = PlaceCatalog::new(vec![
///     Place::new("p1", "Singha Park", "farm", Coord { x: 99.78, y: 19.86 }),
/// ])?;
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.get("p1").is_some());
/// # Ok::<(), ecotrip_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaceCatalog {
    places: Vec<Place>,
    by_id: HashMap<String, usize>,
}

impl PlaceCatalog {
    /// Validate and index the loaded places, preserving dataset order.
    pub fn new(places: Vec<Place>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(places.len());
        for (index, place) in places.iter().enumerate() {
            validate_row(place)?;
            if by_id.insert(place.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: place.id.clone(),
                });
            }
        }
        Ok(Self { places, by_id })
    }

    /// Number of places in the snapshot.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// All places in dataset order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Look up a place by identifier.
    pub fn get(&self, id: &str) -> Option<&Place> {
        self.by_id.get(id).map(|&index| &self.places[index])
    }

    /// Case-insensitive substring search over place names; the first
    /// match in dataset order wins.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use ecotrip_core::{Place, PlaceCatalog};
    ///
    /// let catalog = PlaceCatalog::new(vec![
    ///     Place::new("p1", "Khun Korn Waterfall", "waterfall", Coord { x: 99.6, y: 19.85 }),
    /// ])?;
    /// let hit = catalog.find_by_name("khun korn");
    /// assert!(hit.is_some_and(|p| p.id == "p1"));
    /// # Ok::<(), ecotrip_core::CatalogError>(())
    /// ```
    pub fn find_by_name(&self, query: &str) -> Option<&Place> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.places
            .iter()
            .find(|place| place.name.to_lowercase().contains(&needle))
    }

    /// All places within `radius_km` of `origin` (boundary inclusive),
    /// each annotated with its origin distance, in dataset order.
    pub fn within_radius(&self, origin: Coord<f64>, radius_km: f64) -> Vec<Candidate> {
        self.places
            .iter()
            .filter_map(|place| {
                let distance = haversine_distance(origin, place.location);
                (distance <= radius_km).then(|| Candidate::new(place.clone(), distance))
            })
            .collect()
    }
}

fn validate_row(place: &Place) -> Result<(), CatalogError> {
    let Coord { x: lng, y: lat } = place.location;
    if !lng.is_finite() || !lat.is_finite() || lat.abs() > 90.0 || lng.abs() > 180.0 {
        return Err(CatalogError::InvalidCoordinates {
            id: place.id.clone(),
            longitude: lng,
            latitude: lat,
        });
    }
    let features: [(&'static str, f64); 6] = [
        ("rating", place.rating),
        ("tourism_score", place.tourism_score),
        ("popularity_score", place.popularity_score),
        (
            "estimated_transport_carbon_kg",
            place.estimated_transport_carbon_kg,
        ),
        ("activity_carbon_score", place.activity_carbon_score),
        ("visitor_carbon_factor", place.visitor_carbon_factor),
    ];
    for (feature, value) in features {
        if !value.is_finite() {
            return Err(CatalogError::NonFiniteFeature {
                id: place.id.clone(),
                feature,
            });
        }
    }
    Ok(())
}
