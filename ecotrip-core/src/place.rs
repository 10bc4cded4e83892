//! The `Place` dataset record.
//!
//! A [`Place`] is one row of the external dataset, read-only to the
//! engine. The loader guarantees numeric fields are present (defaulting
//! to zero) and text fields are non-null (defaulting to empty); the
//! catalog re-checks coordinates and finiteness at construction.

use geo::Coord;

/// A geographic point of interest eligible for an itinerary.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use ecotrip_core::Place;
///
/// let place = Place::new("p1", "Huai Mae Sai Waterfall", "waterfall",
///     Coord { x: 99.72, y: 19.95 })
///     .with_rating(4.6, 820)
///     .with_scores(0.85, 70.0);
/// assert_eq!(place.keyword, "waterfall");
/// assert_eq!(place.rating, 4.6);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Unique identifier within the dataset.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category keyword used by theme filtering and similarity matching.
    pub keyword: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Street address, empty when unknown.
    pub address: String,
    /// Visitor rating in `0.0..=5.0`.
    pub rating: f64,
    /// Number of ratings behind [`rating`](Self::rating).
    pub user_ratings_total: u32,
    /// Tourism-relevance score in `0.0..=1.0`.
    pub tourism_score: f64,
    /// Relative popularity; compared only against other places.
    pub popularity_score: f64,
    /// Pre-computed transport carbon baseline for reaching the place, kg CO2.
    pub estimated_transport_carbon_kg: f64,
    /// Pre-computed activity carbon score for the visit itself.
    pub activity_carbon_score: f64,
    /// Pre-computed per-visitor carbon factor, kg CO2.
    pub visitor_carbon_factor: f64,
    /// Contact phone number, if published.
    pub phone: Option<String>,
    /// Website URL, if published.
    pub website: Option<String>,
    /// Photo references, up to three in the source dataset.
    pub photos: Vec<String>,
    /// Short review digest, if available.
    pub review_summary: Option<String>,
}

impl Place {
    /// Construct a place with the identity fields set and every numeric
    /// feature defaulted to zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        keyword: impl Into<String>,
        location: Coord<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            keyword: keyword.into(),
            location,
            address: String::new(),
            rating: 0.0,
            user_ratings_total: 0,
            tourism_score: 0.0,
            popularity_score: 0.0,
            estimated_transport_carbon_kg: 0.0,
            activity_carbon_score: 0.0,
            visitor_carbon_factor: 0.0,
            phone: None,
            website: None,
            photos: Vec::new(),
            review_summary: None,
        }
    }

    /// Set the visitor rating and its sample size.
    #[must_use]
    pub fn with_rating(mut self, rating: f64, user_ratings_total: u32) -> Self {
        self.rating = rating;
        self.user_ratings_total = user_ratings_total;
        self
    }

    /// Set the tourism-relevance and popularity scores.
    #[must_use]
    pub fn with_scores(mut self, tourism_score: f64, popularity_score: f64) -> Self {
        self.tourism_score = tourism_score;
        self.popularity_score = popularity_score;
        self
    }

    /// Set the pre-computed carbon factors.
    #[must_use]
    pub fn with_carbon(
        mut self,
        estimated_transport_carbon_kg: f64,
        activity_carbon_score: f64,
        visitor_carbon_factor: f64,
    ) -> Self {
        self.estimated_transport_carbon_kg = estimated_transport_carbon_kg;
        self.activity_carbon_score = activity_carbon_score;
        self.visitor_carbon_factor = visitor_carbon_factor;
        self
    }

    /// Set the contact fields.
    #[must_use]
    pub fn with_contact(mut self, phone: Option<String>, website: Option<String>) -> Self {
        self.phone = phone;
        self.website = website;
        self
    }

    /// Set the photo references.
    #[must_use]
    pub fn with_photos(mut self, photos: Vec<String>) -> Self {
        self.photos = photos;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_default_to_zero() {
        let place = Place::new("p1", "Wat Rong Khun", "temple", Coord { x: 99.76, y: 19.82 });
        assert_eq!(place.rating, 0.0);
        assert_eq!(place.tourism_score, 0.0);
        assert_eq!(place.visitor_carbon_factor, 0.0);
        assert!(place.photos.is_empty());
        assert!(place.phone.is_none());
    }

    #[test]
    fn builders_set_feature_groups() {
        let place = Place::new("p2", "Doi Tung", "viewpoint", Coord { x: 99.8, y: 20.3 })
            .with_rating(4.4, 1200)
            .with_carbon(2.5, 0.8, 0.3)
            .with_contact(Some("+66 53 000 000".into()), None);
        assert_eq!(place.user_ratings_total, 1200);
        assert_eq!(place.estimated_transport_carbon_kg, 2.5);
        assert!(place.website.is_none());
        assert!(place.phone.is_some());
    }
}
