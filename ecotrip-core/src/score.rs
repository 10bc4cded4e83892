//! Candidate scoring and selection.
//!
//! Two mutually exclusive modes rank a radius-filtered candidate pool:
//! theme relevance (weighted, min-max normalised features) and
//! reference-place similarity. Both produce scores in `0.0..=1.0` and
//! feed the same top-N selection.

use thiserror::Error;

use crate::place::Place;
use crate::theme::Theme;

/// Weight of an exact category match in the similarity score.
const SIMILARITY_KEYWORD_WEIGHT: f64 = 0.40;
/// Weight of tourism-score closeness in the similarity score.
const SIMILARITY_TOURISM_WEIGHT: f64 = 0.30;
/// Weight of rating closeness in the similarity score.
const SIMILARITY_RATING_WEIGHT: f64 = 0.30;

/// A place under consideration for one request, annotated with its
/// distance from the trip origin and, after ranking, a score.
///
/// Candidate sets are ephemeral: they are recomputed per request and
/// never persisted or shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The underlying dataset record.
    pub place: Place,
    /// Great-circle distance from the trip origin, km.
    pub distance_km: f64,
    /// Composite relevance or similarity score in `0.0..=1.0`;
    /// zero until one of the ranking functions runs.
    pub score: f64,
}

impl Candidate {
    /// Bind a place to a request with its origin distance.
    pub const fn new(place: Place, distance_km: f64) -> Self {
        Self {
            place,
            distance_km,
            score: 0.0,
        }
    }
}

/// Feature weights for theme-relevance scoring.
///
/// The defaults favour tourism relevance and low carbon over popularity
/// and proximity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Weight of the tourism-relevance feature.
    pub tourism: f64,
    /// Weight of the rating feature (rating scaled to `0..=1` by `/5`).
    pub rating: f64,
    /// Weight of the transport-carbon feature (inverted: lower is better).
    pub carbon: f64,
    /// Weight of the popularity feature.
    pub popularity: f64,
    /// Weight of the origin-distance feature (inverted: closer is better).
    pub distance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            tourism: 0.30,
            rating: 0.20,
            carbon: 0.25,
            popularity: 0.15,
            distance: 0.10,
        }
    }
}

/// Errors raised while ranking candidates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The candidate pool was empty after filtering.
    #[error("no places matched the requested criteria")]
    NoCandidates,
}

/// Min-max normalise a feature column to `0.0..=1.0`.
///
/// A degenerate column (all values equal, including a single value)
/// normalises to `0.5` for every row so downstream weighting never
/// divides by zero.
///
/// # Examples
/// ```
/// use ecotrip_core::min_max_normalise;
///
/// assert_eq!(min_max_normalise(&[1.0, 3.0, 2.0]), vec![0.0, 1.0, 0.5]);
/// assert_eq!(min_max_normalise(&[7.0, 7.0]), vec![0.5, 0.5]);
/// ```
pub fn min_max_normalise(values: &[f64]) -> Vec<f64> {
    let Some(min) = values.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max = values.iter().copied().fold(min, f64::max);
    let span = max - min;
    if span == 0.0 {
        return vec![0.5; values.len()];
    }
    values.iter().map(|v| (v - min) / span).collect()
}

/// Clamp a raw score into `0.0..=1.0`, mapping non-finite values to zero.
fn sanitise(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Filter `candidates` by the theme's keywords and assign each survivor a
/// weighted composite score.
///
/// Tourism, popularity, transport carbon, and origin distance are min-max
/// normalised across the surviving pool (carbon and distance inverted so
/// lower raw values score higher); rating is scaled to `0..=1` by
/// dividing by five.
///
/// # Errors
/// [`SelectionError::NoCandidates`] when no candidate survives the
/// keyword filter.
pub fn rank_by_theme(
    candidates: Vec<Candidate>,
    theme: &Theme,
    weights: &ScoreWeights,
) -> Result<Vec<Candidate>, SelectionError> {
    let mut pool: Vec<Candidate> = candidates
        .into_iter()
        .filter(|candidate| theme.matches(&candidate.place.keyword))
        .collect();
    if pool.is_empty() {
        return Err(SelectionError::NoCandidates);
    }

    let tourism: Vec<f64> = pool.iter().map(|c| c.place.tourism_score).collect();
    let popularity: Vec<f64> = pool.iter().map(|c| c.place.popularity_score).collect();
    let carbon: Vec<f64> = pool
        .iter()
        .map(|c| c.place.estimated_transport_carbon_kg)
        .collect();
    let distance: Vec<f64> = pool.iter().map(|c| c.distance_km).collect();

    let tourism = min_max_normalise(&tourism);
    let popularity = min_max_normalise(&popularity);
    let carbon = min_max_normalise(&carbon);
    let distance = min_max_normalise(&distance);

    for (i, candidate) in pool.iter_mut().enumerate() {
        let score = tourism[i] * weights.tourism
            + (candidate.place.rating / 5.0) * weights.rating
            + (1.0 - carbon[i]) * weights.carbon
            + popularity[i] * weights.popularity
            + (1.0 - distance[i]) * weights.distance;
        candidate.score = sanitise(score);
    }
    Ok(pool)
}

/// Score each candidate by similarity to `reference`.
///
/// Similarity blends an exact category match (0.40) with tourism-score
/// closeness (0.30) and rating closeness (0.30). The caller is expected
/// to have removed the reference place from the pool already; this
/// function additionally skips any candidate sharing the reference id as
/// a guard.
///
/// # Errors
/// [`SelectionError::NoCandidates`] when the pool is empty.
pub fn rank_by_similarity(
    candidates: Vec<Candidate>,
    reference: &Place,
) -> Result<Vec<Candidate>, SelectionError> {
    let mut pool: Vec<Candidate> = candidates
        .into_iter()
        .filter(|candidate| candidate.place.id != reference.id)
        .collect();
    if pool.is_empty() {
        return Err(SelectionError::NoCandidates);
    }

    for candidate in &mut pool {
        let keyword_match = if candidate.place.keyword == reference.keyword {
            1.0
        } else {
            0.0
        };
        let tourism_closeness =
            1.0 - (candidate.place.tourism_score - reference.tourism_score).abs();
        let rating_closeness = 1.0 - (candidate.place.rating - reference.rating).abs() / 5.0;
        let score = keyword_match * SIMILARITY_KEYWORD_WEIGHT
            + tourism_closeness * SIMILARITY_TOURISM_WEIGHT
            + rating_closeness * SIMILARITY_RATING_WEIGHT;
        candidate.score = sanitise(score);
    }
    Ok(pool)
}

/// Keep the `limit` best-scoring candidates, preserving insertion order
/// among ties (stable sort), and return them best-first.
///
/// Requesting more than are available returns them all; no error.
pub fn select_top(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates.truncate(limit);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carbon::CarbonLevel;
    use geo::Coord;
    use rstest::rstest;

    fn candidate(id: &str, keyword: &str, tourism: f64, rating: f64, distance: f64) -> Candidate {
        let place = Place::new(id, id, keyword, Coord { x: 99.8, y: 19.9 })
            .with_rating(rating, 100)
            .with_scores(tourism, 10.0);
        Candidate::new(place, distance)
    }

    fn pool() -> Vec<Candidate> {
        vec![
            candidate("a", "viewpoint", 0.9, 4.5, 5.0),
            candidate("b", "waterfall", 0.6, 4.0, 10.0),
            candidate("c", "night_market", 0.3, 3.5, 2.0),
        ]
    }

    #[rstest]
    fn constant_column_normalises_to_half() {
        assert_eq!(min_max_normalise(&[4.2, 4.2, 4.2]), vec![0.5, 0.5, 0.5]);
        assert_eq!(min_max_normalise(&[1.0]), vec![0.5]);
        assert!(min_max_normalise(&[]).is_empty());
    }

    #[rstest]
    fn theme_keywords_narrow_the_pool() {
        let theme = Theme::new("naturalist", "Naturalist", CarbonLevel::Low)
            .with_keywords(["viewpoint", "waterfall"]);
        let ranked = rank_by_theme(pool(), &theme, &ScoreWeights::default());
        let ids: Vec<String> = ranked
            .into_iter()
            .flatten()
            .map(|c| c.place.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[rstest]
    fn empty_keyword_theme_keeps_every_candidate() {
        let theme = Theme::new("mood", "Mood", CarbonLevel::Medium);
        let ranked = rank_by_theme(pool(), &theme, &ScoreWeights::default());
        assert!(ranked.is_ok_and(|pool| pool.len() == 3));
    }

    #[rstest]
    fn unmatched_keywords_are_an_error() {
        let theme =
            Theme::new("cafeist", "Cafe'ist", CarbonLevel::Low).with_keywords(["tea_garden"]);
        let ranked = rank_by_theme(pool(), &theme, &ScoreWeights::default());
        assert_eq!(ranked, Err(SelectionError::NoCandidates));
    }

    #[rstest]
    fn theme_scores_stay_in_unit_range() {
        let theme = Theme::new("mood", "Mood", CarbonLevel::Medium);
        let ranked = rank_by_theme(pool(), &theme, &ScoreWeights::default());
        for candidate in ranked.into_iter().flatten() {
            assert!((0.0..=1.0).contains(&candidate.score), "{candidate:?}");
        }
    }

    #[rstest]
    fn similarity_prefers_matching_category() {
        let reference = candidate("ref", "viewpoint", 0.9, 4.5, 0.0).place;
        let ranked = rank_by_similarity(pool(), &reference);
        let best = ranked.into_iter().flatten().reduce(|best, c| {
            if c.score > best.score { c } else { best }
        });
        assert!(best.is_some_and(|c| c.place.id == "a"));
    }

    #[rstest]
    fn similarity_excludes_the_reference_itself() {
        let mut with_reference = pool();
        let reference = candidate("a", "viewpoint", 0.9, 4.5, 5.0).place;
        with_reference.push(Candidate::new(reference.clone(), 5.0));
        let ranked = rank_by_similarity(with_reference, &reference);
        let ids: Vec<String> = ranked
            .into_iter()
            .flatten()
            .map(|c| c.place.id)
            .collect();
        assert!(!ids.contains(&"a".to_owned()));
        assert_eq!(ids.len(), 2);
    }

    #[rstest]
    #[case(2, 2)]
    #[case(20, 3)] // requesting more than available returns them all
    #[case(0, 0)]
    fn select_top_truncates(#[case] limit: usize, #[case] expected: usize) {
        let mut candidates = pool();
        for (i, c) in candidates.iter_mut().enumerate() {
            c.score = 0.1 * (i as f64);
        }
        assert_eq!(select_top(candidates, limit).len(), expected);
    }

    #[rstest]
    fn select_top_is_stable_for_tied_scores() {
        let mut candidates = pool();
        for c in &mut candidates {
            c.score = 0.5;
        }
        let ids: Vec<String> = select_top(candidates, 3)
            .into_iter()
            .map(|c| c.place.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
