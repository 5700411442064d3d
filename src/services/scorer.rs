//! Preference-weighted relevance scoring.
//!
//! Computes a weighted sum over the item's attributes against the stored
//! preference profile. Scores are unnormalized; they are only meaningful
//! relative to each other within one ranking pass.

use crate::models::{
    decade_label, genre_name, MediaItem, PreferenceProfile, RatingBucket, RecommendationScore,
};

const GENRE_FACTOR: f64 = 0.40;
const LANGUAGE_FACTOR: f64 = 0.20;
const DECADE_FACTOR: f64 = 0.15;
const RATING_FACTOR: f64 = 0.15;
const POPULARITY_FACTOR: f64 = 0.10;

/// Maximum number of justification strings attached to a score
const MAX_REASONS: usize = 3;

/// Scores one item against the profile
///
/// Negative category weights subtract from the total, so a skip-dominated
/// profile can rank an item below zero. Reasons are emitted only for
/// strictly positive weights, in fixed category order (genre, language,
/// decade, rating); popularity is a tie-break signal and never produces a
/// reason. An item with no usable attributes scores 0 with no reasons.
pub fn score(profile: &PreferenceProfile, item: &MediaItem) -> RecommendationScore {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    for genre_id in &item.genre_ids {
        let weight = profile.genre_weight(*genre_id);
        score += weight * GENRE_FACTOR;
        if weight > 0.0 {
            reasons.push(format!("You like {} content", genre_name(*genre_id)));
        }
    }

    if let Some(language) = &item.original_language {
        let weight = profile.language_weight(language);
        score += weight * LANGUAGE_FACTOR;
        if weight > 0.0 {
            reasons.push(format!("You enjoy {} content", language.to_uppercase()));
        }
    }

    if let Some(decade) = item.air_date().and_then(decade_label) {
        let weight = profile.decade_weight(&decade);
        score += weight * DECADE_FACTOR;
        if weight > 0.0 {
            reasons.push(format!("You like {} content", decade));
        }
    }

    if let Some(rating) = item.vote_average {
        let bucket = RatingBucket::from_vote_average(rating);
        let weight = profile.rating_weight(bucket);
        score += weight * RATING_FACTOR;
        if weight > 0.0 {
            reasons.push(format!("You prefer {} rated content", bucket));
        }
    }

    // ln is undefined at or below zero
    if let Some(popularity) = item.popularity {
        if popularity > 0.0 {
            score += popularity.ln() * POPULARITY_FACTOR;
        }
    }

    reasons.truncate(MAX_REASONS);

    RecommendationScore {
        item_id: item.id,
        score,
        reasons,
    }
}
