//! Relevance ordering for candidate lists.

use std::cmp::Ordering;

use crate::error::AppResult;
use crate::models::{MediaItem, PreferenceProfile, RecommendationScore};
use crate::services::scorer;
use crate::store::PreferenceStore;

/// A candidate with its computed relevance score attached
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem {
    pub item: MediaItem,
    pub recommendation: RecommendationScore,
}

/// Scores every candidate and sorts descending by score
///
/// The sort is stable: candidates with equal scores keep their input order,
/// so identically weighted items never flicker between runs. No filtering,
/// pagination, or deduplication happens here.
pub fn rank(profile: &PreferenceProfile, candidates: Vec<MediaItem>) -> Vec<RankedItem> {
    let mut ranked: Vec<RankedItem> = candidates
        .into_iter()
        .map(|item| RankedItem {
            recommendation: scorer::score(profile, &item),
            item,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.recommendation
            .score
            .partial_cmp(&a.recommendation.score)
            .unwrap_or(Ordering::Equal)
    });

    ranked
}

/// Loads the current profile from the store and ranks against it
pub fn rank_with_store(
    store: &dyn PreferenceStore,
    candidates: Vec<MediaItem>,
) -> AppResult<Vec<RankedItem>> {
    let profile = store.load_profile()?;
    Ok(rank(&profile, candidates))
}
