//! Interaction recorder.
//!
//! The only writer of the preference profile. Every user action that should
//! influence future ranking flows through here: the item's attributes are
//! folded into the per-category weights, and the action is appended to a
//! capped audit log. The log is never read back into scoring.

use chrono::Utc;

use crate::error::AppResult;
use crate::models::{decade_label, InteractionEvent, InteractionKind, MediaItem, RatingBucket};
use crate::store::PreferenceStore;

/// Audit log cap; oldest entries are dropped first
const INTERACTION_LOG_CAP: usize = 1000;

/// Records an interaction with the default base weight of 1.0
pub fn record_interaction(
    store: &dyn PreferenceStore,
    item: &MediaItem,
    kind: InteractionKind,
) -> AppResult<()> {
    record_interaction_weighted(store, item, kind, 1.0)
}

/// Records an interaction, scaling its effect by `base_weight`
///
/// Absent item attributes contribute nothing and are never an error.
/// Repeated calls with the same item accumulate: repeated exposure increases
/// confidence.
pub fn record_interaction_weighted(
    store: &dyn PreferenceStore,
    item: &MediaItem,
    kind: InteractionKind,
    base_weight: f64,
) -> AppResult<()> {
    let effective_weight = base_weight * kind.multiplier();
    let mut profile = store.load_profile()?;

    for genre_id in &item.genre_ids {
        *profile.genre_weights.entry(*genre_id).or_insert(0.0) += effective_weight;
    }

    if let Some(language) = &item.original_language {
        *profile
            .language_weights
            .entry(language.clone())
            .or_insert(0.0) += effective_weight;
    }

    if let Some(decade) = item.air_date().and_then(decade_label) {
        *profile.decade_weights.entry(decade).or_insert(0.0) += effective_weight;
    }

    if let Some(rating) = item.vote_average {
        let bucket = RatingBucket::from_vote_average(rating);
        *profile.rating_weights.entry(bucket).or_insert(0.0) += effective_weight;
    }

    store.save_profile(&profile)?;

    let mut events = store.load_interactions()?;
    events.push(InteractionEvent {
        item_id: item.id,
        kind,
        timestamp: Utc::now().timestamp_millis(),
    });
    if events.len() > INTERACTION_LOG_CAP {
        let excess = events.len() - INTERACTION_LOG_CAP;
        events.drain(..excess);
    }
    store.save_interactions(&events)?;

    tracing::debug!(
        item_id = item.id,
        kind = ?kind,
        weight = effective_weight,
        "Interaction recorded"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn action_movie() -> MediaItem {
        MediaItem {
            id: 550,
            genre_ids: vec![28],
            original_language: Some("en".to_string()),
            release_date: Some("1999-10-15".to_string()),
            vote_average: Some(8.4),
            ..MediaItem::default()
        }
    }

    #[test]
    fn test_watch_accumulates_genre_weight() {
        let store = MemoryStore::new();
        let item = MediaItem {
            id: 1,
            genre_ids: vec![28],
            ..MediaItem::default()
        };

        record_interaction(&store, &item, InteractionKind::Watch).unwrap();
        assert_eq!(store.load_profile().unwrap().genre_weight(28), 3.0);

        record_interaction(&store, &item, InteractionKind::Like).unwrap();
        assert_eq!(store.load_profile().unwrap().genre_weight(28), 5.5);
    }

    #[test]
    fn test_all_categories_updated() {
        let store = MemoryStore::new();
        record_interaction(&store, &action_movie(), InteractionKind::Watch).unwrap();

        let profile = store.load_profile().unwrap();
        assert_eq!(profile.genre_weight(28), 3.0);
        assert_eq!(profile.language_weight("en"), 3.0);
        assert_eq!(profile.decade_weight("1990s"), 3.0);
        assert_eq!(profile.rating_weight(RatingBucket::Excellent), 3.0);
    }

    #[test]
    fn test_skip_pushes_weights_negative() {
        let store = MemoryStore::new();
        let item = MediaItem {
            id: 2,
            genre_ids: vec![27],
            ..MediaItem::default()
        };

        record_interaction(&store, &item, InteractionKind::Skip).unwrap();
        record_interaction(&store, &item, InteractionKind::Skip).unwrap();
        assert_eq!(store.load_profile().unwrap().genre_weight(27), -1.0);
    }

    #[test]
    fn test_base_weight_scales_effect() {
        let store = MemoryStore::new();
        let item = MediaItem {
            id: 3,
            genre_ids: vec![18],
            ..MediaItem::default()
        };

        record_interaction_weighted(&store, &item, InteractionKind::Search, 2.0).unwrap();
        assert_eq!(store.load_profile().unwrap().genre_weight(18), 3.0);
    }

    #[test]
    fn test_bare_item_only_logs_event() {
        let store = MemoryStore::new();
        let item = MediaItem {
            id: 4,
            ..MediaItem::default()
        };

        record_interaction(&store, &item, InteractionKind::Watch).unwrap();
        assert!(store.load_profile().unwrap().is_empty());

        let events = store.load_interactions().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].item_id, 4);
        assert_eq!(events[0].kind, InteractionKind::Watch);
    }

    #[test]
    fn test_multiple_genres_each_accumulate() {
        let store = MemoryStore::new();
        let item = MediaItem {
            id: 5,
            genre_ids: vec![28, 878, 12],
            ..MediaItem::default()
        };

        record_interaction(&store, &item, InteractionKind::Like).unwrap();
        let profile = store.load_profile().unwrap();
        assert_eq!(profile.genre_weight(28), 2.5);
        assert_eq!(profile.genre_weight(878), 2.5);
        assert_eq!(profile.genre_weight(12), 2.5);
    }

    #[test]
    fn test_interaction_log_capped_fifo() {
        let store = MemoryStore::new();

        // Seed the log just below the cap with distinguishable ids
        let mut events = Vec::new();
        for i in 0..INTERACTION_LOG_CAP {
            events.push(InteractionEvent {
                item_id: i as i64,
                kind: InteractionKind::Search,
                timestamp: i as i64,
            });
        }
        store.save_interactions(&events).unwrap();

        let item = MediaItem {
            id: 9999,
            ..MediaItem::default()
        };
        record_interaction(&store, &item, InteractionKind::Watch).unwrap();

        let log = store.load_interactions().unwrap();
        assert_eq!(log.len(), INTERACTION_LOG_CAP);
        // Oldest entry (id 0) dropped, newest appended at the end
        assert_eq!(log[0].item_id, 1);
        assert_eq!(log[log.len() - 1].item_id, 9999);
    }
}
