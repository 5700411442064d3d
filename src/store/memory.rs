use std::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::models::{InteractionEvent, PreferenceProfile};
use crate::store::PreferenceStore;

/// In-memory preference store, primarily for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    profile: PreferenceProfile,
    interactions: Vec<InteractionEvent>,
}

impl MemoryStore {
    /// Creates an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| AppError::Storage("Preference store lock poisoned".to_string()))
    }
}

impl PreferenceStore for MemoryStore {
    fn load_profile(&self) -> AppResult<PreferenceProfile> {
        Ok(self.lock()?.profile.clone())
    }

    fn save_profile(&self, profile: &PreferenceProfile) -> AppResult<()> {
        self.lock()?.profile = profile.clone();
        Ok(())
    }

    fn load_interactions(&self) -> AppResult<Vec<InteractionEvent>> {
        Ok(self.lock()?.interactions.clone())
    }

    fn save_interactions(&self, events: &[InteractionEvent]) -> AppResult<()> {
        self.lock()?.interactions = events.to_vec();
        Ok(())
    }

    fn reset(&self) -> AppResult<()> {
        let mut inner = self.lock()?;
        inner.profile = PreferenceProfile::new();
        inner.interactions.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InteractionKind;

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.load_profile().unwrap().is_empty());
        assert!(store.load_interactions().unwrap().is_empty());
    }

    #[test]
    fn test_profile_round_trip() {
        let store = MemoryStore::new();
        let mut profile = PreferenceProfile::new();
        profile.genre_weights.insert(18, 2.5);

        store.save_profile(&profile).unwrap();
        assert_eq!(store.load_profile().unwrap(), profile);
    }

    #[test]
    fn test_reset_clears_everything() {
        let store = MemoryStore::new();
        let mut profile = PreferenceProfile::new();
        profile.genre_weights.insert(18, 2.5);
        store.save_profile(&profile).unwrap();
        store
            .save_interactions(&[InteractionEvent {
                item_id: 7,
                kind: InteractionKind::Like,
                timestamp: 1,
            }])
            .unwrap();

        store.reset().unwrap();
        assert!(store.load_profile().unwrap().is_empty());
        assert!(store.load_interactions().unwrap().is_empty());
    }
}
