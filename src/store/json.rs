use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{InteractionEvent, PreferenceProfile};
use crate::store::{PreferenceStore, StoreKey};

/// Directory-backed JSON key-value store
///
/// One file per `StoreKey`. Writes are whole-record replacements with no
/// cross-process coordination: concurrent writers are last-write-wins.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Creates a store rooted at the given data directory
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &StoreKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    /// Reads a record, treating absent or corrupt data as "no data"
    pub fn load<T: DeserializeOwned>(&self, key: &StoreKey) -> AppResult<Option<T>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(
                    key = %key,
                    error = %e,
                    "Corrupt record in local store, falling back to defaults"
                );
                Ok(None)
            }
        }
    }

    /// Writes a record, creating the data directory if needed
    pub fn save<T: Serialize>(&self, key: &StoreKey, value: &T) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;

        let json = serde_json::to_string(value)
            .map_err(|e| AppError::Storage(format!("Serialization error for {}: {}", key, e)))?;
        fs::write(self.path_for(key), json)?;

        tracing::debug!(key = %key, "Record persisted");
        Ok(())
    }

    /// Removes a record if it exists
    pub fn remove(&self, key: &StoreKey) -> AppResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Data directory this store writes into
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PreferenceStore for JsonStore {
    fn load_profile(&self) -> AppResult<PreferenceProfile> {
        Ok(self
            .load::<PreferenceProfile>(&StoreKey::Preferences)?
            .unwrap_or_default())
    }

    fn save_profile(&self, profile: &PreferenceProfile) -> AppResult<()> {
        self.save(&StoreKey::Preferences, profile)
    }

    fn load_interactions(&self) -> AppResult<Vec<InteractionEvent>> {
        Ok(self
            .load::<Vec<InteractionEvent>>(&StoreKey::Interactions)?
            .unwrap_or_default())
    }

    fn save_interactions(&self, events: &[InteractionEvent]) -> AppResult<()> {
        self.save(&StoreKey::Interactions, &events)
    }

    fn reset(&self) -> AppResult<()> {
        self.remove(&StoreKey::Preferences)?;
        self.remove(&StoreKey::Interactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InteractionKind;

    fn test_store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_load_missing_record_returns_none() {
        let (_dir, store) = test_store();
        let loaded: Option<PreferenceProfile> = store.load(&StoreKey::Preferences).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_dir, store) = test_store();

        let mut profile = PreferenceProfile::new();
        profile.genre_weights.insert(28, 3.0);
        store.save(&StoreKey::Preferences, &profile).unwrap();

        let loaded: Option<PreferenceProfile> = store.load(&StoreKey::Preferences).unwrap();
        assert_eq!(loaded, Some(profile));
    }

    #[test]
    fn test_corrupt_record_falls_back_to_none() {
        let (dir, store) = test_store();
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join("preferences.json"), "{not json").unwrap();

        let loaded: Option<PreferenceProfile> = store.load(&StoreKey::Preferences).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_save_creates_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let store = JsonStore::new(&nested);

        store.save(&StoreKey::Settings, &42u32).unwrap();
        assert!(nested.join("settings.json").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, store) = test_store();
        store.remove(&StoreKey::History).unwrap();
        store.save(&StoreKey::History, &vec![1, 2, 3]).unwrap();
        store.remove(&StoreKey::History).unwrap();
        store.remove(&StoreKey::History).unwrap();

        let loaded: Option<Vec<i32>> = store.load(&StoreKey::History).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_preference_store_defaults_when_empty() {
        let (_dir, store) = test_store();
        assert!(store.load_profile().unwrap().is_empty());
        assert!(store.load_interactions().unwrap().is_empty());
    }

    #[test]
    fn test_preference_store_reset() {
        let (_dir, store) = test_store();

        let mut profile = PreferenceProfile::new();
        profile.language_weights.insert("en".to_string(), 1.5);
        store.save_profile(&profile).unwrap();
        store
            .save_interactions(&[InteractionEvent {
                item_id: 1,
                kind: InteractionKind::Watch,
                timestamp: 0,
            }])
            .unwrap();

        store.reset().unwrap();
        assert!(store.load_profile().unwrap().is_empty());
        assert!(store.load_interactions().unwrap().is_empty());
    }
}
