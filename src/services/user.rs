//! Locally persisted user state: session, watch history, favorites, settings.
//!
//! All of it is plain JSON CRUD against the local store; absent or corrupt
//! records degrade to defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::{MediaItem, MediaKind};
use crate::store::{JsonStore, StoreKey};

/// Watch history cap; older entries fall off the end
const HISTORY_CAP: usize = 50;

/// A locally signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub name: String,
    pub login_date: DateTime<Utc>,
}

/// One watch history entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub item_id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub watched_at: DateTime<Utc>,
    pub kind: MediaKind,
    #[serde(default)]
    pub progress: Option<f32>,
}

/// One favorites entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteEntry {
    pub item_id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub added_at: DateTime<Utc>,
    pub vote_average: Option<f64>,
    pub release_date: Option<String>,
    pub kind: MediaKind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Quality {
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "HD")]
    Hd,
    #[serde(rename = "4K")]
    UltraHd,
}

/// UI settings blob
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub theme: Theme,
    pub autoplay: bool,
    pub quality: Quality,
    pub language: String,
    pub notifications: bool,
    pub streaming_source: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            autoplay: true,
            quality: Quality::Auto,
            language: "en".to_string(),
            notifications: true,
            streaming_source: "vidsrc".to_string(),
        }
    }
}

/// CRUD facade over the locally persisted user state
pub struct UserService {
    store: JsonStore,
}

impl UserService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    // Session

    /// Starts a local session under the given display name
    pub fn login(&self, name: &str) -> AppResult<Session> {
        let session = Session {
            name: name.trim().to_string(),
            login_date: Utc::now(),
        };
        self.store.save(&StoreKey::Session, &session)?;
        Ok(session)
    }

    pub fn logout(&self) -> AppResult<()> {
        self.store.remove(&StoreKey::Session)
    }

    pub fn current_session(&self) -> AppResult<Option<Session>> {
        self.store.load(&StoreKey::Session)
    }

    pub fn is_logged_in(&self) -> AppResult<bool> {
        Ok(self.current_session()?.is_some())
    }

    // Watch history

    /// Adds an item to the watch history
    ///
    /// Re-watching an item updates its entry in place; new items are
    /// prepended. The list is capped at 50 entries.
    pub fn add_to_history(
        &self,
        item: &MediaItem,
        kind: MediaKind,
        progress: Option<f32>,
    ) -> AppResult<()> {
        let mut history = self.watch_history()?;

        let entry = HistoryEntry {
            item_id: item.id,
            title: item.title.clone().unwrap_or_default(),
            poster_path: item.poster_path.clone(),
            watched_at: Utc::now(),
            kind,
            progress,
        };

        if let Some(existing) = history.iter_mut().find(|h| h.item_id == item.id) {
            *existing = entry;
        } else {
            history.insert(0, entry);
        }

        history.truncate(HISTORY_CAP);
        self.store.save(&StoreKey::History, &history)
    }

    /// Watch history, most recent first
    pub fn watch_history(&self) -> AppResult<Vec<HistoryEntry>> {
        Ok(self
            .store
            .load::<Vec<HistoryEntry>>(&StoreKey::History)?
            .unwrap_or_default())
    }

    pub fn remove_from_history(&self, item_id: i64) -> AppResult<()> {
        let mut history = self.watch_history()?;
        history.retain(|h| h.item_id != item_id);
        self.store.save(&StoreKey::History, &history)
    }

    pub fn clear_history(&self) -> AppResult<()> {
        self.store.remove(&StoreKey::History)
    }

    // Favorites

    /// Adds an item to favorites; already-favorited items are left untouched
    pub fn add_to_favorites(&self, item: &MediaItem, kind: MediaKind) -> AppResult<()> {
        let mut favorites = self.favorites()?;
        if favorites.iter().any(|f| f.item_id == item.id) {
            return Ok(());
        }

        favorites.insert(
            0,
            FavoriteEntry {
                item_id: item.id,
                title: item.title.clone().unwrap_or_default(),
                poster_path: item.poster_path.clone(),
                added_at: Utc::now(),
                vote_average: item.vote_average,
                release_date: item.air_date().map(str::to_string),
                kind,
            },
        );
        self.store.save(&StoreKey::Favorites, &favorites)
    }

    pub fn remove_from_favorites(&self, item_id: i64) -> AppResult<()> {
        let mut favorites = self.favorites()?;
        favorites.retain(|f| f.item_id != item_id);
        self.store.save(&StoreKey::Favorites, &favorites)
    }

    /// Favorites, most recently added first
    pub fn favorites(&self) -> AppResult<Vec<FavoriteEntry>> {
        Ok(self
            .store
            .load::<Vec<FavoriteEntry>>(&StoreKey::Favorites)?
            .unwrap_or_default())
    }

    pub fn is_favorite(&self, item_id: i64) -> AppResult<bool> {
        Ok(self.favorites()?.iter().any(|f| f.item_id == item_id))
    }

    // Settings

    /// Current settings, defaults substituted when nothing is persisted
    pub fn settings(&self) -> AppResult<Settings> {
        Ok(self
            .store
            .load::<Settings>(&StoreKey::Settings)?
            .unwrap_or_default())
    }

    /// Applies a partial update on top of the current settings
    pub fn update_settings(&self, update: impl FnOnce(&mut Settings)) -> AppResult<Settings> {
        let mut settings = self.settings()?;
        update(&mut settings);
        self.store.save(&StoreKey::Settings, &settings)?;
        Ok(settings)
    }

    pub fn reset_settings(&self) -> AppResult<()> {
        self.store.remove(&StoreKey::Settings)
    }
}
