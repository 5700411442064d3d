//! Durable client-local storage.
//!
//! Everything the application persists lives in a single data directory as
//! JSON, one record per key. Reads of absent or corrupt records degrade to
//! "no data"; callers substitute defaults.

use std::fmt::Display;

use crate::error::AppResult;
use crate::models::{InteractionEvent, PreferenceProfile};

pub mod json;
pub mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

/// Keys for persisted records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Preferences,
    Interactions,
    ActiveSource,
    Session,
    History,
    Favorites,
    Settings,
}

impl StoreKey {
    /// File name backing this key inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            StoreKey::Preferences => "preferences.json",
            StoreKey::Interactions => "interactions.json",
            StoreKey::ActiveSource => "active_source.json",
            StoreKey::Session => "session.json",
            StoreKey::History => "history.json",
            StoreKey::Favorites => "favorites.json",
            StoreKey::Settings => "settings.json",
        }
    }
}

impl Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Handle through which the preference profile and interaction log are read
/// and written
///
/// The recorder is the only mutator; the scorer and ranker take read-only
/// snapshots. Passing the handle explicitly keeps the scoring logic testable
/// against an in-memory store.
pub trait PreferenceStore: Send + Sync {
    /// Current profile, empty if nothing has been recorded
    fn load_profile(&self) -> AppResult<PreferenceProfile>;

    /// Replaces the stored profile
    fn save_profile(&self, profile: &PreferenceProfile) -> AppResult<()>;

    /// Current interaction log, oldest first
    fn load_interactions(&self) -> AppResult<Vec<InteractionEvent>>;

    /// Replaces the stored interaction log
    fn save_interactions(&self, events: &[InteractionEvent]) -> AppResult<()>;

    /// Drops the profile and the interaction log
    fn reset(&self) -> AppResult<()>;
}
