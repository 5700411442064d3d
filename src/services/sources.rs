//! Streaming source selection and embed URL construction.
//!
//! A fixed table of playback providers, each carrying URL templates with
//! `{id}`, `{season}` and `{episode}` placeholders. Exactly one source is
//! active at a time; switching is an in-memory reassignment followed by a
//! best-effort persistence write. Resolution is pure string substitution and
//! never validates that the resulting URL is reachable.

use crate::store::{JsonStore, StoreKey};

/// A playback provider with its URL templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamingSource {
    pub id: &'static str,
    pub name: &'static str,
    pub base_url: &'static str,
    pub movie_pattern: &'static str,
    pub series_pattern: &'static str,
}

/// The closed set of supported playback providers; the first entry is the
/// default
pub static SOURCES: [StreamingSource; 4] = [
    StreamingSource {
        id: "vidsrc",
        name: "VidSrc",
        base_url: "https://vidsrc.in",
        movie_pattern: "/embed/movie/{id}",
        series_pattern: "/embed/tv/{id}/{season}/{episode}",
    },
    StreamingSource {
        id: "vidfast",
        name: "VidFast",
        base_url: "https://vidfast.net",
        movie_pattern: "/movie/{id}?autoPlay=true",
        series_pattern: "/tv/{id}/{season}/{episode}?autoPlay=true",
    },
    StreamingSource {
        id: "vidlink",
        name: "VidLink",
        base_url: "https://vidlink.pro",
        movie_pattern: "/movie/{id}",
        series_pattern: "/tv/{id}/{season}/{episode}",
    },
    StreamingSource {
        id: "videasy",
        name: "Videasy",
        base_url: "https://videasy.io",
        movie_pattern: "/embed/{id}",
        series_pattern: "/embed/tv/{id}/{season}/{episode}",
    },
];

fn find_source(id: &str) -> Option<&'static StreamingSource> {
    SOURCES.iter().find(|source| source.id == id)
}

/// Manages the active streaming source and builds playback URLs
pub struct SourceManager {
    store: JsonStore,
    active_id: String,
}

impl SourceManager {
    /// Creates a manager, restoring the persisted selection when present
    ///
    /// A missing, corrupt, or unrecognized persisted id falls back to the
    /// default source.
    pub fn new(store: JsonStore) -> Self {
        let active_id = store
            .load::<String>(&StoreKey::ActiveSource)
            .unwrap_or(None)
            .filter(|id| find_source(id).is_some())
            .unwrap_or_else(|| SOURCES[0].id.to_string());

        Self { store, active_id }
    }

    /// All supported sources
    pub fn sources() -> &'static [StreamingSource] {
        &SOURCES
    }

    /// The currently active source
    pub fn active(&self) -> &'static StreamingSource {
        find_source(&self.active_id).unwrap_or(&SOURCES[0])
    }

    /// Switches the active source and persists the selection
    ///
    /// Unrecognized ids are ignored; persistence failures are logged but do
    /// not undo the in-memory switch.
    pub fn set_active(&mut self, id: &str) {
        if find_source(id).is_none() {
            tracing::debug!(source_id = %id, "Ignoring unknown streaming source");
            return;
        }

        self.active_id = id.to_string();

        if let Err(e) = self.store.save(&StoreKey::ActiveSource, &self.active_id) {
            tracing::warn!(error = %e, "Failed to persist active streaming source");
        }
    }

    /// Playback URL for a movie on the active source
    pub fn embed_url(&self, item_id: i64) -> String {
        let source = self.active();
        format!(
            "{}{}",
            source.base_url,
            source.movie_pattern.replace("{id}", &item_id.to_string())
        )
    }

    /// Playback URL for a movie on a specific source, `None` for unknown ids
    pub fn embed_url_for(&self, source_id: &str, item_id: i64) -> Option<String> {
        let source = find_source(source_id)?;
        Some(format!(
            "{}{}",
            source.base_url,
            source.movie_pattern.replace("{id}", &item_id.to_string())
        ))
    }

    /// Playback URL for an episode on the active source
    pub fn episode_embed_url(&self, item_id: i64, season: u32, episode: u32) -> String {
        let source = self.active();
        let path = source
            .series_pattern
            .replace("{id}", &item_id.to_string())
            .replace("{season}", &season.to_string())
            .replace("{episode}", &episode.to_string());
        format!("{}{}", source.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_manager() -> (tempfile::TempDir, SourceManager) {
        let dir = tempfile::tempdir().unwrap();
        let manager = SourceManager::new(JsonStore::new(dir.path()));
        (dir, manager)
    }

    #[test]
    fn test_default_source_is_vidsrc() {
        let (_dir, manager) = test_manager();
        assert_eq!(manager.active().id, "vidsrc");
    }

    #[test]
    fn test_embed_url_substitution() {
        let (_dir, manager) = test_manager();
        assert_eq!(manager.embed_url(42), "https://vidsrc.in/embed/movie/42");
    }

    #[test]
    fn test_episode_embed_url_substitution() {
        let (_dir, manager) = test_manager();
        assert_eq!(
            manager.episode_embed_url(1396, 2, 5),
            "https://vidsrc.in/embed/tv/1396/2/5"
        );
    }

    #[test]
    fn test_set_active_switches_source() {
        let (_dir, mut manager) = test_manager();
        manager.set_active("vidfast");
        assert_eq!(manager.active().id, "vidfast");
        assert_eq!(
            manager.embed_url(42),
            "https://vidfast.net/movie/42?autoPlay=true"
        );
    }

    #[test]
    fn test_set_active_unknown_id_is_ignored() {
        let (_dir, mut manager) = test_manager();
        manager.set_active("vidlink");
        manager.set_active("unknown-provider");
        assert_eq!(manager.active().id, "vidlink");
    }

    #[test]
    fn test_active_source_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let mut manager = SourceManager::new(JsonStore::new(dir.path()));
        manager.set_active("videasy");

        let restored = SourceManager::new(JsonStore::new(dir.path()));
        assert_eq!(restored.active().id, "videasy");
    }

    #[test]
    fn test_corrupt_persisted_selection_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("active_source.json"), "\"not-a-source\"").unwrap();

        let manager = SourceManager::new(JsonStore::new(dir.path()));
        assert_eq!(manager.active().id, "vidsrc");
    }

    #[test]
    fn test_embed_url_for_specific_source() {
        let (_dir, manager) = test_manager();
        assert_eq!(
            manager.embed_url_for("vidlink", 7),
            Some("https://vidlink.pro/movie/7".to_string())
        );
        assert_eq!(manager.embed_url_for("nope", 7), None);
    }
}
