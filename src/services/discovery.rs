//! Catalog browsing with degrade-to-empty failure semantics.
//!
//! List endpoints never surface provider errors to the UI layer: a failed
//! call is logged and replaced with an empty page, leaving the caller with an
//! empty-state view rather than an error path. Detail lookups do propagate
//! errors, since there is no sensible empty fallback for a single title.
//! No retries, backoff, or request timeouts beyond the HTTP client defaults.

use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{MediaItem, MediaKind, Page};
use crate::services::providers::CatalogProvider;

/// Browsing facade over a catalog provider
pub struct Discovery {
    provider: Arc<dyn CatalogProvider>,
}

impl Discovery {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    fn fallback(&self, operation: &str, error: &crate::error::AppError) -> Page<MediaItem> {
        tracing::error!(
            error = %error,
            operation = %operation,
            provider = %self.provider.name(),
            "Catalog call failed, returning empty results"
        );
        Page::empty()
    }

    /// Titles trending this week; empty page on failure
    pub async fn trending(&self, kind: MediaKind) -> Page<MediaItem> {
        match self.provider.trending(kind).await {
            Ok(page) => page,
            Err(e) => self.fallback("trending", &e),
        }
    }

    /// Most popular titles; empty page on failure
    pub async fn popular(&self, kind: MediaKind, page: u32) -> Page<MediaItem> {
        match self.provider.popular(kind, page).await {
            Ok(page) => page,
            Err(e) => self.fallback("popular", &e),
        }
    }

    /// Highest rated titles; empty page on failure
    pub async fn top_rated(&self, kind: MediaKind, page: u32) -> Page<MediaItem> {
        match self.provider.top_rated(kind, page).await {
            Ok(page) => page,
            Err(e) => self.fallback("top_rated", &e),
        }
    }

    /// Title search; empty page on failure (including rejected queries)
    pub async fn search(&self, kind: MediaKind, query: &str, page: u32) -> Page<MediaItem> {
        match self.provider.search(kind, query, page).await {
            Ok(page) => page,
            Err(e) => self.fallback("search", &e),
        }
    }

    /// Titles in a genre; empty page on failure
    pub async fn by_genre(&self, kind: MediaKind, genre_id: i32, page: u32) -> Page<MediaItem> {
        match self.provider.by_genre(kind, genre_id, page).await {
            Ok(page) => page,
            Err(e) => self.fallback("by_genre", &e),
        }
    }

    /// Details for a single title; errors propagate
    pub async fn details(&self, kind: MediaKind, id: i64) -> AppResult<MediaItem> {
        self.provider.details(kind, id).await
    }
}
