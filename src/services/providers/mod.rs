//! Metadata catalog provider abstraction.
//!
//! The browsing and recommendation layers only depend on this trait, so the
//! concrete catalog backend (TMDB today) can be swapped or mocked without
//! touching the callers.

use crate::{
    error::AppResult,
    models::{Genre, MediaItem, MediaKind, Page},
};

pub mod tmdb;

pub use tmdb::TmdbClient;

/// Trait for metadata catalog providers
///
/// All listing operations are paginated and keyed by content kind; series
/// and anime share the TV endpoint family.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Titles trending this week
    async fn trending(&self, kind: MediaKind) -> AppResult<Page<MediaItem>>;

    /// Most popular titles
    async fn popular(&self, kind: MediaKind, page: u32) -> AppResult<Page<MediaItem>>;

    /// Highest rated titles
    async fn top_rated(&self, kind: MediaKind, page: u32) -> AppResult<Page<MediaItem>>;

    /// Full-text title search
    async fn search(&self, kind: MediaKind, query: &str, page: u32) -> AppResult<Page<MediaItem>>;

    /// Titles carrying the given genre
    async fn by_genre(
        &self,
        kind: MediaKind,
        genre_id: i32,
        page: u32,
    ) -> AppResult<Page<MediaItem>>;

    /// Details for a single title
    async fn details(&self, kind: MediaKind, id: i64) -> AppResult<MediaItem>;

    /// The provider's genre taxonomy for the given content kind
    async fn genres(&self, kind: MediaKind) -> AppResult<Vec<Genre>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
