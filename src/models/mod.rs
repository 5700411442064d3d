use serde::{Deserialize, Serialize};

pub mod genres;
pub mod profile;

pub use genres::genre_name;
pub use profile::{
    decade_label, InteractionEvent, InteractionKind, PreferenceProfile, RatingBucket,
    RecommendationScore,
};

/// Kind of catalog content
///
/// Anime is served through the TV endpoint family; it exists as a distinct
/// kind so watch history and favorites can keep the distinction the UI makes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
    Anime,
}

impl MediaKind {
    /// URL path segment used by the metadata API
    pub fn path_segment(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series | MediaKind::Anime => "tv",
        }
    }
}

/// A movie or TV entry as returned by the metadata catalog
///
/// Every attribute except `id` is optional: list endpoints omit fields freely
/// and the scoring path must treat an absent field as contributing nothing.
/// Movie payloads carry `title`/`release_date`, TV payloads `name`/
/// `first_air_date`; both shapes deserialize into the same struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MediaItem {
    pub id: i64,
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<i64>,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
}

impl MediaItem {
    /// Release date for movies, first air date for series
    ///
    /// Empty strings (which TMDB emits for undated entries) count as absent.
    pub fn air_date(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .or_else(|| self.first_air_date.as_deref().filter(|d| !d.is_empty()))
    }
}

/// One page of catalog results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

impl<T> Page<T> {
    /// An empty first page, used as the fallback when a catalog call fails
    pub fn empty() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// A genre as returned by the metadata API's genre list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}
