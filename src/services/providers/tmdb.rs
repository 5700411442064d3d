//! TMDB API provider.
//!
//! Thin client over the TMDB v3 REST API. All list endpoints return the same
//! paginated envelope, so the client funnels every call through one helper
//! that appends the API key, checks the status, and deserializes the page.

use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{Genre, MediaItem, MediaKind, Page},
    services::providers::CatalogProvider,
};

#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
}

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    genres: Vec<Genre>,
}

impl TmdbClient {
    /// Creates a client against the given API base URL
    pub fn new(api_key: String, api_url: String, image_base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            image_base_url,
        }
    }

    /// Creates a client from the application config
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.image_base_url.clone(),
        )
    }

    /// Full CDN URL for a poster or backdrop path, e.g. size "w500"
    pub fn image_url(&self, path: &str, size: &str) -> String {
        format!("{}/{}{}", self.image_base_url, size, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    async fn get_page(&self, path: &str, query: &[(&str, String)]) -> AppResult<Page<MediaItem>> {
        let page: Page<MediaItem> = self.get_json(path, query).await?;

        tracing::debug!(
            path = %path,
            results = page.results.len(),
            provider = "tmdb",
            "Catalog page fetched"
        );

        Ok(page)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbClient {
    async fn trending(&self, kind: MediaKind) -> AppResult<Page<MediaItem>> {
        let path = format!("/trending/{}/week", kind.path_segment());
        self.get_page(&path, &[]).await
    }

    async fn popular(&self, kind: MediaKind, page: u32) -> AppResult<Page<MediaItem>> {
        let path = format!("/{}/popular", kind.path_segment());
        self.get_page(&path, &[("page", page.to_string())]).await
    }

    async fn top_rated(&self, kind: MediaKind, page: u32) -> AppResult<Page<MediaItem>> {
        let path = format!("/{}/top_rated", kind.path_segment());
        self.get_page(&path, &[("page", page.to_string())]).await
    }

    async fn search(&self, kind: MediaKind, query: &str, page: u32) -> AppResult<Page<MediaItem>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let path = format!("/search/{}", kind.path_segment());
        let results = self
            .get_page(
                &path,
                &[("query", query.to_string()), ("page", page.to_string())],
            )
            .await?;

        tracing::info!(
            query = %query,
            results = results.results.len(),
            provider = "tmdb",
            "Title search completed"
        );

        Ok(results)
    }

    async fn by_genre(
        &self,
        kind: MediaKind,
        genre_id: i32,
        page: u32,
    ) -> AppResult<Page<MediaItem>> {
        let path = format!("/discover/{}", kind.path_segment());
        self.get_page(
            &path,
            &[
                ("with_genres", genre_id.to_string()),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    async fn details(&self, kind: MediaKind, id: i64) -> AppResult<MediaItem> {
        let path = format!("/{}/{}", kind.path_segment(), id);
        self.get_json(&path, &[]).await
    }

    async fn genres(&self, kind: MediaKind) -> AppResult<Vec<Genre>> {
        let path = format!("/genre/{}/list", kind.path_segment());
        let response: GenreListResponse = self.get_json(&path, &[]).await?;
        Ok(response.genres)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
