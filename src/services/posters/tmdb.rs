//! TMDB poster provider
//!
//! Searches `/search/movie` by title and year and builds the image URL from the first
//! result's `poster_path`:
//! `{image_base_url}{poster_size}{poster_path}` (e.g., `https://image.tmdb.org/t/p/w342/abc.jpg`).

use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::posters::PosterProvider,
};

#[derive(Clone)]
pub struct TmdbPosterProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
    poster_size: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    poster_path: Option<String>,
}

impl TmdbPosterProvider {
    pub fn new(
        api_key: String,
        api_url: String,
        image_base_url: String,
        poster_size: String,
    ) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            image_base_url,
            poster_size,
        }
    }

    /// Builds a provider when a TMDB API key is configured
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.tmdb_api_key.clone().filter(|key| !key.is_empty())?;
        Some(Self::new(
            api_key,
            config.tmdb_api_url.clone(),
            config.tmdb_image_base_url.clone(),
            config.poster_size.clone(),
        ))
    }

    fn image_url(&self, poster_path: &str) -> String {
        format!("{}{}{}", self.image_base_url, self.poster_size, poster_path)
    }

    /// Picks the first result's poster, if it has one
    fn first_poster(&self, response: SearchResponse) -> Option<String> {
        response
            .results
            .into_iter()
            .next()
            .and_then(|result| result.poster_path)
            .filter(|path| !path.is_empty())
            .map(|path| self.image_url(&path))
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbPosterProvider {
    async fn poster_url(&self, title: &str, year: u16) -> AppResult<Option<String>> {
        let url = format!("{}/search/movie", self.api_url);
        let year = year.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", title),
                ("year", year.as_str()),
            ])
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

        let search: SearchResponse = response.json().await?;
        let poster = self.first_poster(search);

        tracing::debug!(
            title = %title,
            found = poster.is_some(),
            provider = "tmdb",
            "Poster search completed"
        );

        Ok(poster)
    }
}
