//! Poster image lookup.
//!
//! The results screen shows a poster per catalog movie. Lookups go through a pluggable
//! provider (TMDB when an API key is configured) and any miss or failure degrades to a
//! placeholder image. Poster problems never fail a recommendation.

use std::sync::Arc;

use crate::{error::AppResult, models::CatalogMovie};

pub mod tmdb;

pub use tmdb::TmdbPosterProvider;

/// Trait for poster image sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Finds a poster URL for a movie by title and release year
    ///
    /// `Ok(None)` means the source has no poster for the movie.
    async fn poster_url(&self, title: &str, year: u16) -> AppResult<Option<String>>;
}

/// Provider used when no image source is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderPosterProvider;

#[async_trait::async_trait]
impl PosterProvider for PlaceholderPosterProvider {
    async fn poster_url(&self, _title: &str, _year: u16) -> AppResult<Option<String>> {
        Ok(None)
    }
}

/// Resolves a poster URL for every movie, in input order
///
/// Lookups run in parallel. Misses and failures fall back to `placeholder`.
pub async fn resolve_posters(
    provider: Arc<dyn PosterProvider>,
    movies: &[CatalogMovie],
    placeholder: &str,
) -> Vec<String> {
    let mut tasks = Vec::with_capacity(movies.len());

    for movie in movies {
        let provider = provider.clone();
        let (title, year) = (movie.title, movie.year);
        let task = tokio::spawn(async move { provider.poster_url(title, year).await });
        tasks.push(task);
    }

    let mut urls = Vec::with_capacity(tasks.len());

    for (movie, task) in movies.iter().zip(tasks) {
        let url = match task.await {
            Ok(Ok(Some(url))) => url,
            Ok(Ok(None)) => {
                tracing::debug!(title = movie.title, "No poster found, using placeholder");
                placeholder.to_string()
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, title = movie.title, "Poster lookup failed");
                placeholder.to_string()
            }
            Err(e) => {
                tracing::error!(error = %e, "Poster task join error");
                placeholder.to_string()
            }
        };
        urls.push(url);
    }

    urls
}
