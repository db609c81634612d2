use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::posters::{PlaceholderPosterProvider, PosterProvider, TmdbPosterProvider},
};

pub mod explanation;
pub mod recommendations;
pub mod tags;

/// Shared application state
pub struct AppState {
    pub poster_provider: Arc<dyn PosterProvider>,
    pub placeholder_poster_url: String,
}

impl AppState {
    pub fn new(poster_provider: Arc<dyn PosterProvider>, placeholder_poster_url: String) -> Self {
        Self {
            poster_provider,
            placeholder_poster_url,
        }
    }

    /// Uses TMDB for posters when a key is configured, placeholders otherwise
    pub fn from_config(config: &Config) -> Self {
        let poster_provider: Arc<dyn PosterProvider> = match TmdbPosterProvider::from_config(config)
        {
            Some(tmdb) => {
                tracing::info!(provider = "tmdb", "Poster lookups enabled");
                Arc::new(tmdb)
            }
            None => {
                tracing::warn!("TMDB_API_KEY not set, serving placeholder posters");
                Arc::new(PlaceholderPosterProvider)
            }
        };

        Self::new(poster_provider, config.placeholder_poster_url.clone())
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tags", post(tags::map_tags))
        .route("/explanation", post(explanation::explain))
        .route("/recommendations", post(recommendations::recommend))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
