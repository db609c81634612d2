use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{PreferencesRequest, Recommendation},
    routes::AppState,
    services::recommendations,
};

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<PreferencesRequest>,
) -> AppResult<Json<Recommendation>> {
    request.weights.validate()?;

    tracing::info!(request_id = %request_id, "Processing recommendation request");

    let recommendation = recommendations::get_recommendations(
        state.poster_provider.clone(),
        &state.placeholder_poster_url,
        &request.preferences,
        &request.weights,
    )
    .await;

    tracing::info!(
        request_id = %request_id,
        profile = recommendation.profile.name,
        movie_count = recommendation.movies.len(),
        "Recommendation completed"
    );

    Ok(Json(recommendation))
}
