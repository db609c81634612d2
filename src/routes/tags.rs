use axum::{Extension, Json};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{PreferencesRequest, TagResult},
    services::tagging,
};

/// Handler for the tag mapping endpoint
pub async fn map_tags(
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<PreferencesRequest>,
) -> AppResult<Json<TagResult>> {
    request.weights.validate()?;

    let result = tagging::normalize(&request.preferences, &request.weights);

    tracing::info!(
        request_id = %request_id,
        tag_count = result.tags.len(),
        genre_count = result.primary_genres.len(),
        mood = ?result.mood,
        "Preferences mapped to tags"
    );

    Ok(Json(result))
}
