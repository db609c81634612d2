use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::{middleware::request_id::RequestId, models::PreferenceInput, services::explanation};

#[derive(Debug, Deserialize)]
pub struct ExplanationRequest {
    pub preferences: PreferenceInput,
}

#[derive(Debug, Serialize)]
pub struct ExplanationResponse {
    pub explanation: String,
}

/// Handler for the explanation endpoint
pub async fn explain(
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ExplanationRequest>,
) -> Json<ExplanationResponse> {
    let explanation = explanation::explain(&request.preferences);

    tracing::debug!(request_id = %request_id, explanation = %explanation, "Explanation generated");

    Json(ExplanationResponse { explanation })
}
