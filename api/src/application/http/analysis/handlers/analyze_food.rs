use axum::extract::State;

use crate::application::http::{
    analysis::validators::AnalyzeFoodRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use nutriguard_core::domain::analysis::{
    entities::AnalysisResult, ports::AnalysisService, value_objects::AnalyzeFoodInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFoodResponse {
    pub food_name: String,
    pub calories: i64,
    pub confidence_score: f64,
    pub model_version: String,
    pub requires_human_review: bool,
}

impl From<AnalysisResult> for AnalyzeFoodResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            food_name: result.food_name,
            calories: result.calories,
            confidence_score: result.confidence_score,
            model_version: result.model_version,
            requires_human_review: result.requires_human_review,
        }
    }
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    summary = "Analyze food from image or description",
    description = "Runs the (mocked) AI model and flags low-confidence results for human review",
    request_body = AnalyzeFoodRequest,
    responses(
        (status = 200, body = AnalyzeFoodResponse),
        (status = 422, description = "Validation error")
    )
)]
pub async fn analyze_food(
    State(state): State<AppState>,
    payload: Option<ValidateJson<AnalyzeFoodRequest>>,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    // An absent or empty body is a valid request.
    let request = payload.map(|ValidateJson(r)| r).unwrap_or_default();

    let result = state
        .service
        .analyze_food(AnalyzeFoodInput {
            image_base64: request.image_base64,
            food_description: request.food_description,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeFoodResponse::from(result)))
}
