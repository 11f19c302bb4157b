use axum::extract::State;

use crate::application::http::{
    evaluation::validators::SubmitFeedbackRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use nutriguard_core::domain::evaluation::ports::EvaluationService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubmitFeedbackResponse {
    pub status: String,
    pub message: String,
    pub total_feedback_count: usize,
}

#[utoipa::path(
    post,
    path = "/feedback",
    tag = "evaluation",
    summary = "Submit clinician feedback",
    description = "Records whether a prediction was correct, for model evaluation",
    request_body = SubmitFeedbackRequest,
    responses(
        (status = 201, body = SubmitFeedbackResponse),
        (status = 400, description = "Missing required field")
    )
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SubmitFeedbackRequest>,
) -> Result<Response<SubmitFeedbackResponse>, ApiError> {
    let input = payload.into_input()?;

    let total = state
        .service
        .submit_feedback(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SubmitFeedbackResponse {
        status: "success".to_string(),
        message: "Feedback recorded successfully".to_string(),
        total_feedback_count: total,
    }))
}
