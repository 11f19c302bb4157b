use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use nutriguard_core::domain::evaluation::{
    entities::{DriftStatus, MetricsSnapshot},
    ports::EvaluationService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetMetricsResponse {
    pub precision: f64,
    pub sample_size: usize,
    pub drift_status: DriftStatus,
    pub drift_threshold: f64,
    pub model_version: String,
}

impl From<MetricsSnapshot> for GetMetricsResponse {
    fn from(snapshot: MetricsSnapshot) -> Self {
        Self {
            precision: snapshot.precision,
            sample_size: snapshot.sample_size,
            drift_status: snapshot.drift_status,
            drift_threshold: snapshot.drift_threshold,
            model_version: snapshot.model_version,
        }
    }
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "evaluation",
    summary = "Get model evaluation metrics",
    description = "Running precision over clinician feedback, with drift detection against the safety threshold",
    responses(
        (status = 200, body = GetMetricsResponse)
    )
)]
pub async fn get_metrics(
    State(state): State<AppState>,
) -> Result<Response<GetMetricsResponse>, ApiError> {
    let snapshot = state
        .service
        .compute_metrics()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMetricsResponse::from(snapshot)))
}
