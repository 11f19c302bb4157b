use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;
use nutriguard_core::domain::evaluation::value_objects::SubmitFeedbackInput;

/// Body of `POST /feedback`. All three fields are required; presence is
/// checked explicitly so the rejection can name the missing field.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SubmitFeedbackRequest {
    pub scan_id: Option<String>,
    pub is_correct: Option<bool>,
    pub actual_food: Option<String>,
}

impl SubmitFeedbackRequest {
    /// The first absent field wins, matching the documented check order.
    pub fn into_input(self) -> Result<SubmitFeedbackInput, ApiError> {
        let scan_id = self
            .scan_id
            .ok_or_else(|| ApiError::MissingField("scan_id".to_string()))?;
        let is_correct = self
            .is_correct
            .ok_or_else(|| ApiError::MissingField("is_correct".to_string()))?;
        let actual_food = self
            .actual_food
            .ok_or_else(|| ApiError::MissingField("actual_food".to_string()))?;

        Ok(SubmitFeedbackInput {
            scan_id,
            is_correct,
            actual_food,
        })
    }
}
