use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /analyze`. Both fields are optional and, with the mock
/// backend, accepted but not consumed.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeFoodRequest {
    pub image_base64: Option<String>,

    #[validate(length(
        max = 5000,
        message = "food_description must be at most 5000 characters"
    ))]
    pub food_description: Option<String>,
}
