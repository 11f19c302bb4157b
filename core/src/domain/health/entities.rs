use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::MODEL_VERSION;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub model_version: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            model_version: MODEL_VERSION.to_string(),
        }
    }
}
