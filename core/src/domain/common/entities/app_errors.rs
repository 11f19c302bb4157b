use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A single field-level validation problem, surfaced to callers as part of
/// a structured rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldProblem {
    pub field: String,
    pub message: String,
}

impl FieldProblem {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("validation failed")]
    Validation(Vec<FieldProblem>),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("internal server error")]
    InternalServerError,
}
