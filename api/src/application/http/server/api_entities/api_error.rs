use axum::{
    Json,
    extract::{FromRequest, OptionalFromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nutriguard_core::domain::common::entities::app_errors::{CoreError, FieldProblem};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Validation Error")]
    Validation(Vec<FieldProblem>),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalServerError(String),
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(problems) => ApiError::Validation(problems),
            CoreError::MissingField(field) => ApiError::MissingField(field),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("core error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(problems) => {
                tracing::error!(?problems, "validation error");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "error": "Validation Error",
                        "details": problems,
                    })),
                )
                    .into_response()
            }
            ApiError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": format!("Missing required field: {field}"),
                })),
            )
                .into_response(),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Bad Request",
                    "message": message,
                })),
            )
                .into_response(),
            // Full detail stays server-side; the body never leaks internals.
            ApiError::InternalServerError(detail) => {
                tracing::error!(detail, "unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal Server Error",
                        "message": "An unexpected error occurred",
                    })),
                )
                    .into_response()
            }
        }
    }
}

fn problems_from(errors: validator::ValidationErrors) -> Vec<FieldProblem> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(|error| {
                let message = error
                    .message
                    .clone()
                    .unwrap_or_else(|| error.code.clone())
                    .to_string();
                FieldProblem::new(field.to_string(), message)
            })
        })
        .collect()
}

/// JSON extractor that runs `validator` rules before the handler sees the
/// payload. Usable as `Option<ValidateJson<T>>` for endpoints where the
/// body may be absent entirely.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = <Json<T> as FromRequest<S>>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        payload
            .validate()
            .map_err(|errors| ApiError::Validation(problems_from(errors)))?;

        Ok(ValidateJson(payload))
    }
}

impl<S, T> OptionalFromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let payload = <Json<T> as OptionalFromRequest<S>>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        match payload {
            Some(Json(payload)) => {
                payload
                    .validate()
                    .map_err(|errors| ApiError::Validation(problems_from(errors)))?;
                Ok(Some(ValidateJson(payload)))
            }
            None => Ok(None),
        }
    }
}
