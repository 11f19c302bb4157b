use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{
    CLINICAL_SAFETY_THRESHOLD,
    entities::app_errors::{CoreError, FieldProblem},
};

/// True iff a prediction at this confidence must be inspected by a
/// clinician before clinical use.
pub fn requires_human_review(confidence_score: f64) -> bool {
    confidence_score < CLINICAL_SAFETY_THRESHOLD
}

/// A validated food analysis result. Constructed fresh per request and
/// discarded once the response is sent; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub food_name: String,
    pub calories: i64,
    pub confidence_score: f64,
    pub model_version: String,
    pub requires_human_review: bool,
}

impl AnalysisResult {
    /// Validates field ranges and derives the review flag. The flag is
    /// always recomputed from the confidence score here; callers cannot
    /// supply it.
    pub fn new(
        food_name: String,
        calories: i64,
        confidence_score: f64,
        model_version: String,
    ) -> Result<Self, CoreError> {
        let mut problems = Vec::new();

        if food_name.trim().is_empty() {
            problems.push(FieldProblem::new("food_name", "food_name must not be empty"));
        }
        if calories < 0 {
            problems.push(FieldProblem::new(
                "calories",
                "calories must be a non-negative integer",
            ));
        }
        if !(0.0..=1.0).contains(&confidence_score) {
            problems.push(FieldProblem::new(
                "confidence_score",
                "confidence_score must be between 0.0 and 1.0",
            ));
        }

        if !problems.is_empty() {
            return Err(CoreError::Validation(problems));
        }

        Ok(Self {
            food_name,
            calories,
            confidence_score,
            model_version,
            requires_human_review: requires_human_review(confidence_score),
        })
    }
}
