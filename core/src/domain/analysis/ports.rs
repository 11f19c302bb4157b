use std::future::Future;

use crate::domain::{
    analysis::{
        entities::AnalysisResult,
        value_objects::{AnalyzeFoodInput, Prediction},
    },
    common::entities::app_errors::CoreError,
};

/// Model backend trait. The shipped adapter is a randomized mock; a real
/// inference client implements the same signature.
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalyzer: Send + Sync {
    fn analyze(
        &self,
        input: AnalyzeFoodInput,
    ) -> impl Future<Output = Result<Prediction, CoreError>> + Send;
}

/// Service trait for food analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisService: Send + Sync {
    fn analyze_food(
        &self,
        input: AnalyzeFoodInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;
}
