use crate::domain::{
    analysis::{
        entities::AnalysisResult,
        ports::{AnalysisService, FoodAnalyzer},
        value_objects::AnalyzeFoodInput,
    },
    common::{MODEL_VERSION, entities::app_errors::CoreError, ports::Clock, services::Service},
    evaluation::ports::FeedbackRepository,
    feed::ports::ScanRepository,
};

impl<A, S, F, C> AnalysisService for Service<A, S, F, C>
where
    A: FoodAnalyzer,
    S: ScanRepository,
    F: FeedbackRepository,
    C: Clock,
{
    async fn analyze_food(&self, input: AnalyzeFoodInput) -> Result<AnalysisResult, CoreError> {
        tracing::info!(
            has_image = input.image_base64.is_some(),
            has_description = input.food_description.is_some(),
            "received analysis request"
        );

        let prediction = self.analyzer.analyze(input).await?;

        let result = AnalysisResult::new(
            prediction.food_name,
            prediction.calories,
            prediction.confidence_score,
            MODEL_VERSION.to_string(),
        )?;

        let review_status = if result.requires_human_review {
            "REQUIRES REVIEW"
        } else {
            "SAFE"
        };
        tracing::info!(
            food_name = %result.food_name,
            confidence = result.confidence_score,
            status = review_status,
            "analysis complete"
        );

        Ok(result)
    }
}
