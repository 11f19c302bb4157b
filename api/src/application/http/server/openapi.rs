use crate::application::http::{
    analysis::router::AnalysisApiDoc, evaluation::router::EvaluationApiDoc,
    feed::router::LiveFeedApiDoc, health::HealthApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "NutriGuard API",
    description = "AI-powered food analysis for clinical dashboards"
))]
pub struct ApiDoc;

impl ApiDoc {
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut doc = ApiDoc::openapi();
        doc.merge(AnalysisApiDoc::openapi());
        doc.merge(LiveFeedApiDoc::openapi());
        doc.merge(EvaluationApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
