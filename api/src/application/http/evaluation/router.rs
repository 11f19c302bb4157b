use super::handlers::{
    get_metrics::{__path_get_metrics, get_metrics},
    submit_feedback::{__path_submit_feedback, submit_feedback},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(submit_feedback, get_metrics))]
pub struct EvaluationApiDoc;

pub fn evaluation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/feedback", state.args.server.root_path),
            post(submit_feedback),
        )
        .route(
            &format!("{}/metrics", state.args.server.root_path),
            get(get_metrics),
        )
}
