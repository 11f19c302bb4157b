use super::handlers::get_feed::{__path_get_feed, get_feed};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_feed))]
pub struct LiveFeedApiDoc;

pub fn feed_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/feed", state.args.server.root_path),
        get(get_feed),
    )
}
