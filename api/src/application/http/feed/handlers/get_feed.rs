use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use nutriguard_core::domain::{
    common::MODEL_VERSION,
    feed::{
        entities::{ScanFeed, ScanFeedEntry},
        ports::LiveFeedService,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetFeedResponse {
    pub scans: Vec<ScanFeedEntry>,
    pub total: usize,
    pub flagged_count: usize,
    pub model_version: String,
}

impl From<ScanFeed> for GetFeedResponse {
    fn from(feed: ScanFeed) -> Self {
        Self {
            scans: feed.scans,
            total: feed.total,
            flagged_count: feed.flagged_count,
            model_version: MODEL_VERSION.to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/feed",
    tag = "feed",
    summary = "Get live ingestion feed",
    description = "Returns the recent scans in a fresh random order with review status per entry",
    responses(
        (status = 200, body = GetFeedResponse)
    )
)]
pub async fn get_feed(State(state): State<AppState>) -> Result<Response<GetFeedResponse>, ApiError> {
    let feed = state
        .service
        .get_live_feed()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFeedResponse::from(feed)))
}
