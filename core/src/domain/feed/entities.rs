use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A scan in the backing set the live feed is assembled from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRecord {
    pub patient_id: String,
    pub food: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Flagged,
    Verified,
}

/// A single row of the live ingestion feed. Ids and timestamps are
/// assigned per call; the feed has no cross-call identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanFeedEntry {
    pub id: String,
    pub patient_id: String,
    pub food: String,
    pub confidence: f64,
    pub timestamp: String,
    pub status: ScanStatus,
    pub requires_review: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanFeed {
    pub scans: Vec<ScanFeedEntry>,
    pub total: usize,
    pub flagged_count: usize,
}
