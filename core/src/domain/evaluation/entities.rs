use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{
    BASELINE_PRECISION, CLINICAL_SAFETY_THRESHOLD, MODEL_VERSION, generate_uuid_v7, round4,
};

/// A clinician's verdict on one prediction. Append-only: once recorded it
/// is never mutated or removed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub scan_id: String,
    pub is_correct: bool,
    pub actual_food: String,
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackRecord {
    pub fn new(
        scan_id: String,
        is_correct: bool,
        actual_food: String,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            scan_id,
            is_correct,
            actual_food,
            submitted_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DriftStatus {
    #[serde(rename = "Stable")]
    Stable,
    #[serde(rename = "Drift Detected")]
    DriftDetected,
}

/// Aggregate evaluation metrics, computed on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetricsSnapshot {
    pub precision: f64,
    pub sample_size: usize,
    pub drift_status: DriftStatus,
    pub drift_threshold: f64,
    pub model_version: String,
}

impl MetricsSnapshot {
    /// Precision over the full feedback log: confirmed-correct / total,
    /// rounded to 4 decimals. An empty log reports the baseline, which is
    /// above the drift threshold (no evidence of drift yet).
    pub fn from_records(records: &[FeedbackRecord]) -> Self {
        let sample_size = records.len();

        let precision = if sample_size == 0 {
            BASELINE_PRECISION
        } else {
            let correct = records.iter().filter(|r| r.is_correct).count();
            round4(correct as f64 / sample_size as f64)
        };

        let drift_status = if precision < CLINICAL_SAFETY_THRESHOLD {
            DriftStatus::DriftDetected
        } else {
            DriftStatus::Stable
        };

        Self {
            precision,
            sample_size,
            drift_status,
            drift_threshold: CLINICAL_SAFETY_THRESHOLD,
            model_version: MODEL_VERSION.to_string(),
        }
    }
}
