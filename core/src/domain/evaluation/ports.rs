use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    evaluation::{
        entities::{FeedbackRecord, MetricsSnapshot},
        value_objects::SubmitFeedbackInput,
    },
};

/// Append-only store for clinician feedback. The in-memory adapter is
/// process-local with no eviction; a persistence backend implements the
/// same trait.
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackRepository: Send + Sync {
    /// Appends a record and returns the new total count.
    fn append(
        &self,
        record: FeedbackRecord,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;

    fn list_all(&self) -> impl Future<Output = Result<Vec<FeedbackRecord>, CoreError>> + Send;
}

/// Service trait for the feedback loop and drift metrics
#[cfg_attr(test, mockall::automock)]
pub trait EvaluationService: Send + Sync {
    /// Records feedback and returns the running total count.
    fn submit_feedback(
        &self,
        input: SubmitFeedbackInput,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;

    fn compute_metrics(&self) -> impl Future<Output = Result<MetricsSnapshot, CoreError>> + Send;
}
