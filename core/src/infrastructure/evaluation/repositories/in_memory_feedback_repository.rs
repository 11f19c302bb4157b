use std::sync::{Arc, RwLock};

use crate::domain::{
    common::entities::app_errors::CoreError,
    evaluation::{entities::FeedbackRecord, ports::FeedbackRepository},
};

/// Process-local append-only feedback store. No eviction, cap, or
/// persistence; the log grows for the lifetime of the process. Clones
/// share the same underlying log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeedbackRepository {
    records: Arc<RwLock<Vec<FeedbackRecord>>>,
}

impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn append(&self, record: FeedbackRecord) -> Result<usize, CoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CoreError::InternalServerError)?;
        records.push(record);
        Ok(records.len())
    }

    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, CoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| CoreError::InternalServerError)?;
        Ok(records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(scan_id: &str, is_correct: bool) -> FeedbackRecord {
        FeedbackRecord::new(
            scan_id.to_string(),
            is_correct,
            "Vegetable Soup".to_string(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn append_returns_running_count_and_preserves_order() {
        let repo = InMemoryFeedbackRepository::default();

        assert_eq!(repo.append(record("scan-1", true)).await.unwrap(), 1);
        assert_eq!(repo.append(record("scan-2", false)).await.unwrap(), 2);
        assert_eq!(repo.append(record("scan-3", true)).await.unwrap(), 3);

        let all = repo.list_all().await.unwrap();
        let scan_ids: Vec<_> = all.iter().map(|r| r.scan_id.as_str()).collect();
        assert_eq!(scan_ids, ["scan-1", "scan-2", "scan-3"]);
    }

    #[tokio::test]
    async fn clones_share_the_same_log() {
        let repo = InMemoryFeedbackRepository::default();
        let clone = repo.clone();

        repo.append(record("scan-1", true)).await.unwrap();
        assert_eq!(clone.list_all().await.unwrap().len(), 1);
    }
}
