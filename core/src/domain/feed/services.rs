use crate::domain::{
    analysis::ports::FoodAnalyzer,
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    evaluation::ports::FeedbackRepository,
    feed::{
        entities::ScanFeed,
        helpers::assemble_feed,
        ports::{LiveFeedService, ScanRepository},
    },
};

impl<A, S, F, C> LiveFeedService for Service<A, S, F, C>
where
    A: FoodAnalyzer,
    S: ScanRepository,
    F: FeedbackRepository,
    C: Clock,
{
    async fn get_live_feed(&self) -> Result<ScanFeed, CoreError> {
        let records = self.scan_repository.fetch_recent().await?;
        let feed = assemble_feed(records);

        tracing::info!(
            total = feed.total,
            flagged = feed.flagged_count,
            "feed requested"
        );

        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create_service;
    use crate::domain::common::{AnalysisConfig, NutriguardConfig};
    use std::collections::BTreeSet;
    use std::time::Duration;

    fn zero_latency_service() -> crate::application::NutriguardService {
        create_service(NutriguardConfig {
            analysis: AnalysisConfig {
                latency: Duration::ZERO,
            },
        })
    }

    #[tokio::test]
    async fn feed_returns_full_backing_set() {
        let service = zero_latency_service();

        let feed = service.get_live_feed().await.unwrap();

        assert_eq!(feed.total, 6);
        assert_eq!(feed.scans.len(), 6);

        let patients: BTreeSet<_> = feed.scans.iter().map(|s| s.patient_id.clone()).collect();
        assert_eq!(patients.len(), 6, "no backing entry may repeat");
    }

    #[tokio::test]
    async fn flagged_count_is_consistent_with_entries() {
        let service = zero_latency_service();

        let feed = service.get_live_feed().await.unwrap();
        let below = feed.scans.iter().filter(|s| s.confidence < 0.85).count();
        assert_eq!(feed.flagged_count, below);
    }

    #[tokio::test]
    async fn consecutive_calls_reshuffle_independently() {
        let service = zero_latency_service();

        // With 6! = 720 orderings, 20 identical draws in a row are
        // effectively impossible; ordering stability is not guaranteed.
        let first = service.get_live_feed().await.unwrap();
        let mut saw_different = false;
        for _ in 0..20 {
            let next = service.get_live_feed().await.unwrap();
            let same_order = first
                .scans
                .iter()
                .zip(next.scans.iter())
                .all(|(a, b)| a.patient_id == b.patient_id);
            if !same_order {
                saw_different = true;
                break;
            }
        }
        assert!(saw_different);
    }
}
