use crate::domain::{
    analysis::ports::FoodAnalyzer,
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    evaluation::{
        entities::{FeedbackRecord, MetricsSnapshot},
        ports::{EvaluationService, FeedbackRepository},
        value_objects::SubmitFeedbackInput,
    },
    feed::ports::ScanRepository,
};

impl<A, S, F, C> EvaluationService for Service<A, S, F, C>
where
    A: FoodAnalyzer,
    S: ScanRepository,
    F: FeedbackRepository,
    C: Clock,
{
    async fn submit_feedback(&self, input: SubmitFeedbackInput) -> Result<usize, CoreError> {
        let record = FeedbackRecord::new(
            input.scan_id,
            input.is_correct,
            input.actual_food,
            self.clock.now(),
        );

        tracing::info!(
            scan_id = %record.scan_id,
            correct = record.is_correct,
            actual = %record.actual_food,
            "feedback received"
        );

        self.feedback_repository.append(record).await
    }

    async fn compute_metrics(&self) -> Result<MetricsSnapshot, CoreError> {
        let records = self.feedback_repository.list_all().await?;
        let snapshot = MetricsSnapshot::from_records(&records);

        tracing::info!(
            precision = snapshot.precision,
            samples = snapshot.sample_size,
            drift = ?snapshot.drift_status,
            "metrics requested"
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{NutriguardService, create_service};
    use crate::domain::common::{AnalysisConfig, NutriguardConfig};
    use crate::domain::evaluation::entities::DriftStatus;
    use std::time::Duration;

    fn service() -> NutriguardService {
        create_service(NutriguardConfig {
            analysis: AnalysisConfig {
                latency: Duration::ZERO,
            },
        })
    }

    fn feedback(scan_id: &str, is_correct: bool) -> SubmitFeedbackInput {
        SubmitFeedbackInput {
            scan_id: scan_id.to_string(),
            is_correct,
            actual_food: "Sockeye Salmon".to_string(),
        }
    }

    #[tokio::test]
    async fn sequential_submissions_return_running_totals() {
        let service = service();

        for n in 1..=5 {
            let count = service
                .submit_feedback(feedback(&format!("scan-{n}"), true))
                .await
                .unwrap();
            assert_eq!(count, n);
        }
    }

    #[tokio::test]
    async fn metrics_reflect_accumulated_feedback() {
        let service = service();

        for (i, is_correct) in [true, true, false, true].into_iter().enumerate() {
            service
                .submit_feedback(feedback(&format!("scan-{}", i + 1), is_correct))
                .await
                .unwrap();
        }

        let snapshot = service.compute_metrics().await.unwrap();
        assert_eq!(snapshot.precision, 0.75);
        assert_eq!(snapshot.sample_size, 4);
        assert_eq!(snapshot.drift_status, DriftStatus::DriftDetected);
    }

    #[tokio::test]
    async fn metrics_without_feedback_report_baseline() {
        let snapshot = service().compute_metrics().await.unwrap();
        assert_eq!(snapshot.precision, 0.92);
        assert_eq!(snapshot.sample_size, 0);
        assert_eq!(snapshot.drift_status, DriftStatus::Stable);
    }

    #[tokio::test]
    async fn concurrent_submissions_lose_no_records() {
        let service = service();

        let mut handles = Vec::new();
        for n in 0..32 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .submit_feedback(SubmitFeedbackInput {
                        scan_id: format!("scan-{n}"),
                        is_correct: n % 2 == 0,
                        actual_food: "Greek Yogurt".to_string(),
                    })
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let snapshot = service.compute_metrics().await.unwrap();
        assert_eq!(snapshot.sample_size, 32);
    }
}
