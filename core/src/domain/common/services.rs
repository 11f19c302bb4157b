use crate::domain::{
    analysis::ports::FoodAnalyzer, common::ports::Clock, evaluation::ports::FeedbackRepository,
    feed::ports::ScanRepository,
};

/// Aggregate service wiring every port together. The domain service traits
/// (`AnalysisService`, `LiveFeedService`, `EvaluationService`,
/// `HealthCheckService`) are implemented on this struct in their own
/// modules.
#[derive(Debug, Clone)]
pub struct Service<A, S, F, C>
where
    A: FoodAnalyzer,
    S: ScanRepository,
    F: FeedbackRepository,
    C: Clock,
{
    pub analyzer: A,
    pub scan_repository: S,
    pub feedback_repository: F,
    pub clock: C,
}

impl<A, S, F, C> Service<A, S, F, C>
where
    A: FoodAnalyzer,
    S: ScanRepository,
    F: FeedbackRepository,
    C: Clock,
{
    pub fn new(analyzer: A, scan_repository: S, feedback_repository: F, clock: C) -> Self {
        Self {
            analyzer,
            scan_repository,
            feedback_repository,
            clock,
        }
    }
}
