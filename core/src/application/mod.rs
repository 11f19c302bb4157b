use crate::domain::common::{NutriguardConfig, services::Service};
use crate::infrastructure::{
    analysis::MockFoodAnalyzer, clock::SystemClock, evaluation::InMemoryFeedbackRepository,
    feed::FixtureScanRepository,
};

/// The default service wiring: mock analyzer, fixture feed, in-memory
/// feedback log, wall clock.
pub type NutriguardService =
    Service<MockFoodAnalyzer, FixtureScanRepository, InMemoryFeedbackRepository, SystemClock>;

pub fn create_service(config: NutriguardConfig) -> NutriguardService {
    Service::new(
        MockFoodAnalyzer::new(config.analysis.latency),
        FixtureScanRepository,
        InMemoryFeedbackRepository::default(),
        SystemClock,
    )
}
