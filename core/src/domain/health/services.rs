use crate::domain::{
    analysis::ports::FoodAnalyzer,
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    evaluation::ports::FeedbackRepository,
    feed::ports::ScanRepository,
    health::{entities::HealthStatus, ports::HealthCheckService},
};

impl<A, S, F, C> HealthCheckService for Service<A, S, F, C>
where
    A: FoodAnalyzer,
    S: ScanRepository,
    F: FeedbackRepository,
    C: Clock,
{
    async fn health(&self) -> Result<HealthStatus, CoreError> {
        Ok(HealthStatus::healthy())
    }
}
