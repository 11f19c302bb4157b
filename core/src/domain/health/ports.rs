use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::HealthStatus};

/// Liveness reporting for container orchestration. Must stay reachable
/// independent of the request error paths.
#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn health(&self) -> impl Future<Output = Result<HealthStatus, CoreError>> + Send;
}
