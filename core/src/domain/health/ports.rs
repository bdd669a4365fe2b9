use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::ReadinessReport};

pub trait HealthCheckService: Send + Sync {
    /// Milliseconds spent reaching every store.
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn readiness(&self) -> impl Future<Output = Result<ReadinessReport, CoreError>> + Send;
}
