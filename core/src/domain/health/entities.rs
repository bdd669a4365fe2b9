use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct StoreCounts {
    pub recipes: usize,
    pub workouts: usize,
    pub foods: usize,
    pub exercise_logs: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProviderStatus {
    pub name: String,
    pub configured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReadinessReport {
    pub status: String,
    pub stores: StoreCounts,
    pub providers: Vec<ProviderStatus>,
    pub checked_at: DateTime<Utc>,
}
