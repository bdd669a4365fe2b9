use std::time::Instant;

use chrono::Utc;

use crate::domain::{
    admin::ports::AdminAuthenticator,
    common::{entities::app_errors::CoreError, ports::Repository, services::Service},
    exercise::{entities::ExerciseLog, ports::ExerciseEstimator},
    food::{entities::Food, ports::NutritionProvider},
    health::{
        entities::{ProviderStatus, ReadinessReport, StoreCounts},
        ports::HealthCheckService,
    },
    recipe::entities::Recipe,
    recognition::ports::VisionClient,
    workout::entities::Workout,
};

impl<R, W, F, L, V, P, S, E, A> Service<R, W, F, L, V, P, S, E, A>
where
    R: Repository<Recipe>,
    W: Repository<Workout>,
    F: Repository<Food>,
    L: Repository<ExerciseLog>,
    V: VisionClient,
    P: NutritionProvider,
    S: NutritionProvider,
    E: ExerciseEstimator,
    A: AdminAuthenticator,
{
    pub(crate) async fn store_counts(&self) -> Result<StoreCounts, CoreError> {
        Ok(StoreCounts {
            recipes: self.recipe_repository.count().await?,
            workouts: self.workout_repository.count().await?,
            foods: self.food_repository.count().await?,
            exercise_logs: self.exercise_log_repository.count().await?,
        })
    }

    pub(crate) fn provider_statuses(&self) -> Vec<ProviderStatus> {
        [
            ("vision", self.vision_client.is_configured()),
            (
                self.primary_nutrition_provider.name(),
                self.primary_nutrition_provider.is_configured(),
            ),
            (
                self.secondary_nutrition_provider.name(),
                self.secondary_nutrition_provider.is_configured(),
            ),
            ("nutritionix", self.exercise_estimator.is_configured()),
        ]
        .into_iter()
        .map(|(name, configured)| ProviderStatus {
            name: name.to_string(),
            configured,
        })
        .collect()
    }
}

impl<R, W, F, L, V, P, S, E, A> HealthCheckService for Service<R, W, F, L, V, P, S, E, A>
where
    R: Repository<Recipe>,
    W: Repository<Workout>,
    F: Repository<Food>,
    L: Repository<ExerciseLog>,
    V: VisionClient,
    P: NutritionProvider,
    S: NutritionProvider,
    E: ExerciseEstimator,
    A: AdminAuthenticator,
{
    async fn health(&self) -> Result<u64, CoreError> {
        let started = Instant::now();
        self.store_counts().await?;
        Ok(started.elapsed().as_millis() as u64)
    }

    async fn readiness(&self) -> Result<ReadinessReport, CoreError> {
        Ok(ReadinessReport {
            status: "ok".to_string(),
            stores: self.store_counts().await?,
            providers: self.provider_statuses(),
            checked_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_support::test_service;

    #[tokio::test]
    async fn readiness_reports_unconfigured_providers() {
        let service = test_service();

        let report = service.readiness().await.unwrap();

        assert_eq!(report.status, "ok");
        assert_eq!(report.stores, StoreCounts::default());
        assert_eq!(report.providers.len(), 4);
        assert!(report.providers.iter().all(|p| !p.configured));
    }
}
