use futures::FutureExt;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    admin::ports::AdminAuthenticator,
    common::{
        entities::app_errors::CoreError,
        ports::Repository,
        query::{ConditionOperator, ListQuery, SortDirection},
        resolver::{Resolved, Strategy, resolve_first},
        services::Service,
    },
    exercise::{
        entities::{
            ExerciseEstimate, ExerciseEstimation, ExerciseLog, ExerciseLogConfig, ExerciseSource,
        },
        met_table::{DEFAULT_DURATION_MINUTES, estimate_with_met},
        ports::{ExerciseEstimator, ExerciseService},
        value_objects::{EstimateExerciseInput, LogExerciseInput},
    },
    food::{entities::Food, ports::NutritionProvider},
    recipe::entities::Recipe,
    recognition::ports::VisionClient,
    workout::entities::Workout,
};

const NUTRITIONIX_STRATEGY: &str = "nutritionix";
const MET_STRATEGY: &str = "met-table";

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
    async fn resolve_estimates(
        &self,
        query: &str,
        weight_kg: Option<f64>,
    ) -> Result<Resolved<Vec<ExerciseEstimate>>, CoreError> {
        let remote_query = query.to_string();
        let estimator = self.exercise_estimator.as_ref();

        let nutritionix = Strategy::new(
            NUTRITIONIX_STRATEGY,
            async move {
                if !estimator.is_configured() {
                    return Err(CoreError::ProviderNotConfigured(
                        NUTRITIONIX_STRATEGY.to_string(),
                    ));
                }
                let estimates = estimator.estimate(remote_query, weight_kg).await?;
                if estimates.is_empty() {
                    return Err(CoreError::ExternalServiceError(
                        "no exercise recognized".to_string(),
                    ));
                }
                Ok(estimates)
            }
            .boxed(),
        );

        let local_query = query.to_string();
        let met = Strategy::new(
            MET_STRATEGY,
            async move { Ok(vec![estimate_with_met(&local_query, weight_kg)]) }.boxed(),
        );

        resolve_first("exercise_estimate", vec![nutritionix, met]).await
    }
}

fn source_for(strategy: &str) -> ExerciseSource {
    if strategy == NUTRITIONIX_STRATEGY {
        ExerciseSource::Nutritionix
    } else {
        ExerciseSource::Estimate
    }
}

impl<R, W, F, L, V, P, S, E, A> ExerciseService for Service<R, W, F, L, V, P, S, E, A>
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
    async fn estimate_exercise(
        &self,
        input: EstimateExerciseInput,
    ) -> Result<ExerciseEstimation, CoreError> {
        input.validate()?;
        let query = input.query.trim().to_string();

        let resolved = self.resolve_estimates(&query, input.weight_kg).await?;
        let total_calories = resolved.value.iter().map(|e| e.calories_burned).sum();

        Ok(ExerciseEstimation {
            query,
            source: source_for(resolved.strategy),
            exercises: resolved.value,
            total_calories,
        })
    }

    async fn log_exercise(
        &self,
        device_id: String,
        input: LogExerciseInput,
    ) -> Result<ExerciseLog, CoreError> {
        input.validate()?;

        let (duration_minutes, calories_burned, source) = match input.calories_burned {
            Some(calories) => (
                input.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES),
                calories,
                ExerciseSource::Manual,
            ),
            None => {
                let resolved = self
                    .resolve_estimates(&input.estimate_query(), input.weight_kg)
                    .await?;
                let calories = resolved.value.iter().map(|e| e.calories_burned).sum();
                let duration = input.duration_minutes.unwrap_or_else(|| {
                    resolved.value.iter().map(|e| e.duration_minutes).sum()
                });
                (duration, calories, source_for(resolved.strategy))
            }
        };

        let log = self
            .exercise_log_repository
            .add(ExerciseLog::new(ExerciseLogConfig {
                device_id,
                exercise_name: input.exercise_name.trim().to_string(),
                duration_minutes,
                calories_burned,
                source,
                notes: input.notes,
                logged_at: input.logged_at,
            }))
            .await?;

        info!(
            log_id = %log.id,
            device_id = %log.device_id,
            source = log.source.as_str(),
            "exercise logged"
        );

        Ok(log)
    }

    async fn get_exercise_logs(&self, device_id: String) -> Result<Vec<ExerciseLog>, CoreError> {
        let query = ListQuery::default()
            .with_condition("device_id", ConditionOperator::Eq, device_id)
            .sorted_by("logged_at", SortDirection::Desc)
            .sorted_by("created_at", SortDirection::Desc);

        self.exercise_log_repository.list(query).await
    }

    async fn delete_exercise_log(&self, device_id: String, log_id: Uuid) -> Result<(), CoreError> {
        let log = self
            .exercise_log_repository
            .get(log_id)
            .await?
            .filter(|log| log.device_id == device_id)
            .ok_or(CoreError::NotFound)?;

        self.exercise_log_repository.delete(log.id).await?;
        info!(%log_id, %device_id, "exercise log deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::{
        common::test_support::{TestProviders, test_service},
        exercise::ports::MockExerciseEstimator,
    };

    fn nutritionix_returning(
        result: Result<Vec<ExerciseEstimate>, CoreError>,
    ) -> MockExerciseEstimator {
        let mut estimator = MockExerciseEstimator::new();
        estimator.expect_is_configured().return_const(true);
        estimator.expect_estimate().returning(move |_, _| {
            let result = result.clone();
            Box::pin(async move { result })
        });
        estimator
    }

    fn run_estimate() -> ExerciseEstimate {
        ExerciseEstimate {
            name: "running".to_string(),
            duration_minutes: 30.0,
            calories_burned: 350.0,
            met: Some(9.8),
        }
    }

    #[tokio::test]
    async fn nutritionix_is_used_when_configured() {
        let service = TestProviders {
            estimator: nutritionix_returning(Ok(vec![run_estimate()])),
            ..Default::default()
        }
        .build();

        let estimation = service
            .estimate_exercise(EstimateExerciseInput {
                query: "ran 30 minutes".to_string(),
                weight_kg: None,
            })
            .await
            .unwrap();

        assert_eq!(estimation.source, ExerciseSource::Nutritionix);
        assert_eq!(estimation.total_calories, 350.0);
    }

    #[tokio::test]
    async fn provider_failure_uses_met_table() {
        let service = TestProviders {
            estimator: nutritionix_returning(Err(CoreError::ExternalServiceError(
                "401".to_string(),
            ))),
            ..Default::default()
        }
        .build();

        let estimation = service
            .estimate_exercise(EstimateExerciseInput {
                query: "walking 1 hour".to_string(),
                weight_kg: Some(70.0),
            })
            .await
            .unwrap();

        assert_eq!(estimation.source, ExerciseSource::Estimate);
        // 3.5 * 70 * 1
        assert_eq!(estimation.total_calories, 245.0);
    }

    #[tokio::test]
    async fn manual_calories_skip_estimation() {
        let service = test_service();

        let log = service
            .log_exercise(
                "device-a".to_string(),
                LogExerciseInput {
                    exercise_name: "Climbing".to_string(),
                    duration_minutes: Some(40.0),
                    calories_burned: Some(420.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(log.source, ExerciseSource::Manual);
        assert_eq!(log.calories_burned, 420.0);
        assert_eq!(log.duration_minutes, 40.0);
    }

    #[tokio::test]
    async fn logs_without_calories_are_estimated() {
        let service = test_service();

        let log = service
            .log_exercise(
                "device-a".to_string(),
                LogExerciseInput {
                    exercise_name: "yoga".to_string(),
                    duration_minutes: Some(60.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(log.source, ExerciseSource::Estimate);
        // 2.5 * 70 * 1
        assert_eq!(log.calories_burned, 175.0);
    }

    #[tokio::test]
    async fn logs_are_scoped_to_device_and_newest_first() {
        let service = test_service();
        let now = Utc::now();

        for (device, name, offset) in [
            ("device-a", "walk", 2),
            ("device-b", "swim", 1),
            ("device-a", "run", 0),
        ] {
            service
                .log_exercise(
                    device.to_string(),
                    LogExerciseInput {
                        exercise_name: name.to_string(),
                        calories_burned: Some(100.0),
                        logged_at: Some(now - Duration::hours(offset)),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
        }

        let logs = service
            .get_exercise_logs("device-a".to_string())
            .await
            .unwrap();
        let names: Vec<_> = logs.iter().map(|l| l.exercise_name.as_str()).collect();
        assert_eq!(names, vec!["run", "walk"]);
    }

    #[tokio::test]
    async fn other_device_cannot_delete_log() {
        let service = test_service();
        let log = service
            .log_exercise(
                "device-a".to_string(),
                LogExerciseInput {
                    exercise_name: "walk".to_string(),
                    calories_burned: Some(80.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let result = service
            .delete_exercise_log("device-b".to_string(), log.id)
            .await;
        assert_eq!(result, Err(CoreError::NotFound));

        service
            .delete_exercise_log("device-a".to_string(), log.id)
            .await
            .unwrap();
        assert!(
            service
                .get_exercise_logs("device-a".to_string())
                .await
                .unwrap()
                .is_empty()
        );
    }
}
