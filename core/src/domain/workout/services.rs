use tracing::info;
use uuid::Uuid;

use crate::domain::{
    admin::{ports::AdminAuthenticator, value_objects::Identity},
    common::{
        entities::app_errors::CoreError, policies::ensure_policy, ports::Repository,
        query::ListQuery, services::Service,
    },
    exercise::{entities::ExerciseLog, ports::ExerciseEstimator},
    food::{entities::Food, ports::NutritionProvider},
    recipe::entities::Recipe,
    recognition::ports::VisionClient,
    workout::{
        entities::Workout,
        ports::WorkoutService,
        value_objects::{CreateWorkoutInput, UpdateWorkoutInput},
    },
};

impl<R, W, F, L, V, P, S, E, A> WorkoutService for Service<R, W, F, L, V, P, S, E, A>
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
    async fn get_workouts(&self, query: ListQuery) -> Result<Vec<Workout>, CoreError> {
        query.validate::<Workout>()?;
        self.workout_repository.list(query).await
    }

    async fn get_workout(&self, workout_id: Uuid) -> Result<Workout, CoreError> {
        self.workout_repository
            .get(workout_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_workout(
        &self,
        identity: Identity,
        input: CreateWorkoutInput,
    ) -> Result<Workout, CoreError> {
        ensure_policy(
            self.policy.can_manage_content(&identity),
            "insufficient permissions to create workouts",
        )?;
        input.validate()?;

        let workout = self
            .workout_repository
            .add(Workout::new(input.workout))
            .await?;
        info!(workout_id = %workout.id, by = identity.subject(), "workout created");

        Ok(workout)
    }

    async fn update_workout(
        &self,
        identity: Identity,
        input: UpdateWorkoutInput,
    ) -> Result<Workout, CoreError> {
        ensure_policy(
            self.policy.can_manage_content(&identity),
            "insufficient permissions to update workouts",
        )?;

        let mut workout = self
            .workout_repository
            .get(input.workout_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        input.apply(&mut workout)?;

        self.workout_repository.update(workout).await
    }

    async fn delete_workout(&self, identity: Identity, workout_id: Uuid) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_content(&identity),
            "insufficient permissions to delete workouts",
        )?;

        self.workout_repository.delete(workout_id).await?;
        info!(%workout_id, by = identity.subject(), "workout deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{
            query::{ConditionOperator, SortDirection},
            test_support::{admin_identity, test_service},
        },
        recipe::entities::Difficulty,
        workout::entities::{WorkoutConfig, WorkoutExercise},
    };

    fn workout(name: &str, minutes: u32, difficulty: Difficulty) -> CreateWorkoutInput {
        CreateWorkoutInput {
            workout: WorkoutConfig {
                name: name.to_string(),
                description: format!("{} session", name),
                category: "strength".to_string(),
                difficulty,
                duration_minutes: minutes,
                calories_burned: minutes as f64 * 8.0,
                equipment: vec!["dumbbells".to_string()],
                exercises: vec![WorkoutExercise {
                    name: "goblet squat".to_string(),
                    sets: 3,
                    reps: Some(12),
                    duration_seconds: None,
                    rest_seconds: 60,
                }],
            },
        }
    }

    #[tokio::test]
    async fn list_filters_and_sorts() {
        let service = test_service();
        for (name, minutes, difficulty) in [
            ("Leg Day", 45, Difficulty::Hard),
            ("Quick Pump", 20, Difficulty::Easy),
            ("Full Body", 35, Difficulty::Medium),
        ] {
            service
                .create_workout(admin_identity(), workout(name, minutes, difficulty))
                .await
                .unwrap();
        }

        let query = ListQuery::default()
            .with_condition("duration_minutes", ConditionOperator::Gte, "30")
            .sorted_by("duration_minutes", SortDirection::Asc);
        let names: Vec<String> = service
            .get_workouts(query)
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.name)
            .collect();

        assert_eq!(names, vec!["Full Body", "Leg Day"]);
    }

    #[tokio::test]
    async fn unknown_filter_field_is_invalid() {
        let service = test_service();
        let query = ListQuery::default().with_condition("price", ConditionOperator::Eq, "3");

        assert!(matches!(
            service.get_workouts(query).await,
            Err(CoreError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn anonymous_identity_cannot_delete() {
        let service = test_service();
        let created = service
            .create_workout(admin_identity(), workout("Core", 15, Difficulty::Easy))
            .await
            .unwrap();

        let result = service
            .delete_workout(Identity::Anonymous, created.id)
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
        assert!(service.get_workout(created.id).await.is_ok());
    }

    #[tokio::test]
    async fn deleting_missing_workout_is_not_found() {
        let service = test_service();
        let result = service
            .delete_workout(admin_identity(), Uuid::new_v4())
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }
}
