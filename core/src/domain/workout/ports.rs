use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    admin::value_objects::Identity,
    common::{entities::app_errors::CoreError, query::ListQuery},
    workout::{
        entities::Workout,
        value_objects::{CreateWorkoutInput, UpdateWorkoutInput},
    },
};

pub trait WorkoutService: Send + Sync {
    fn get_workouts(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Vec<Workout>, CoreError>> + Send;

    fn get_workout(
        &self,
        workout_id: Uuid,
    ) -> impl Future<Output = Result<Workout, CoreError>> + Send;

    fn create_workout(
        &self,
        identity: Identity,
        input: CreateWorkoutInput,
    ) -> impl Future<Output = Result<Workout, CoreError>> + Send;

    fn update_workout(
        &self,
        identity: Identity,
        input: UpdateWorkoutInput,
    ) -> impl Future<Output = Result<Workout, CoreError>> + Send;

    fn delete_workout(
        &self,
        identity: Identity,
        workout_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
