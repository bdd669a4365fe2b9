use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    exercise::{
        entities::{ExerciseEstimate, ExerciseEstimation, ExerciseLog},
        value_objects::{EstimateExerciseInput, LogExerciseInput},
    },
};

/// Natural-language exercise calorie estimator.
#[cfg_attr(test, mockall::automock)]
pub trait ExerciseEstimator: Send + Sync {
    fn is_configured(&self) -> bool;

    fn estimate(
        &self,
        query: String,
        weight_kg: Option<f64>,
    ) -> impl Future<Output = Result<Vec<ExerciseEstimate>, CoreError>> + Send;
}

pub trait ExerciseService: Send + Sync {
    fn estimate_exercise(
        &self,
        input: EstimateExerciseInput,
    ) -> impl Future<Output = Result<ExerciseEstimation, CoreError>> + Send;

    fn log_exercise(
        &self,
        device_id: String,
        input: LogExerciseInput,
    ) -> impl Future<Output = Result<ExerciseLog, CoreError>> + Send;

    /// Newest first.
    fn get_exercise_logs(
        &self,
        device_id: String,
    ) -> impl Future<Output = Result<Vec<ExerciseLog>, CoreError>> + Send;

    /// Logs owned by another device are reported as not found.
    fn delete_exercise_log(
        &self,
        device_id: String,
        log_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
