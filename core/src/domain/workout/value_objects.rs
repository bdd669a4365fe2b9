use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::Difficulty,
    workout::entities::{Workout, WorkoutConfig, WorkoutExercise},
};

#[derive(Debug, Clone)]
pub struct CreateWorkoutInput {
    pub workout: WorkoutConfig,
}

impl CreateWorkoutInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_workout_fields(
            &self.workout.name,
            self.workout.duration_minutes,
            &self.workout.exercises,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateWorkoutInput {
    pub workout_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub duration_minutes: Option<u32>,
    pub calories_burned: Option<f64>,
    pub equipment: Option<Vec<String>>,
    pub exercises: Option<Vec<WorkoutExercise>>,
}

impl UpdateWorkoutInput {
    pub fn apply(self, workout: &mut Workout) -> Result<(), CoreError> {
        if let Some(name) = self.name {
            workout.name = name;
        }
        if let Some(description) = self.description {
            workout.description = description;
        }
        if let Some(category) = self.category {
            workout.category = category;
        }
        if let Some(difficulty) = self.difficulty {
            workout.difficulty = difficulty;
        }
        if let Some(duration) = self.duration_minutes {
            workout.duration_minutes = duration;
        }
        if let Some(calories) = self.calories_burned {
            workout.calories_burned = calories;
        }
        if let Some(equipment) = self.equipment {
            workout.equipment = equipment;
        }
        if let Some(exercises) = self.exercises {
            workout.exercises = exercises;
        }

        validate_workout_fields(&workout.name, workout.duration_minutes, &workout.exercises)?;
        workout.updated_at = chrono::Utc::now();
        Ok(())
    }
}

fn validate_workout_fields(
    name: &str,
    duration_minutes: u32,
    exercises: &[WorkoutExercise],
) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Invalid("workout name is required".to_string()));
    }
    if duration_minutes == 0 {
        return Err(CoreError::Invalid(
            "workout must last at least one minute".to_string(),
        ));
    }
    if exercises.is_empty() {
        return Err(CoreError::Invalid(
            "workout needs at least one exercise".to_string(),
        ));
    }
    Ok(())
}
