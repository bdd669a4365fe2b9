use fitpulse_core::domain::{recipe::entities::Difficulty, workout::entities::WorkoutExercise};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    pub difficulty: Difficulty,

    #[validate(range(min = 1, message = "duration must be at least 1 minute"))]
    pub duration_minutes: u32,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "calories_burned cannot be negative"))]
    pub calories_burned: f64,

    #[serde(default)]
    pub equipment: Vec<String>,

    #[validate(length(min = 1, message = "at least one exercise is required"))]
    pub exercises: Vec<WorkoutExercise>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateWorkoutValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    #[validate(range(min = 1, message = "duration must be at least 1 minute"))]
    pub duration_minutes: Option<u32>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "calories_burned cannot be negative"))]
    pub calories_burned: Option<f64>,

    #[serde(default)]
    pub equipment: Option<Vec<String>>,

    #[serde(default)]
    pub exercises: Option<Vec<WorkoutExercise>>,
}
