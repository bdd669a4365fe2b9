use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct EstimateExerciseValidator {
    /// Natural-language description, e.g. "ran 5k and cycled 30 min"
    #[validate(length(min = 1, max = 500, message = "query must be 1 to 500 characters"))]
    pub query: String,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, max = 500.0, message = "weight_kg must be in (0, 500]"))]
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LogExerciseValidator {
    #[validate(length(min = 1, max = 200, message = "exercise_name must be 1 to 200 characters"))]
    pub exercise_name: String,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "duration_minutes must be positive"))]
    pub duration_minutes: Option<f64>,

    /// When given, the log is stored as-is and no estimate is made
    #[serde(default)]
    #[validate(range(min = 0.0, message = "calories_burned cannot be negative"))]
    pub calories_burned: Option<f64>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, max = 500.0, message = "weight_kg must be in (0, 500]"))]
    pub weight_kg: Option<f64>,

    #[serde(default)]
    #[validate(length(max = 1000, message = "notes must be at most 1000 characters"))]
    pub notes: Option<String>,

    #[serde(default)]
    pub logged_at: Option<DateTime<Utc>>,
}
