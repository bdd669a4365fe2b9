use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{
    generate_timestamp,
    ports::Entity,
    query::{FieldValue, Filterable},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseSource {
    /// Calories entered by the user.
    Manual,
    Nutritionix,
    /// Local MET-table estimate.
    Estimate,
}

impl ExerciseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseSource::Manual => "manual",
            ExerciseSource::Nutritionix => "nutritionix",
            ExerciseSource::Estimate => "estimate",
        }
    }
}

/// One logged exercise session, owned by the device that created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseLog {
    pub id: Uuid,
    pub device_id: String,
    pub exercise_name: String,
    pub duration_minutes: f64,
    pub calories_burned: f64,
    pub source: ExerciseSource,
    pub notes: Option<String>,
    pub logged_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

pub struct ExerciseLogConfig {
    pub device_id: String,
    pub exercise_name: String,
    pub duration_minutes: f64,
    pub calories_burned: f64,
    pub source: ExerciseSource,
    pub notes: Option<String>,
    pub logged_at: Option<DateTime<Utc>>,
}

impl ExerciseLog {
    pub fn new(config: ExerciseLogConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            device_id: config.device_id,
            exercise_name: config.exercise_name,
            duration_minutes: config.duration_minutes,
            calories_burned: config.calories_burned,
            source: config.source,
            notes: config.notes,
            logged_at: config.logged_at.unwrap_or(now),
            created_at: now,
        }
    }
}

impl Entity for ExerciseLog {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Filterable for ExerciseLog {
    const FIELDS: &'static [&'static str] = &[
        "device_id",
        "exercise_name",
        "duration_minutes",
        "calories_burned",
        "source",
        "logged_at",
        "created_at",
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["exercise_name", "notes"];

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "device_id" => FieldValue::Text(self.device_id.clone()),
            "exercise_name" => FieldValue::Text(self.exercise_name.clone()),
            "duration_minutes" => FieldValue::Number(self.duration_minutes),
            "calories_burned" => FieldValue::Number(self.calories_burned),
            "source" => FieldValue::Text(self.source.as_str().to_string()),
            "notes" => FieldValue::Text(self.notes.clone()?),
            "logged_at" => FieldValue::Text(self.logged_at.to_rfc3339()),
            "created_at" => FieldValue::Text(self.created_at.to_rfc3339()),
            _ => return None,
        };
        Some(value)
    }
}

/// Calories burned for one exercise parsed from a natural-language query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseEstimate {
    pub name: String,
    pub duration_minutes: f64,
    pub calories_burned: f64,
    pub met: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseEstimation {
    pub query: String,
    pub source: ExerciseSource,
    pub exercises: Vec<ExerciseEstimate>,
    pub total_calories: f64,
}
