use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{
        generate_timestamp,
        ports::Entity,
        query::{FieldValue, Filterable},
    },
    recipe::entities::Difficulty,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub calories_burned: f64,
    pub equipment: Vec<String>,
    pub exercises: Vec<WorkoutExercise>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutExercise {
    pub name: String,
    pub sets: u32,
    pub reps: Option<u32>,
    pub duration_seconds: Option<u32>,
    pub rest_seconds: u32,
}

#[derive(Debug, Clone)]
pub struct WorkoutConfig {
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub calories_burned: f64,
    pub equipment: Vec<String>,
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    pub fn new(config: WorkoutConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            description: config.description,
            category: config.category,
            difficulty: config.difficulty,
            duration_minutes: config.duration_minutes,
            calories_burned: config.calories_burned,
            equipment: config.equipment,
            exercises: config.exercises,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Workout {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Filterable for Workout {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "category",
        "difficulty",
        "duration_minutes",
        "calories_burned",
        "equipment",
        "created_at",
        "updated_at",
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "description", "exercises"];

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "name" => FieldValue::Text(self.name.clone()),
            "description" => FieldValue::Text(self.description.clone()),
            "category" => FieldValue::Text(self.category.clone()),
            "difficulty" => FieldValue::Text(self.difficulty.as_str().to_string()),
            "duration_minutes" => FieldValue::Number(self.duration_minutes as f64),
            "calories_burned" => FieldValue::Number(self.calories_burned),
            "equipment" => FieldValue::List(self.equipment.clone()),
            "exercises" => {
                FieldValue::List(self.exercises.iter().map(|e| e.name.clone()).collect())
            }
            "created_at" => FieldValue::Text(self.created_at.to_rfc3339()),
            "updated_at" => FieldValue::Text(self.updated_at.to_rfc3339()),
            _ => return None,
        };
        Some(value)
    }
}
