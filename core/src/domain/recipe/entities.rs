use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{
    generate_timestamp,
    ports::Entity,
    query::{FieldValue, Filterable},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub cuisine: String,
    pub difficulty: Difficulty,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    pub nutrition: RecipeNutrition,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Per serving.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct RecipeNutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Fields needed to create a recipe; timestamps and id are generated.
#[derive(Debug, Clone)]
pub struct RecipeConfig {
    pub name: String,
    pub description: String,
    pub category: String,
    pub cuisine: String,
    pub difficulty: Difficulty,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    pub nutrition: RecipeNutrition,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
}

impl Recipe {
    pub fn new(config: RecipeConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            description: config.description,
            category: config.category,
            cuisine: config.cuisine,
            difficulty: config.difficulty,
            prep_time_minutes: config.prep_time_minutes,
            cook_time_minutes: config.cook_time_minutes,
            servings: config.servings,
            ingredients: config.ingredients,
            instructions: config.instructions,
            nutrition: config.nutrition,
            tags: config.tags,
            image_url: config.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes + self.cook_time_minutes
    }
}

impl Entity for Recipe {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Filterable for Recipe {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "category",
        "cuisine",
        "difficulty",
        "prep_time_minutes",
        "cook_time_minutes",
        "total_time_minutes",
        "servings",
        "calories",
        "protein",
        "tags",
        "created_at",
        "updated_at",
    ];
    const SEARCH_FIELDS: &'static [&'static str] =
        &["name", "description", "cuisine", "tags", "ingredients"];

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "name" => FieldValue::Text(self.name.clone()),
            "description" => FieldValue::Text(self.description.clone()),
            "category" => FieldValue::Text(self.category.clone()),
            "cuisine" => FieldValue::Text(self.cuisine.clone()),
            "difficulty" => FieldValue::Text(self.difficulty.as_str().to_string()),
            "prep_time_minutes" => FieldValue::Number(self.prep_time_minutes as f64),
            "cook_time_minutes" => FieldValue::Number(self.cook_time_minutes as f64),
            "total_time_minutes" => FieldValue::Number(self.total_time_minutes() as f64),
            "servings" => FieldValue::Number(self.servings as f64),
            "calories" => FieldValue::Number(self.nutrition.calories),
            "protein" => FieldValue::Number(self.nutrition.protein),
            "tags" => FieldValue::List(self.tags.clone()),
            "ingredients" => {
                FieldValue::List(self.ingredients.iter().map(|i| i.name.clone()).collect())
            }
            "created_at" => FieldValue::Text(self.created_at.to_rfc3339()),
            "updated_at" => FieldValue::Text(self.updated_at.to_rfc3339()),
            _ => return None,
        };
        Some(value)
    }
}
