use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{
    generate_timestamp,
    ports::Entity,
    query::{FieldValue, Filterable},
};

/// Food item curated by the admin console. Nutrition is per serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Food {
    pub id: Uuid,
    pub name: String,
    pub brand: Option<String>,
    pub category: String,
    pub serving_size: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FoodConfig {
    pub name: String,
    pub brand: Option<String>,
    pub category: String,
    pub serving_size: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
}

impl Food {
    pub fn new(config: FoodConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            brand: config.brand,
            category: config.category,
            serving_size: config.serving_size,
            calories: config.calories,
            protein: config.protein,
            carbs: config.carbs,
            fat: config.fat,
            fiber: config.fiber,
            sugar: config.sugar,
            sodium: config.sodium,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Food {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Filterable for Food {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "brand",
        "category",
        "calories",
        "protein",
        "carbs",
        "fat",
        "fiber",
        "sugar",
        "sodium",
        "created_at",
        "updated_at",
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "brand", "category"];

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "name" => FieldValue::Text(self.name.clone()),
            "brand" => FieldValue::Text(self.brand.clone()?),
            "category" => FieldValue::Text(self.category.clone()),
            "calories" => FieldValue::Number(self.calories),
            "protein" => FieldValue::Number(self.protein),
            "carbs" => FieldValue::Number(self.carbs),
            "fat" => FieldValue::Number(self.fat),
            "fiber" => FieldValue::Number(self.fiber),
            "sugar" => FieldValue::Number(self.sugar),
            "sodium" => FieldValue::Number(self.sodium),
            "created_at" => FieldValue::Text(self.created_at.to_rfc3339()),
            "updated_at" => FieldValue::Text(self.updated_at.to_rfc3339()),
            _ => return None,
        };
        Some(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FoodSource {
    FatSecret,
    Usda,
    Local,
}

impl FoodSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodSource::FatSecret => "fatsecret",
            FoodSource::Usda => "usda",
            FoodSource::Local => "local",
        }
    }
}

/// Provider-neutral search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodSummary {
    pub external_id: Option<String>,
    pub name: String,
    pub brand: Option<String>,
    pub serving_size: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub source: FoodSource,
}

impl From<&Food> for FoodSummary {
    fn from(food: &Food) -> Self {
        Self {
            external_id: Some(food.id.to_string()),
            name: food.name.clone(),
            brand: food.brand.clone(),
            serving_size: food.serving_size.clone(),
            calories: food.calories,
            protein: food.protein,
            carbs: food.carbs,
            fat: food.fat,
            source: FoodSource::Local,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodSearchResult {
    pub source: FoodSource,
    pub query: String,
    pub foods: Vec<FoodSummary>,
}
