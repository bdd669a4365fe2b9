use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFoodValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub brand: Option<String>,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "serving_size is required"))]
    pub serving_size: String,

    #[validate(range(min = 0.0, message = "calories cannot be negative"))]
    pub calories: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "protein cannot be negative"))]
    pub protein: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "carbs cannot be negative"))]
    pub carbs: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "fat cannot be negative"))]
    pub fat: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "fiber cannot be negative"))]
    pub fiber: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "sugar cannot be negative"))]
    pub sugar: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "sodium cannot be negative"))]
    pub sodium: f64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFoodValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub serving_size: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "calories cannot be negative"))]
    pub calories: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "protein cannot be negative"))]
    pub protein: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "carbs cannot be negative"))]
    pub carbs: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "fat cannot be negative"))]
    pub fat: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "fiber cannot be negative"))]
    pub fiber: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "sugar cannot be negative"))]
    pub sugar: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "sodium cannot be negative"))]
    pub sodium: Option<f64>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchFoodsQuery {
    /// Food name to look up
    #[serde(default)]
    pub q: String,
    /// Defaults to 20, capped at 50
    pub limit: Option<usize>,
}
