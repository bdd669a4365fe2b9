use fitpulse_core::domain::recipe::entities::{Difficulty, RecipeIngredient, RecipeNutrition};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[serde(default)]
    pub cuisine: String,

    pub difficulty: Difficulty,

    #[serde(default)]
    pub prep_time_minutes: u32,

    #[serde(default)]
    pub cook_time_minutes: u32,

    #[validate(range(min = 1, message = "servings must be at least 1"))]
    pub servings: u32,

    #[validate(length(min = 1, message = "at least one ingredient is required"))]
    pub ingredients: Vec<RecipeIngredient>,

    #[serde(default)]
    pub instructions: Vec<String>,

    #[serde(default)]
    pub nutrition: RecipeNutrition,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecipeValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub cuisine: Option<String>,

    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    pub prep_time_minutes: Option<u32>,

    #[serde(default)]
    pub cook_time_minutes: Option<u32>,

    #[serde(default)]
    #[validate(range(min = 1, message = "servings must be at least 1"))]
    pub servings: Option<u32>,

    #[serde(default)]
    pub ingredients: Option<Vec<RecipeIngredient>>,

    #[serde(default)]
    pub instructions: Option<Vec<String>>,

    #[serde(default)]
    pub nutrition: Option<RecipeNutrition>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
}
