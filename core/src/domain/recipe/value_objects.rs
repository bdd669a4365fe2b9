use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{Difficulty, Recipe, RecipeConfig, RecipeIngredient, RecipeNutrition},
};

#[derive(Debug, Clone)]
pub struct CreateRecipeInput {
    pub recipe: RecipeConfig,
}

impl CreateRecipeInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_recipe_fields(
            &self.recipe.name,
            self.recipe.servings,
            &self.recipe.ingredients,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRecipeInput {
    pub recipe_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub prep_time_minutes: Option<u32>,
    pub cook_time_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub ingredients: Option<Vec<RecipeIngredient>>,
    pub instructions: Option<Vec<String>>,
    pub nutrition: Option<RecipeNutrition>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
}

impl UpdateRecipeInput {
    /// Applies the patch; the result is validated before it is stored.
    pub fn apply(self, recipe: &mut Recipe) -> Result<(), CoreError> {
        if let Some(name) = self.name {
            recipe.name = name;
        }
        if let Some(description) = self.description {
            recipe.description = description;
        }
        if let Some(category) = self.category {
            recipe.category = category;
        }
        if let Some(cuisine) = self.cuisine {
            recipe.cuisine = cuisine;
        }
        if let Some(difficulty) = self.difficulty {
            recipe.difficulty = difficulty;
        }
        if let Some(prep) = self.prep_time_minutes {
            recipe.prep_time_minutes = prep;
        }
        if let Some(cook) = self.cook_time_minutes {
            recipe.cook_time_minutes = cook;
        }
        if let Some(servings) = self.servings {
            recipe.servings = servings;
        }
        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = self.instructions {
            recipe.instructions = instructions;
        }
        if let Some(nutrition) = self.nutrition {
            recipe.nutrition = nutrition;
        }
        if let Some(tags) = self.tags {
            recipe.tags = tags;
        }
        if let Some(image_url) = self.image_url {
            recipe.image_url = Some(image_url);
        }

        validate_recipe_fields(&recipe.name, recipe.servings, &recipe.ingredients)?;
        recipe.updated_at = chrono::Utc::now();
        Ok(())
    }
}

fn validate_recipe_fields(
    name: &str,
    servings: u32,
    ingredients: &[RecipeIngredient],
) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Invalid("recipe name is required".to_string()));
    }
    if servings == 0 {
        return Err(CoreError::Invalid(
            "recipe must serve at least one person".to_string(),
        ));
    }
    if ingredients.is_empty() {
        return Err(CoreError::Invalid(
            "recipe needs at least one ingredient".to_string(),
        ));
    }
    Ok(())
}
