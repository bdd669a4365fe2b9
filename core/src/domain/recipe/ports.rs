use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    admin::value_objects::Identity,
    common::{entities::app_errors::CoreError, query::ListQuery},
    recipe::{
        entities::Recipe,
        value_objects::{CreateRecipeInput, UpdateRecipeInput},
    },
};

pub trait RecipeService: Send + Sync {
    fn get_recipes(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe(&self, recipe_id: Uuid) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn update_recipe(
        &self,
        identity: Identity,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
