use tracing::info;
use uuid::Uuid;

use crate::domain::{
    admin::{ports::AdminAuthenticator, value_objects::Identity},
    common::{
        entities::app_errors::CoreError, policies::ensure_policy, ports::Repository,
        query::ListQuery, services::Service,
    },
    exercise::{entities::ExerciseLog, ports::ExerciseEstimator},
    food::{entities::Food, ports::NutritionProvider},
    recipe::{
        entities::Recipe,
        ports::RecipeService,
        value_objects::{CreateRecipeInput, UpdateRecipeInput},
    },
    recognition::ports::VisionClient,
    workout::entities::Workout,
};

impl<R, W, F, L, V, P, S, E, A> RecipeService for Service<R, W, F, L, V, P, S, E, A>
where
    R: Repository<Recipe>,
    W: Repository<Workout>,
    F: Repository<Food>,
    L: Repository<ExerciseLog>,
    V: VisionClient,
    P: NutritionProvider,
    S: NutritionProvider,
    E: ExerciseEstimator,
    A: AdminAuthenticator,
{
    async fn get_recipes(&self, query: ListQuery) -> Result<Vec<Recipe>, CoreError> {
        query.validate::<Recipe>()?;
        self.recipe_repository.list(query).await
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .get(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        ensure_policy(
            self.policy.can_manage_content(&identity),
            "insufficient permissions to create recipes",
        )?;
        input.validate()?;

        let recipe = self.recipe_repository.add(Recipe::new(input.recipe)).await?;
        info!(recipe_id = %recipe.id, by = identity.subject(), "recipe created");

        Ok(recipe)
    }

    async fn update_recipe(
        &self,
        identity: Identity,
        input: UpdateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        ensure_policy(
            self.policy.can_manage_content(&identity),
            "insufficient permissions to update recipes",
        )?;

        let mut recipe = self
            .recipe_repository
            .get(input.recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        input.apply(&mut recipe)?;

        self.recipe_repository.update(recipe).await
    }

    async fn delete_recipe(&self, identity: Identity, recipe_id: Uuid) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_content(&identity),
            "insufficient permissions to delete recipes",
        )?;

        self.recipe_repository.delete(recipe_id).await?;
        info!(%recipe_id, by = identity.subject(), "recipe deleted");

        Ok(())
    }
}
