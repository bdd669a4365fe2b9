use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    admin::value_objects::Identity,
    common::{entities::app_errors::CoreError, query::ListQuery},
    food::{
        entities::{Food, FoodSearchResult, FoodSummary},
        value_objects::{CreateFoodInput, SearchFoodsInput, UpdateFoodInput},
    },
};

/// Third-party nutrition database.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionProvider: Send + Sync {
    /// Strategy name used in logs and search results.
    fn name(&self) -> &'static str;

    fn is_configured(&self) -> bool;

    fn search_foods(
        &self,
        query: String,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<FoodSummary>, CoreError>> + Send;
}

pub trait FoodService: Send + Sync {
    fn get_foods(&self, query: ListQuery)
    -> impl Future<Output = Result<Vec<Food>, CoreError>> + Send;

    fn get_food(&self, food_id: Uuid) -> impl Future<Output = Result<Food, CoreError>> + Send;

    fn create_food(
        &self,
        identity: Identity,
        input: CreateFoodInput,
    ) -> impl Future<Output = Result<Food, CoreError>> + Send;

    fn update_food(
        &self,
        identity: Identity,
        input: UpdateFoodInput,
    ) -> impl Future<Output = Result<Food, CoreError>> + Send;

    fn delete_food(
        &self,
        identity: Identity,
        food_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Tries the primary provider, then the secondary one, then local data.
    fn search_foods(
        &self,
        input: SearchFoodsInput,
    ) -> impl Future<Output = Result<FoodSearchResult, CoreError>> + Send;
}
