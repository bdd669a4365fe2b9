use tracing::info;

use crate::{
    domain::common::{FitpulseConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        admin::jwt_authenticator::JwtAdminAuthenticator,
        exercise::nutritionix_client::NutritionixClient,
        memory::{
            repository::InMemoryRepository,
            seed::{seed_foods, seed_recipes, seed_workouts},
        },
        nutrition::{fatsecret_client::FatSecretClient, usda_client::UsdaClient},
        vision::google_vision_client::GoogleVisionClient,
    },
};
use crate::domain::{
    exercise::entities::ExerciseLog, food::entities::Food, recipe::entities::Recipe,
    workout::entities::Workout,
};

pub type FitpulseService = Service<
    InMemoryRepository<Recipe>,
    InMemoryRepository<Workout>,
    InMemoryRepository<Food>,
    InMemoryRepository<ExerciseLog>,
    GoogleVisionClient,
    FatSecretClient,
    UsdaClient,
    NutritionixClient,
    JwtAdminAuthenticator,
>;

/// Wires the in-memory stores (seeded) and the provider clients.
pub fn create_service(config: FitpulseConfig) -> Result<FitpulseService, CoreError> {
    let recipes = seed_recipes();
    let workouts = seed_workouts();
    let foods = seed_foods();
    info!(
        recipes = recipes.len(),
        workouts = workouts.len(),
        foods = foods.len(),
        "seeding in-memory stores"
    );

    let providers = config.providers;

    Ok(Service::new(
        InMemoryRepository::new(recipes),
        InMemoryRepository::new(workouts),
        InMemoryRepository::new(foods),
        InMemoryRepository::default(),
        GoogleVisionClient::new(providers.vision),
        FatSecretClient::new(providers.fatsecret),
        UsdaClient::new(providers.usda),
        NutritionixClient::new(providers.nutritionix),
        JwtAdminAuthenticator::new(config.admin)?,
    ))
}
