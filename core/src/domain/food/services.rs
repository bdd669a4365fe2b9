use futures::FutureExt;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    admin::{ports::AdminAuthenticator, value_objects::Identity},
    common::{
        entities::app_errors::CoreError,
        policies::ensure_policy,
        ports::Repository,
        query::{ConditionOperator, ListQuery},
        resolver::{Strategy, resolve_first},
        services::Service,
    },
    exercise::{entities::ExerciseLog, ports::ExerciseEstimator},
    food::{
        entities::{Food, FoodSearchResult, FoodSource, FoodSummary},
        ports::{FoodService, NutritionProvider},
        value_objects::{CreateFoodInput, SearchFoodsInput, UpdateFoodInput},
    },
    recipe::entities::Recipe,
    recognition::{nutrition_table::find_entry, ports::VisionClient},
    workout::entities::Workout,
};

const LOCAL_STRATEGY: &str = "local";

fn provider_strategy<'a, N: NutritionProvider>(
    provider: &'a N,
    query: &str,
    limit: usize,
) -> Strategy<'a, Vec<FoodSummary>> {
    let query = query.to_string();
    Strategy::new(
        provider.name(),
        async move {
            if !provider.is_configured() {
                return Err(CoreError::ProviderNotConfigured(provider.name().to_string()));
            }
            let foods = provider.search_foods(query, limit).await?;
            if foods.is_empty() {
                return Err(CoreError::ExternalServiceError(format!(
                    "{} returned no foods",
                    provider.name()
                )));
            }
            Ok(foods)
        }
        .boxed(),
    )
}

/// Local store hits by name, else the static nutrition table.
fn local_summary(query: &str, stored: &[Food]) -> Vec<FoodSummary> {
    if !stored.is_empty() {
        return stored.iter().map(FoodSummary::from).collect();
    }

    find_entry(query)
        .map(|entry| FoodSummary {
            external_id: None,
            name: entry.key.to_string(),
            brand: None,
            serving_size: entry.serving_size.to_string(),
            calories: entry.calories,
            protein: entry.protein,
            carbs: entry.carbs,
            fat: entry.fat,
            source: FoodSource::Local,
        })
        .into_iter()
        .collect()
}

fn source_for(strategy: &str) -> FoodSource {
    match strategy {
        "fatsecret" => FoodSource::FatSecret,
        "usda" => FoodSource::Usda,
        _ => FoodSource::Local,
    }
}

impl<R, W, F, L, V, P, S, E, A> FoodService for Service<R, W, F, L, V, P, S, E, A>
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
    async fn get_foods(&self, query: ListQuery) -> Result<Vec<Food>, CoreError> {
        query.validate::<Food>()?;
        self.food_repository.list(query).await
    }

    async fn get_food(&self, food_id: Uuid) -> Result<Food, CoreError> {
        self.food_repository
            .get(food_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_food(
        &self,
        identity: Identity,
        input: CreateFoodInput,
    ) -> Result<Food, CoreError> {
        ensure_policy(
            self.policy.can_manage_content(&identity),
            "insufficient permissions to create foods",
        )?;
        input.validate()?;

        let food = self.food_repository.add(Food::new(input.food)).await?;
        info!(food_id = %food.id, by = identity.subject(), "food created");

        Ok(food)
    }

    async fn update_food(
        &self,
        identity: Identity,
        input: UpdateFoodInput,
    ) -> Result<Food, CoreError> {
        ensure_policy(
            self.policy.can_manage_content(&identity),
            "insufficient permissions to update foods",
        )?;

        let mut food = self
            .food_repository
            .get(input.food_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        input.apply(&mut food)?;

        self.food_repository.update(food).await
    }

    async fn delete_food(&self, identity: Identity, food_id: Uuid) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_content(&identity),
            "insufficient permissions to delete foods",
        )?;

        self.food_repository.delete(food_id).await?;
        info!(%food_id, by = identity.subject(), "food deleted");

        Ok(())
    }

    async fn search_foods(&self, input: SearchFoodsInput) -> Result<FoodSearchResult, CoreError> {
        let (query, limit) = input.normalized()?;

        let local = {
            let query = query.clone();
            Strategy::new(
                LOCAL_STRATEGY,
                async move {
                    let stored = self
                        .food_repository
                        .list(
                            ListQuery {
                                limit: Some(limit),
                                ..Default::default()
                            }
                            .with_condition("name", ConditionOperator::Contains, query.clone()),
                        )
                        .await?;
                    Ok(local_summary(&query, &stored))
                }
                .boxed(),
            )
        };

        let resolved = resolve_first(
            "food_search",
            vec![
                provider_strategy(self.primary_nutrition_provider.as_ref(), &query, limit),
                provider_strategy(self.secondary_nutrition_provider.as_ref(), &query, limit),
                local,
            ],
        )
        .await?;

        info!(
            %query,
            source = resolved.strategy,
            hits = resolved.value.len(),
            "food search resolved"
        );

        Ok(FoodSearchResult {
            source: source_for(resolved.strategy),
            query,
            foods: resolved.value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::{TestProviders, admin_identity, test_service},
        food::{entities::FoodConfig, ports::MockNutritionProvider},
    };

    fn granola() -> FoodConfig {
        FoodConfig {
            name: "Honey Granola".to_string(),
            brand: Some("Morning Co".to_string()),
            category: "cereal".to_string(),
            serving_size: "45g".to_string(),
            calories: 210.0,
            protein: 5.0,
            carbs: 32.0,
            fat: 7.0,
            fiber: 3.0,
            sugar: 11.0,
            sodium: 60.0,
        }
    }

    fn hit(name: &str, source: FoodSource) -> FoodSummary {
        FoodSummary {
            external_id: Some("42".to_string()),
            name: name.to_string(),
            brand: None,
            serving_size: "100g".to_string(),
            calories: 52.0,
            protein: 0.3,
            carbs: 13.8,
            fat: 0.2,
            source,
        }
    }

    fn provider(
        name: &'static str,
        result: Result<Vec<FoodSummary>, CoreError>,
    ) -> MockNutritionProvider {
        let mut provider = MockNutritionProvider::new();
        provider.expect_name().return_const(name);
        provider.expect_is_configured().return_const(true);
        provider.expect_search_foods().returning(move |_, _| {
            let result = result.clone();
            Box::pin(async move { result })
        });
        provider
    }

    fn search(query: &str) -> SearchFoodsInput {
        SearchFoodsInput {
            query: query.to_string(),
            limit: None,
        }
    }

    #[tokio::test]
    async fn primary_provider_wins() {
        let service = TestProviders {
            primary: provider("fatsecret", Ok(vec![hit("apple", FoodSource::FatSecret)])),
            secondary: provider("usda", Ok(vec![hit("apple", FoodSource::Usda)])),
            ..Default::default()
        }
        .build();

        let result = service.search_foods(search("apple")).await.unwrap();
        assert_eq!(result.source, FoodSource::FatSecret);
        assert_eq!(result.foods.len(), 1);
    }

    #[tokio::test]
    async fn failing_primary_falls_through_to_secondary() {
        let service = TestProviders {
            primary: provider(
                "fatsecret",
                Err(CoreError::ExternalServiceError("timeout".to_string())),
            ),
            secondary: provider("usda", Ok(vec![hit("apple", FoodSource::Usda)])),
            ..Default::default()
        }
        .build();

        let result = service.search_foods(search("apple")).await.unwrap();
        assert_eq!(result.source, FoodSource::Usda);
    }

    #[tokio::test]
    async fn unconfigured_providers_use_static_table() {
        let service = test_service();

        let result = service.search_foods(search("banana")).await.unwrap();
        assert_eq!(result.source, FoodSource::Local);
        assert_eq!(result.foods[0].name, "banana");
        assert_eq!(result.foods[0].calories, 105.0);
    }

    #[tokio::test]
    async fn local_store_is_preferred_over_static_table() {
        let service = test_service();
        service
            .create_food(
                admin_identity(),
                CreateFoodInput { food: granola() },
            )
            .await
            .unwrap();

        let result = service.search_foods(search("granola")).await.unwrap();
        assert_eq!(result.source, FoodSource::Local);
        assert_eq!(result.foods[0].name, "Honey Granola");
    }

    #[tokio::test]
    async fn unknown_local_query_returns_no_foods() {
        let service = test_service();

        let result = service.search_foods(search("xylophone")).await.unwrap();
        assert!(result.foods.is_empty());
    }

    #[tokio::test]
    async fn negative_nutrients_are_rejected() {
        let service = test_service();
        let mut food = granola();
        food.sodium = -1.0;

        let result = service
            .create_food(admin_identity(), CreateFoodInput { food })
            .await;
        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn anonymous_cannot_delete_foods() {
        let service = test_service();
        let food = service
            .create_food(admin_identity(), CreateFoodInput { food: granola() })
            .await
            .unwrap();

        let result = service
            .delete_food(Identity::Anonymous, food.id)
            .await;
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }
}
