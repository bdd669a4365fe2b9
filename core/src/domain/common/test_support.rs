//! Service wiring shared by the domain unit tests.

use crate::{
    domain::{
        admin::{
            ports::MockAdminAuthenticator,
            value_objects::{ADMIN_ROLE, AdminClaims, Identity},
        },
        common::{entities::app_errors::CoreError, services::Service},
        exercise::{entities::ExerciseLog, ports::MockExerciseEstimator},
        food::{entities::Food, ports::MockNutritionProvider},
        recipe::entities::Recipe,
        recognition::ports::MockVisionClient,
        workout::entities::Workout,
    },
    infrastructure::memory::repository::InMemoryRepository,
};

pub type TestService = Service<
    InMemoryRepository<Recipe>,
    InMemoryRepository<Workout>,
    InMemoryRepository<Food>,
    InMemoryRepository<ExerciseLog>,
    MockVisionClient,
    MockNutritionProvider,
    MockNutritionProvider,
    MockExerciseEstimator,
    MockAdminAuthenticator,
>;

/// Provider mocks; the defaults behave like providers without credentials.
pub struct TestProviders {
    pub vision: MockVisionClient,
    pub primary: MockNutritionProvider,
    pub secondary: MockNutritionProvider,
    pub estimator: MockExerciseEstimator,
    pub authenticator: MockAdminAuthenticator,
}

fn unconfigured_nutrition(name: &'static str) -> MockNutritionProvider {
    let mut provider = MockNutritionProvider::new();
    provider.expect_name().return_const(name);
    provider.expect_is_configured().return_const(false);
    provider.expect_search_foods().returning(move |_, _| {
        Box::pin(async move { Err(CoreError::ProviderNotConfigured(name.to_string())) })
    });
    provider
}

impl Default for TestProviders {
    fn default() -> Self {
        let mut vision = MockVisionClient::new();
        vision.expect_is_configured().return_const(false);
        vision.expect_annotate().returning(|_| {
            Box::pin(async { Err(CoreError::ProviderNotConfigured("vision".to_string())) })
        });

        let mut estimator = MockExerciseEstimator::new();
        estimator.expect_is_configured().return_const(false);
        estimator.expect_estimate().returning(|_, _| {
            Box::pin(async { Err(CoreError::ProviderNotConfigured("nutritionix".to_string())) })
        });

        let mut authenticator = MockAdminAuthenticator::new();
        authenticator
            .expect_authenticate()
            .returning(|_, _| Box::pin(async { Err(CoreError::Unauthorized) }));
        authenticator
            .expect_verify_token()
            .returning(|_| Box::pin(async { Err(CoreError::Unauthorized) }));

        Self {
            vision,
            primary: unconfigured_nutrition("fatsecret"),
            secondary: unconfigured_nutrition("usda"),
            estimator,
            authenticator,
        }
    }
}

impl TestProviders {
    pub fn build(self) -> TestService {
        Service::new(
            InMemoryRepository::default(),
            InMemoryRepository::default(),
            InMemoryRepository::default(),
            InMemoryRepository::default(),
            self.vision,
            self.primary,
            self.secondary,
            self.estimator,
            self.authenticator,
        )
    }
}

/// Empty stores, every provider unconfigured.
pub fn test_service() -> TestService {
    TestProviders::default().build()
}

pub fn admin_identity() -> Identity {
    Identity::Admin(AdminClaims {
        sub: "admin".to_string(),
        role: ADMIN_ROLE.to_string(),
        iat: 0,
        exp: i64::MAX,
    })
}
