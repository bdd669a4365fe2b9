use std::sync::Arc;

use crate::domain::{
    admin::ports::AdminAuthenticator,
    common::{policies::ContentPolicy, ports::Repository},
    exercise::{entities::ExerciseLog, ports::ExerciseEstimator},
    food::{entities::Food, ports::NutritionProvider},
    recipe::entities::Recipe,
    recognition::ports::VisionClient,
    workout::entities::Workout,
};

/// Single service object implementing every domain service trait.
///
/// `P` is the primary nutrition provider and `S` the secondary one; food search
/// tries them in that order before falling back to local data.
pub struct Service<R, W, F, L, V, P, S, E, A>
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
    pub(crate) recipe_repository: Arc<R>,
    pub(crate) workout_repository: Arc<W>,
    pub(crate) food_repository: Arc<F>,
    pub(crate) exercise_log_repository: Arc<L>,
    pub(crate) vision_client: Arc<V>,
    pub(crate) primary_nutrition_provider: Arc<P>,
    pub(crate) secondary_nutrition_provider: Arc<S>,
    pub(crate) exercise_estimator: Arc<E>,
    pub(crate) admin_authenticator: Arc<A>,
    pub(crate) policy: ContentPolicy,
}

impl<R, W, F, L, V, P, S, E, A> Clone for Service<R, W, F, L, V, P, S, E, A>
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
    fn clone(&self) -> Self {
        Self {
            recipe_repository: self.recipe_repository.clone(),
            workout_repository: self.workout_repository.clone(),
            food_repository: self.food_repository.clone(),
            exercise_log_repository: self.exercise_log_repository.clone(),
            vision_client: self.vision_client.clone(),
            primary_nutrition_provider: self.primary_nutrition_provider.clone(),
            secondary_nutrition_provider: self.secondary_nutrition_provider.clone(),
            exercise_estimator: self.exercise_estimator.clone(),
            admin_authenticator: self.admin_authenticator.clone(),
            policy: self.policy.clone(),
        }
    }
}

impl<R, W, F, L, V, P, S, E, A> Service<R, W, F, L, V, P, S, E, A>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        recipe_repository: R,
        workout_repository: W,
        food_repository: F,
        exercise_log_repository: L,
        vision_client: V,
        primary_nutrition_provider: P,
        secondary_nutrition_provider: S,
        exercise_estimator: E,
        admin_authenticator: A,
    ) -> Self {
        Self {
            recipe_repository: Arc::new(recipe_repository),
            workout_repository: Arc::new(workout_repository),
            food_repository: Arc::new(food_repository),
            exercise_log_repository: Arc::new(exercise_log_repository),
            vision_client: Arc::new(vision_client),
            primary_nutrition_provider: Arc::new(primary_nutrition_provider),
            secondary_nutrition_provider: Arc::new(secondary_nutrition_provider),
            exercise_estimator: Arc::new(exercise_estimator),
            admin_authenticator: Arc::new(admin_authenticator),
            policy: ContentPolicy,
        }
    }
}
