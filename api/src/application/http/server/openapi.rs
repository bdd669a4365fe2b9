use crate::application::http::{
    admin::router::AdminApiDoc,
    exercise::router::ExerciseApiDoc,
    food::router::FoodApiDoc,
    health::HealthApiDoc,
    recipe::router::RecipeApiDoc,
    recognition::router::RecognitionApiDoc,
    server::{
        api_entities::api_error::ErrorResponse,
        config::__path_get_config,
    },
    workout::router::WorkoutApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fitpulse API"
    ),
    paths(get_config),
    components(schemas(ErrorResponse)),
    nest(
        (path = "/food-recognition", api = RecognitionApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/workouts", api = WorkoutApiDoc),
        (path = "/foods", api = FoodApiDoc),
        (path = "/exercises", api = ExerciseApiDoc),
        (path = "/admin", api = AdminApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
