use futures::FutureExt;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, warn};

use crate::domain::{
    admin::ports::AdminAuthenticator,
    common::{
        entities::app_errors::CoreError,
        ports::Repository,
        resolver::{Strategy, resolve_first},
        services::Service,
    },
    exercise::{entities::ExerciseLog, ports::ExerciseEstimator},
    food::{entities::Food, ports::NutritionProvider},
    recipe::entities::Recipe,
    recognition::{
        entities::RecognitionOutcome,
        fallback::{FALLBACK_SOURCE, mock_recognition},
        pipeline::analyze_annotations,
        ports::{FoodRecognitionService, VisionClient},
        value_objects::RecognizeFoodInput,
    },
    workout::entities::Workout,
};

impl<R, W, F, L, V, P, S, E, A> FoodRecognitionService for Service<R, W, F, L, V, P, S, E, A>
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
    async fn recognize_food(
        &self,
        input: RecognizeFoodInput,
    ) -> Result<RecognitionOutcome, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::Invalid("image data is empty".to_string()));
        }

        let image_size = input.image_data.len();
        let vision_client = self.vision_client.clone();

        let vision = Strategy::new(
            "vision",
            async move {
                let annotations = vision_client.annotate(input.image_data).await?;
                analyze_annotations(&annotations)
                    .map(RecognitionOutcome::Analyzed)
                    .ok_or_else(|| {
                        CoreError::ExternalServiceError("no food detected in image".to_string())
                    })
            }
            .boxed(),
        );

        let mock = Strategy::new(
            FALLBACK_SOURCE,
            async move {
                let mut rng = StdRng::from_entropy();
                Ok(RecognitionOutcome::Fallback(mock_recognition(&mut rng)))
            }
            .boxed(),
        );

        let resolved = resolve_first("food_recognition", vec![vision, mock]).await?;

        match &resolved.value {
            RecognitionOutcome::Analyzed(report) => info!(
                image_size,
                foods = report.recognized_foods.len(),
                confidence = report.confidence_score,
                "food recognized"
            ),
            RecognitionOutcome::Fallback(fallback) => warn!(
                image_size,
                food = %fallback.recognized_food.name,
                "vision unavailable, returned sample recognition"
            ),
        }

        Ok(resolved.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::TestProviders,
        recognition::{
            entities::{LabelAnnotation, VisionAnnotations},
            fallback::mock_food_names,
            ports::MockVisionClient,
        },
    };

    fn vision_returning(result: Result<VisionAnnotations, CoreError>) -> MockVisionClient {
        let mut vision = MockVisionClient::new();
        vision.expect_is_configured().return_const(true);
        vision.expect_annotate().returning(move |_| {
            let result = result.clone();
            Box::pin(async move { result })
        });
        vision
    }

    fn input() -> RecognizeFoodInput {
        RecognizeFoodInput {
            image_data: vec![0xFF, 0xD8, 0xFF, 0xE0],
        }
    }

    #[tokio::test]
    async fn apple_image_is_analyzed() {
        let service = TestProviders {
            vision: vision_returning(Ok(VisionAnnotations {
                labels: vec![LabelAnnotation {
                    description: "Apple".to_string(),
                    score: 0.95,
                }],
                ..Default::default()
            })),
            ..Default::default()
        }
        .build();

        let outcome = service.recognize_food(input()).await.unwrap();

        let RecognitionOutcome::Analyzed(report) = outcome else {
            panic!("expected an analyzed report, got {outcome:?}");
        };
        assert_eq!(report.recognized_foods[0].name(), "apple");
        assert_eq!(report.calorie_analysis.total_calories, 95.0);
    }

    #[tokio::test]
    async fn provider_error_falls_back_to_sample() {
        let service = TestProviders {
            vision: vision_returning(Err(CoreError::ExternalServiceError(
                "quota exceeded".to_string(),
            ))),
            ..Default::default()
        }
        .build();

        let outcome = service.recognize_food(input()).await.unwrap();

        let RecognitionOutcome::Fallback(fallback) = outcome else {
            panic!("expected the fallback, got {outcome:?}");
        };
        assert_eq!(fallback.source, FALLBACK_SOURCE);
        assert!(mock_food_names().any(|name| name == fallback.recognized_food.name));
    }

    #[tokio::test]
    async fn image_without_food_falls_back() {
        let service = TestProviders {
            vision: vision_returning(Ok(VisionAnnotations::default())),
            ..Default::default()
        }
        .build();

        let outcome = service.recognize_food(input()).await.unwrap();
        assert!(matches!(outcome, RecognitionOutcome::Fallback(_)));
    }

    #[tokio::test]
    async fn unconfigured_provider_falls_back() {
        let service = TestProviders::default().build();

        let outcome = service.recognize_food(input()).await.unwrap();
        assert!(matches!(outcome, RecognitionOutcome::Fallback(_)));
    }

    #[tokio::test]
    async fn empty_image_is_rejected() {
        let service = TestProviders::default().build();

        let result = service
            .recognize_food(RecognizeFoodInput { image_data: vec![] })
            .await;
        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }
}
