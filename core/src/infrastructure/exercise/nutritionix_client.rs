use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{NutritionixConfig, entities::app_errors::CoreError, non_blank},
    exercise::{entities::ExerciseEstimate, ports::ExerciseEstimator},
};

#[derive(Debug, Clone)]
struct Credentials {
    app_id: String,
    app_key: String,
}

/// Nutritionix natural-language exercise endpoint.
#[derive(Debug, Clone)]
pub struct NutritionixClient {
    credentials: Option<Credentials>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ExerciseRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight_kg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ExerciseResponse {
    #[serde(default)]
    exercises: Vec<NutritionixExercise>,
}

#[derive(Debug, Deserialize)]
struct NutritionixExercise {
    name: String,
    #[serde(default)]
    duration_min: f64,
    #[serde(default)]
    nf_calories: f64,
    met: Option<f64>,
}

impl From<NutritionixExercise> for ExerciseEstimate {
    fn from(exercise: NutritionixExercise) -> Self {
        Self {
            name: exercise.name,
            duration_minutes: exercise.duration_min,
            calories_burned: exercise.nf_calories,
            met: exercise.met,
        }
    }
}

impl NutritionixClient {
    pub fn new(config: NutritionixConfig) -> Self {
        let credentials = match (non_blank(config.app_id), non_blank(config.app_key)) {
            (Some(app_id), Some(app_key)) => Some(Credentials { app_id, app_key }),
            _ => None,
        };

        Self {
            credentials,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

impl ExerciseEstimator for NutritionixClient {
    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    async fn estimate(
        &self,
        query: String,
        weight_kg: Option<f64>,
    ) -> Result<Vec<ExerciseEstimate>, CoreError> {
        let Some(credentials) = &self.credentials else {
            return Err(CoreError::ProviderNotConfigured("nutritionix".to_string()));
        };

        let url = format!("{}/natural/exercise", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("x-app-id", &credentials.app_id)
            .header("x-app-key", &credentials.app_key)
            .json(&ExerciseRequest {
                query: &query,
                weight_kg,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Nutritionix request failed: {}", e);
                CoreError::ExternalServiceError(format!("Nutritionix API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Nutritionix API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Nutritionix API returned error: {}",
                status
            )));
        }

        let body: ExerciseResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Nutritionix response: {}", e);
            CoreError::ExternalServiceError(format!("failed to parse Nutritionix response: {}", e))
        })?;

        Ok(body.exercises.into_iter().map(ExerciseEstimate::from).collect())
    }
}
