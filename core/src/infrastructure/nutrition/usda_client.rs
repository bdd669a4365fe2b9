use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{UsdaConfig, entities::app_errors::CoreError, non_blank},
    food::{
        entities::{FoodSource, FoodSummary},
        ports::NutritionProvider,
    },
};

const ENERGY: &str = "Energy";
const PROTEIN: &str = "Protein";
const CARBS: &str = "Carbohydrate, by difference";
const FAT: &str = "Total lipid (fat)";

/// USDA FoodData Central search client.
#[derive(Debug, Clone)]
pub struct UsdaClient {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchQuery<'a> {
    api_key: &'a str,
    query: &'a str,
    page_size: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<UsdaFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsdaFood {
    fdc_id: u64,
    description: String,
    brand_owner: Option<String>,
    serving_size: Option<f64>,
    serving_size_unit: Option<String>,
    #[serde(default)]
    food_nutrients: Vec<UsdaNutrient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsdaNutrient {
    #[serde(default)]
    nutrient_name: String,
    #[serde(default)]
    unit_name: String,
    value: Option<f64>,
}

impl UsdaFood {
    /// Energy is reported in both kcal and kJ for some foods; only kcal counts.
    fn nutrient(&self, name: &str) -> f64 {
        self.food_nutrients
            .iter()
            .find(|n| {
                n.nutrient_name == name && (name != ENERGY || n.unit_name.eq_ignore_ascii_case("kcal"))
            })
            .and_then(|n| n.value)
            .unwrap_or(0.0)
    }

    fn serving_size(&self) -> String {
        match (self.serving_size, &self.serving_size_unit) {
            (Some(size), Some(unit)) => format!("{}{}", size, unit.to_lowercase()),
            _ => "100g".to_string(),
        }
    }
}

impl From<UsdaFood> for FoodSummary {
    fn from(food: UsdaFood) -> Self {
        Self {
            external_id: Some(food.fdc_id.to_string()),
            calories: food.nutrient(ENERGY),
            protein: food.nutrient(PROTEIN),
            carbs: food.nutrient(CARBS),
            fat: food.nutrient(FAT),
            serving_size: food.serving_size(),
            name: food.description,
            brand: food.brand_owner,
            source: FoodSource::Usda,
        }
    }
}

impl UsdaClient {
    pub fn new(config: UsdaConfig) -> Self {
        Self {
            api_key: non_blank(config.api_key),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

impl NutritionProvider for UsdaClient {
    fn name(&self) -> &'static str {
        "usda"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search_foods(&self, query: String, limit: usize) -> Result<Vec<FoodSummary>, CoreError> {
        let Some(api_key) = &self.api_key else {
            return Err(CoreError::ProviderNotConfigured(self.name().to_string()));
        };

        let url = format!("{}/foods/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&SearchQuery {
                api_key,
                query: &query,
                page_size: limit,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("USDA request failed: {}", e);
                CoreError::ExternalServiceError(format!("USDA API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("USDA API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "USDA API returned error: {}",
                status
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse USDA response: {}", e);
            CoreError::ExternalServiceError(format!("failed to parse USDA response: {}", e))
        })?;

        Ok(body.foods.into_iter().map(FoodSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nutrients_are_mapped_by_name() {
        let body: SearchResponse = serde_json::from_value(serde_json::json!({
            "foods": [{
                "fdcId": 171688,
                "description": "Apples, raw, with skin",
                "foodNutrients": [
                    {"nutrientName": "Energy", "unitName": "kJ", "value": 218.0},
                    {"nutrientName": "Energy", "unitName": "KCAL", "value": 52.0},
                    {"nutrientName": "Protein", "unitName": "G", "value": 0.26},
                    {"nutrientName": "Carbohydrate, by difference", "unitName": "G", "value": 13.8},
                    {"nutrientName": "Total lipid (fat)", "unitName": "G", "value": 0.17}
                ]
            }]
        }))
        .unwrap();

        let summary = FoodSummary::from(body.foods.into_iter().next().unwrap());

        assert_eq!(summary.external_id.as_deref(), Some("171688"));
        assert_eq!(summary.calories, 52.0);
        assert_eq!(summary.protein, 0.26);
        assert_eq!(summary.carbs, 13.8);
        assert_eq!(summary.fat, 0.17);
        assert_eq!(summary.serving_size, "100g");
        assert_eq!(summary.source, FoodSource::Usda);
    }

    #[test]
    fn branded_serving_size_is_used() {
        let food: UsdaFood = serde_json::from_value(serde_json::json!({
            "fdcId": 1,
            "description": "Granola",
            "brandOwner": "Morning Co",
            "servingSize": 45.0,
            "servingSizeUnit": "G"
        }))
        .unwrap();

        assert_eq!(food.serving_size(), "45g");
        assert_eq!(food.nutrient(PROTEIN), 0.0);
    }

    #[tokio::test]
    async fn missing_key_is_not_configured() {
        let client = UsdaClient::new(UsdaConfig::default());

        assert!(!client.is_configured());
        assert_eq!(
            client.search_foods("apple".to_string(), 5).await,
            Err(CoreError::ProviderNotConfigured("usda".to_string()))
        );
    }
}
