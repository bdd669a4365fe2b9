use std::{collections::BTreeMap, sync::LazyLock};

use base64::{Engine as _, engine::general_purpose};
use hmac::{Hmac, Mac};
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use sha1::Sha1;

use crate::domain::{
    common::{
        FatSecretConfig, entities::app_errors::CoreError, generate_random_string, non_blank,
    },
    food::{
        entities::{FoodSource, FoodSummary},
        ports::NutritionProvider,
    },
};

type HmacSha1 = Hmac<Sha1>;

static DESCRIPTION_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*per\s+(?P<serving>[^-]+?)\s*-\s*calories:\s*(?P<calories>[\d.]+)\s*kcal\s*\|\s*fat:\s*(?P<fat>[\d.]+)\s*g\s*\|\s*carbs:\s*(?P<carbs>[\d.]+)\s*g\s*\|\s*protein:\s*(?P<protein>[\d.]+)\s*g",
    )
    .ok()
});

#[derive(Debug, Clone)]
struct Credentials {
    consumer_key: String,
    consumer_secret: String,
}

/// FatSecret Platform REST client, OAuth 1.0 signed (HMAC-SHA1, no token).
#[derive(Debug, Clone)]
pub struct FatSecretClient {
    credentials: Option<Credentials>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    foods: Option<FoodsPage>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct FoodsPage {
    food: Option<OneOrMany<FatSecretFood>>,
}

/// FatSecret returns an object instead of an array when there is a single hit.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FatSecretFood {
    food_id: String,
    food_name: String,
    brand_name: Option<String>,
    #[serde(default)]
    food_description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDescription {
    pub serving_size: String,
    pub calories: f64,
    pub fat: f64,
    pub carbs: f64,
    pub protein: f64,
}

/// Parses "Per 100g - Calories: 52kcal | Fat: 0.17g | Carbs: 13.81g | Protein: 0.26g".
pub fn parse_food_description(description: &str) -> Option<ParsedDescription> {
    let captures = DESCRIPTION_PATTERN.as_ref()?.captures(description)?;
    let number = |name: &str| -> Option<f64> { captures.name(name)?.as_str().parse().ok() };

    Some(ParsedDescription {
        serving_size: captures.name("serving")?.as_str().trim().to_string(),
        calories: number("calories")?,
        fat: number("fat")?,
        carbs: number("carbs")?,
        protein: number("protein")?,
    })
}

/// RFC 3986 percent-encoding as required by OAuth 1.0.
fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// `base64(HMAC-SHA1("{consumer_secret}&", "GET&{url}&{sorted params}"))`.
pub fn oauth_signature(
    method: &str,
    url: &str,
    params: &BTreeMap<String, String>,
    consumer_secret: &str,
) -> Result<String, CoreError> {
    let normalized = params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let base_string = format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&normalized)
    );
    let signing_key = format!("{}&", percent_encode(consumer_secret));

    let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes()).map_err(|e| {
        tracing::error!("Failed to initialise HMAC: {}", e);
        CoreError::InternalServerError
    })?;
    mac.update(base_string.as_bytes());

    Ok(general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
}

impl FatSecretClient {
    pub fn new(config: FatSecretConfig) -> Self {
        let credentials = match (
            non_blank(config.consumer_key),
            non_blank(config.consumer_secret),
        ) {
            (Some(consumer_key), Some(consumer_secret)) => Some(Credentials {
                consumer_key,
                consumer_secret,
            }),
            _ => None,
        };

        Self {
            credentials,
            base_url: config.base_url,
            client: Client::new(),
        }
    }

    fn signed_params(
        &self,
        credentials: &Credentials,
        query: &str,
        limit: usize,
    ) -> Result<BTreeMap<String, String>, CoreError> {
        let mut params: BTreeMap<String, String> = [
            ("method", "foods.search".to_string()),
            ("search_expression", query.to_string()),
            ("max_results", limit.to_string()),
            ("format", "json".to_string()),
            ("oauth_consumer_key", credentials.consumer_key.clone()),
            ("oauth_nonce", generate_random_string(16)),
            ("oauth_signature_method", "HMAC-SHA1".to_string()),
            ("oauth_timestamp", chrono::Utc::now().timestamp().to_string()),
            ("oauth_version", "1.0".to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let signature = oauth_signature("GET", &self.base_url, &params, &credentials.consumer_secret)?;
        params.insert("oauth_signature".to_string(), signature);

        Ok(params)
    }

    fn map_foods(response: SearchResponse) -> Result<Vec<FoodSummary>, CoreError> {
        if let Some(error) = response.error {
            tracing::error!("FatSecret API error: {} - {}", error.code, error.message);
            return Err(CoreError::ExternalServiceError(format!(
                "FatSecret error {}: {}",
                error.code, error.message
            )));
        }

        let foods = response
            .foods
            .and_then(|page| page.food)
            .map(OneOrMany::into_vec)
            .unwrap_or_default();

        Ok(foods
            .into_iter()
            .filter_map(|food| {
                let Some(parsed) = parse_food_description(&food.food_description) else {
                    tracing::debug!(food_id = %food.food_id, "skipping food with unparsable description");
                    return None;
                };
                Some(FoodSummary {
                    external_id: Some(food.food_id),
                    name: food.food_name,
                    brand: food.brand_name,
                    serving_size: parsed.serving_size,
                    calories: parsed.calories,
                    protein: parsed.protein,
                    carbs: parsed.carbs,
                    fat: parsed.fat,
                    source: FoodSource::FatSecret,
                })
            })
            .collect())
    }
}

impl NutritionProvider for FatSecretClient {
    fn name(&self) -> &'static str {
        "fatsecret"
    }

    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    async fn search_foods(&self, query: String, limit: usize) -> Result<Vec<FoodSummary>, CoreError> {
        let Some(credentials) = &self.credentials else {
            return Err(CoreError::ProviderNotConfigured(self.name().to_string()));
        };

        let params = self.signed_params(credentials, &query, limit)?;

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("FatSecret request failed: {}", e);
                CoreError::ExternalServiceError(format!("FatSecret API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("FatSecret API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "FatSecret API returned error: {}",
                status
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse FatSecret response: {}", e);
            CoreError::ExternalServiceError(format!("failed to parse FatSecret response: {}", e))
        })?;

        Self::map_foods(body)
    }
}
