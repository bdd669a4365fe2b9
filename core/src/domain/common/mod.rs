use chrono::{DateTime, Utc};
use rand::{Rng, distributions::Alphanumeric};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod policies;
pub mod ports;
pub mod query;
pub mod resolver;
pub mod services;
#[cfg(test)]
pub mod test_support;

#[derive(Clone, Debug)]
pub struct FitpulseConfig {
    pub providers: ProvidersConfig,
    pub admin: AdminConfig,
}

#[derive(Clone, Debug, Default)]
pub struct ProvidersConfig {
    pub vision: VisionConfig,
    pub fatsecret: FatSecretConfig,
    pub usda: UsdaConfig,
    pub nutritionix: NutritionixConfig,
}

#[derive(Clone, Debug)]
pub struct VisionConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://vision.googleapis.com/v1".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FatSecretConfig {
    pub consumer_key: Option<String>,
    pub consumer_secret: Option<String>,
    pub base_url: String,
}

impl Default for FatSecretConfig {
    fn default() -> Self {
        Self {
            consumer_key: None,
            consumer_secret: None,
            base_url: "https://platform.fatsecret.com/rest/server.api".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UsdaConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for UsdaConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.nal.usda.gov/fdc/v1".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NutritionixConfig {
    pub app_id: Option<String>,
    pub app_key: Option<String>,
    pub base_url: String,
}

impl Default for NutritionixConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_key: None,
            base_url: "https://trackapi.nutritionix.com/v2".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
}

/// Keys that are absent or blank count as unconfigured.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

pub fn generate_random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
