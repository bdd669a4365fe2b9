pub mod fatsecret_client;
pub mod usda_client;
