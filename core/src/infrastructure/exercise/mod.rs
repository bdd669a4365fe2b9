pub mod nutritionix_client;
