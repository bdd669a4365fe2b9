pub mod admin;
pub mod exercise;
pub mod food;
pub mod health;
pub mod query_params;
pub mod recipe;
pub mod recognition;
pub mod server;
pub mod workout;
