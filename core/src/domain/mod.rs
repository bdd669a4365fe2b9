pub mod admin;
pub mod common;
pub mod exercise;
pub mod food;
pub mod health;
pub mod recipe;
pub mod recognition;
pub mod workout;
