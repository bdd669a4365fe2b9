pub mod admin;
pub mod exercise;
pub mod memory;
pub mod nutrition;
pub mod vision;
