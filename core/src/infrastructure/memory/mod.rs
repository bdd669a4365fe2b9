pub mod repository;
pub mod seed;
