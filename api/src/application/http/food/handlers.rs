pub mod create_food;
pub mod delete_food;
pub mod get_food;
pub mod get_foods;
pub mod search_foods;
pub mod update_food;
