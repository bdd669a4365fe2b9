pub mod recognize_food;
