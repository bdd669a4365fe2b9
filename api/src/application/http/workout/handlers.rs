pub mod create_workout;
pub mod delete_workout;
pub mod get_workout;
pub mod get_workouts;
pub mod update_workout;
