pub mod delete_exercise_log;
pub mod estimate_exercise;
pub mod get_exercise_logs;
pub mod log_exercise;
