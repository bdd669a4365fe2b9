use chrono::{DateTime, Utc};

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone)]
pub struct EstimateExerciseInput {
    pub query: String,
    pub weight_kg: Option<f64>,
}

impl EstimateExerciseInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.query.trim().is_empty() {
            return Err(CoreError::Invalid("exercise query is required".to_string()));
        }
        if let Some(weight) = self.weight_kg
            && !(weight.is_finite() && weight > 0.0)
        {
            return Err(CoreError::Invalid("weight must be positive".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogExerciseInput {
    pub exercise_name: String,
    pub duration_minutes: Option<f64>,
    /// When present the log is stored as manual and no estimate is made.
    pub calories_burned: Option<f64>,
    pub weight_kg: Option<f64>,
    pub notes: Option<String>,
    pub logged_at: Option<DateTime<Utc>>,
}

impl LogExerciseInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.exercise_name.trim().is_empty() {
            return Err(CoreError::Invalid("exercise name is required".to_string()));
        }
        if let Some(duration) = self.duration_minutes
            && !(duration.is_finite() && duration > 0.0)
        {
            return Err(CoreError::Invalid(
                "duration must be a positive number of minutes".to_string(),
            ));
        }
        if let Some(calories) = self.calories_burned
            && !(calories.is_finite() && calories >= 0.0)
        {
            return Err(CoreError::Invalid(
                "calories burned cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Natural-language query handed to the estimators.
    pub fn estimate_query(&self) -> String {
        match self.duration_minutes {
            Some(minutes) => format!("{} {} minutes", self.exercise_name.trim(), minutes),
            None => self.exercise_name.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_query_includes_duration() {
        let input = LogExerciseInput {
            exercise_name: " rowing ".to_string(),
            duration_minutes: Some(25.0),
            ..Default::default()
        };
        assert_eq!(input.estimate_query(), "rowing 25 minutes");
    }

    #[test]
    fn negative_calories_are_invalid() {
        let input = LogExerciseInput {
            exercise_name: "rowing".to_string(),
            calories_burned: Some(-10.0),
            ..Default::default()
        };
        assert!(matches!(input.validate(), Err(CoreError::Invalid(_))));
    }
}
