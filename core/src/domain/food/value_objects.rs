use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::entities::{Food, FoodConfig},
};

pub const DEFAULT_SEARCH_LIMIT: usize = 20;
pub const MAX_SEARCH_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct CreateFoodInput {
    pub food: FoodConfig,
}

impl CreateFoodInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        let food = &self.food;
        validate_food_fields(
            &food.name,
            [
                food.calories,
                food.protein,
                food.carbs,
                food.fat,
                food.fiber,
                food.sugar,
                food.sodium,
            ],
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFoodInput {
    pub food_id: Uuid,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub serving_size: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub sodium: Option<f64>,
}

impl UpdateFoodInput {
    pub fn apply(self, food: &mut Food) -> Result<(), CoreError> {
        if let Some(name) = self.name {
            food.name = name;
        }
        if let Some(brand) = self.brand {
            food.brand = Some(brand);
        }
        if let Some(category) = self.category {
            food.category = category;
        }
        if let Some(serving_size) = self.serving_size {
            food.serving_size = serving_size;
        }
        for (target, value) in [
            (&mut food.calories, self.calories),
            (&mut food.protein, self.protein),
            (&mut food.carbs, self.carbs),
            (&mut food.fat, self.fat),
            (&mut food.fiber, self.fiber),
            (&mut food.sugar, self.sugar),
            (&mut food.sodium, self.sodium),
        ] {
            if let Some(value) = value {
                *target = value;
            }
        }

        validate_food_fields(
            &food.name,
            [
                food.calories,
                food.protein,
                food.carbs,
                food.fat,
                food.fiber,
                food.sugar,
                food.sodium,
            ],
        )?;
        food.updated_at = chrono::Utc::now();
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SearchFoodsInput {
    pub query: String,
    pub limit: Option<usize>,
}

impl SearchFoodsInput {
    /// Trimmed query and a limit clamped to `1..=MAX_SEARCH_LIMIT`.
    pub fn normalized(&self) -> Result<(String, usize), CoreError> {
        let query = self.query.trim();
        if query.is_empty() {
            return Err(CoreError::Invalid("search query is required".to_string()));
        }
        let limit = self
            .limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT);
        Ok((query.to_string(), limit))
    }
}

fn validate_food_fields(name: &str, nutrients: [f64; 7]) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Invalid("food name is required".to_string()));
    }
    if nutrients.iter().any(|n| !n.is_finite() || *n < 0.0) {
        return Err(CoreError::Invalid(
            "nutrition values must be non-negative numbers".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_limit_is_clamped() {
        let input = SearchFoodsInput {
            query: "  oats ".to_string(),
            limit: Some(500),
        };
        assert_eq!(
            input.normalized().unwrap(),
            ("oats".to_string(), MAX_SEARCH_LIMIT)
        );

        let input = SearchFoodsInput {
            query: "oats".to_string(),
            limit: None,
        };
        assert_eq!(input.normalized().unwrap().1, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn blank_query_is_invalid() {
        let input = SearchFoodsInput {
            query: "   ".to_string(),
            limit: None,
        };
        assert!(matches!(input.normalized(), Err(CoreError::Invalid(_))));
    }
}
