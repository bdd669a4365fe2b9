//! Health score and recommendations for aggregate nutrition.

use crate::domain::recognition::entities::{AggregateNutrition, NutritionAnalysis};

pub const LOW_FIBER_RECOMMENDATION: &str =
    "Add more fiber-rich foods like vegetables, legumes, or whole grains.";
pub const LOW_PROTEIN_RECOMMENDATION: &str =
    "Consider adding a lean protein source to make this meal more filling.";
pub const HIGH_SUGAR_RECOMMENDATION: &str =
    "This meal is high in sugar; balance it with whole, unprocessed foods.";
pub const ALLERGEN_RECOMMENDATION: &str =
    "This meal contains common allergens; check the allergen list before eating.";

/// Score in `0..=100`, starting from 100.
pub fn health_score(totals: &AggregateNutrition) -> u8 {
    let mut score: i32 = 100;

    if totals.sugar > 25.0 {
        score -= 10;
    }
    if totals.sodium > 500.0 {
        score -= 10;
    }
    if totals.fat > 20.0 {
        score -= 5;
    }
    if totals.fiber < 5.0 {
        score -= 10;
    }
    if totals.protein > 15.0 {
        score += 5;
    }
    if totals.fiber > 10.0 {
        score += 10;
    }

    score.clamp(0, 100) as u8
}

pub fn recommendations(totals: &AggregateNutrition) -> Vec<String> {
    let mut out = Vec::new();
    if totals.fiber < 5.0 {
        out.push(LOW_FIBER_RECOMMENDATION.to_string());
    }
    if totals.protein < 15.0 {
        out.push(LOW_PROTEIN_RECOMMENDATION.to_string());
    }
    if totals.sugar > 25.0 {
        out.push(HIGH_SUGAR_RECOMMENDATION.to_string());
    }
    if !totals.allergens.is_empty() {
        out.push(ALLERGEN_RECOMMENDATION.to_string());
    }
    out
}

pub fn assess(totals: AggregateNutrition) -> NutritionAnalysis {
    NutritionAnalysis {
        health_score: health_score(&totals),
        recommendations: recommendations(&totals),
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(protein: f64, fiber: f64, sugar: f64, sodium: f64, fat: f64) -> AggregateNutrition {
        AggregateNutrition {
            protein,
            fiber,
            sugar,
            sodium,
            fat,
            ..Default::default()
        }
    }

    #[test]
    fn test_balanced_meal_is_capped_at_100() {
        // +5 protein, +10 fiber would exceed 100
        assert_eq!(health_score(&totals(30.0, 12.0, 5.0, 100.0, 10.0)), 100);
    }

    #[test]
    fn test_every_penalty_applies() {
        // 100 - 10 - 10 - 5 - 10
        assert_eq!(health_score(&totals(5.0, 1.0, 40.0, 900.0, 30.0)), 65);
    }

    #[test]
    fn test_score_stays_in_range() {
        for protein in [0.0, 20.0] {
            for fiber in [0.0, 7.0, 20.0] {
                for sugar in [0.0, 50.0] {
                    let score = health_score(&totals(protein, fiber, sugar, 1000.0, 50.0));
                    assert!(score <= 100);
                }
            }
        }
    }

    #[test]
    fn test_recommendations_follow_fixed_order() {
        let mut t = totals(5.0, 1.0, 40.0, 0.0, 0.0);
        t.allergens = vec!["dairy".to_string()];

        assert_eq!(
            recommendations(&t),
            vec![
                LOW_FIBER_RECOMMENDATION.to_string(),
                LOW_PROTEIN_RECOMMENDATION.to_string(),
                HIGH_SUGAR_RECOMMENDATION.to_string(),
                ALLERGEN_RECOMMENDATION.to_string(),
            ]
        );
    }

    #[test]
    fn test_no_recommendations_for_balanced_meal() {
        assert!(recommendations(&totals(30.0, 12.0, 5.0, 100.0, 10.0)).is_empty());
    }
}
