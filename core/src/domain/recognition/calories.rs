//! Weight-scaled calorie and macro totals.

use crate::domain::recognition::{
    entities::{AggregateNutrition, CalorieAnalysis, FoodBreakdown, PortionAnalysis, RecognizedFood},
    vocabulary::names_overlap,
};

/// Weight assumed for foods without a matching portion estimate.
pub const DEFAULT_PORTION_GRAMS: f64 = 100.0;

const BASE_ACCURACY: u32 = 70;
const MAX_ACCURACY: u32 = 95;

fn weight_for(food: &RecognizedFood, portions: &PortionAnalysis) -> f64 {
    portions
        .estimates
        .iter()
        .find(|estimate| names_overlap(&estimate.food, food.name()))
        .map(|estimate| estimate.estimated_weight_grams)
        .unwrap_or(DEFAULT_PORTION_GRAMS)
}

pub fn estimated_accuracy(foods: &[RecognizedFood], portions: &PortionAnalysis) -> u32 {
    let mut accuracy = BASE_ACCURACY;
    if !portions.estimates.is_empty() {
        accuracy += 15;
    }
    if foods.len() > 1 {
        accuracy += 10;
    }
    if !foods.is_empty() && foods.iter().all(|f| f.detection.confidence > 0.7) {
        accuracy += 5;
    }
    accuracy.min(MAX_ACCURACY)
}

/// Scales every food's per-100 g record by its weight and sums the result.
pub fn analyze_calories(
    foods: &[RecognizedFood],
    portions: &PortionAnalysis,
) -> (CalorieAnalysis, AggregateNutrition) {
    let mut totals = AggregateNutrition::default();
    let mut food_breakdown = Vec::with_capacity(foods.len());

    for food in foods {
        let weight_grams = weight_for(food, portions);
        let factor = weight_grams / 100.0;
        let nutrition = &food.nutrition;

        let breakdown = FoodBreakdown {
            food: food.name().to_string(),
            weight_grams,
            calories: nutrition.calories * factor,
            protein: nutrition.protein * factor,
            carbs: nutrition.carbs * factor,
            fat: nutrition.fat * factor,
        };

        totals.calories += breakdown.calories;
        totals.protein += breakdown.protein;
        totals.carbs += breakdown.carbs;
        totals.fat += breakdown.fat;
        totals.fiber += nutrition.fiber * factor;
        totals.sugar += nutrition.sugar * factor;
        totals.sodium += nutrition.sodium * factor;

        for allergen in &nutrition.allergens {
            if !totals.allergens.contains(allergen) {
                totals.allergens.push(allergen.clone());
            }
        }

        food_breakdown.push(breakdown);
    }

    let analysis = CalorieAnalysis {
        total_calories: totals.calories,
        food_breakdown,
        estimated_accuracy: estimated_accuracy(foods, portions),
    };

    (analysis, totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recognition::{
        entities::{Detection, DetectionSource, PortionEstimate},
        nutrition_table::resolve_nutrition,
    };

    fn food(name: &str, confidence: f64) -> RecognizedFood {
        RecognizedFood {
            detection: Detection {
                name: name.to_string(),
                confidence,
                source: DetectionSource::Label,
                bounds: None,
            },
            nutrition: resolve_nutrition(name),
        }
    }

    fn portions(food: &str, grams: f64) -> PortionAnalysis {
        PortionAnalysis {
            estimates: vec![PortionEstimate {
                food: food.to_string(),
                estimated_weight_grams: grams,
                confidence: 0.9,
                area_percentage: 10.0,
            }],
            total_estimated_weight_grams: grams,
            color_profile_available: false,
        }
    }

    #[test]
    fn test_default_weight_without_estimates() {
        let (analysis, totals) = analyze_calories(&[food("apple", 0.9)], &PortionAnalysis::default());
        assert_eq!(analysis.food_breakdown[0].weight_grams, DEFAULT_PORTION_GRAMS);
        assert_eq!(analysis.total_calories, 95.0);
        assert_eq!(totals.fiber, 4.4);
    }

    #[test]
    fn test_doubling_weight_doubles_totals() {
        let foods = [food("rice", 0.9)];
        let (single, single_totals) = analyze_calories(&foods, &portions("rice", 150.0));
        let (double, double_totals) = analyze_calories(&foods, &portions("rice", 300.0));

        assert_eq!(double.total_calories, 2.0 * single.total_calories);
        assert_eq!(double_totals.protein, 2.0 * single_totals.protein);
        assert_eq!(double_totals.carbs, 2.0 * single_totals.carbs);
        assert_eq!(double_totals.fat, 2.0 * single_totals.fat);
        assert_eq!(double_totals.sodium, 2.0 * single_totals.sodium);
    }

    #[test]
    fn test_allergens_are_unioned_once() {
        let (_, totals) = analyze_calories(
            &[food("pizza", 0.9), food("cheese", 0.9), food("pasta", 0.9)],
            &PortionAnalysis::default(),
        );
        assert_eq!(totals.allergens, vec!["gluten".to_string(), "dairy".to_string()]);
    }

    #[test]
    fn test_accuracy_bonuses_and_cap() {
        let empty = PortionAnalysis::default();
        assert_eq!(estimated_accuracy(&[], &empty), 70);
        assert_eq!(estimated_accuracy(&[food("apple", 0.5)], &empty), 70);
        assert_eq!(estimated_accuracy(&[food("apple", 0.9)], &empty), 75);

        let foods = [food("apple", 0.9), food("banana", 0.8)];
        assert_eq!(estimated_accuracy(&foods, &portions("apple", 100.0)), 95);
    }
}
