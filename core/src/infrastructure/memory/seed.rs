//! Catalogue content loaded into the stores at start-up.

use crate::domain::{
    food::entities::{Food, FoodConfig},
    recipe::entities::{Difficulty, Recipe, RecipeConfig, RecipeIngredient, RecipeNutrition},
    workout::entities::{Workout, WorkoutConfig, WorkoutExercise},
};

fn ingredient(name: &str, quantity: f64, unit: &str) -> RecipeIngredient {
    RecipeIngredient {
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(RecipeConfig {
            name: "Grilled Chicken Quinoa Bowl".to_string(),
            description: "High-protein bowl with quinoa, chicken and roasted vegetables.".to_string(),
            category: "lunch".to_string(),
            cuisine: "mediterranean".to_string(),
            difficulty: Difficulty::Medium,
            prep_time_minutes: 15,
            cook_time_minutes: 20,
            servings: 2,
            ingredients: vec![
                ingredient("chicken breast", 300.0, "g"),
                ingredient("quinoa", 150.0, "g"),
                ingredient("zucchini", 1.0, "piece"),
                ingredient("olive oil", 1.0, "tbsp"),
            ],
            instructions: strings(&[
                "Cook the quinoa in salted water.",
                "Grill the chicken for 6 minutes per side.",
                "Roast the zucchini and assemble the bowls.",
            ]),
            nutrition: RecipeNutrition {
                calories: 520.0,
                protein: 45.0,
                carbs: 48.0,
                fat: 14.0,
            },
            tags: strings(&["high-protein", "gluten-free"]),
            image_url: None,
        }),
        Recipe::new(RecipeConfig {
            name: "Overnight Oats".to_string(),
            description: "No-cook breakfast prepared the night before.".to_string(),
            category: "breakfast".to_string(),
            cuisine: "american".to_string(),
            difficulty: Difficulty::Easy,
            prep_time_minutes: 5,
            cook_time_minutes: 0,
            servings: 1,
            ingredients: vec![
                ingredient("rolled oats", 50.0, "g"),
                ingredient("milk", 150.0, "ml"),
                ingredient("blueberries", 80.0, "g"),
            ],
            instructions: strings(&[
                "Mix oats and milk in a jar.",
                "Refrigerate overnight and top with berries.",
            ]),
            nutrition: RecipeNutrition {
                calories: 310.0,
                protein: 12.0,
                carbs: 50.0,
                fat: 7.0,
            },
            tags: strings(&["vegetarian", "quick"]),
            image_url: None,
        }),
        Recipe::new(RecipeConfig {
            name: "Salmon with Roasted Broccoli".to_string(),
            description: "Oven-baked salmon fillet with lemon and broccoli.".to_string(),
            category: "dinner".to_string(),
            cuisine: "nordic".to_string(),
            difficulty: Difficulty::Easy,
            prep_time_minutes: 10,
            cook_time_minutes: 18,
            servings: 2,
            ingredients: vec![
                ingredient("salmon fillet", 2.0, "piece"),
                ingredient("broccoli", 300.0, "g"),
                ingredient("lemon", 1.0, "piece"),
            ],
            instructions: strings(&[
                "Heat the oven to 200C.",
                "Bake salmon and broccoli on one tray for 18 minutes.",
            ]),
            nutrition: RecipeNutrition {
                calories: 430.0,
                protein: 36.0,
                carbs: 12.0,
                fat: 26.0,
            },
            tags: strings(&["omega-3", "low-carb"]),
            image_url: None,
        }),
    ]
}

fn exercise(
    name: &str,
    sets: u32,
    reps: Option<u32>,
    duration_seconds: Option<u32>,
    rest_seconds: u32,
) -> WorkoutExercise {
    WorkoutExercise {
        name: name.to_string(),
        sets,
        reps,
        duration_seconds,
        rest_seconds,
    }
}

pub fn seed_workouts() -> Vec<Workout> {
    vec![
        Workout::new(WorkoutConfig {
            name: "Full Body Starter".to_string(),
            description: "Bodyweight circuit for beginners.".to_string(),
            category: "strength".to_string(),
            difficulty: Difficulty::Easy,
            duration_minutes: 25,
            calories_burned: 180.0,
            equipment: Vec::new(),
            exercises: vec![
                exercise("squats", 3, Some(12), None, 60),
                exercise("push-ups", 3, Some(10), None, 60),
                exercise("plank", 3, None, Some(30), 45),
            ],
        }),
        Workout::new(WorkoutConfig {
            name: "HIIT Burner".to_string(),
            description: "Short high-intensity intervals.".to_string(),
            category: "cardio".to_string(),
            difficulty: Difficulty::Hard,
            duration_minutes: 20,
            calories_burned: 260.0,
            equipment: strings(&["jump rope"]),
            exercises: vec![
                exercise("burpees", 4, None, Some(40), 20),
                exercise("jump rope", 4, None, Some(60), 30),
                exercise("mountain climbers", 4, None, Some(40), 20),
            ],
        }),
        Workout::new(WorkoutConfig {
            name: "Dumbbell Upper Body".to_string(),
            description: "Push and pull supersets.".to_string(),
            category: "strength".to_string(),
            difficulty: Difficulty::Medium,
            duration_minutes: 40,
            calories_burned: 240.0,
            equipment: strings(&["dumbbells", "bench"]),
            exercises: vec![
                exercise("bench press", 4, Some(10), None, 90),
                exercise("bent-over row", 4, Some(10), None, 90),
                exercise("shoulder press", 3, Some(12), None, 60),
            ],
        }),
    ]
}

#[allow(clippy::too_many_arguments)]
fn food(
    name: &str,
    brand: Option<&str>,
    category: &str,
    serving_size: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    sugar: f64,
    sodium: f64,
) -> Food {
    Food::new(FoodConfig {
        name: name.to_string(),
        brand: brand.map(str::to_string),
        category: category.to_string(),
        serving_size: serving_size.to_string(),
        calories,
        protein,
        carbs,
        fat,
        fiber,
        sugar,
        sodium,
    })
}

pub fn seed_foods() -> Vec<Food> {
    vec![
        food("Greek Yogurt, Plain", None, "dairy", "170g", 100.0, 17.0, 6.0, 0.7, 0.0, 6.0, 61.0),
        food("Rolled Oats", None, "grains", "40g", 150.0, 5.0, 27.0, 3.0, 4.0, 1.0, 0.0),
        food("Chicken Breast, Grilled", None, "protein", "100g", 165.0, 31.0, 0.0, 3.6, 0.0, 0.0, 74.0),
        food("Almond Butter", Some("Nutty Farms"), "spreads", "32g", 196.0, 6.7, 6.0, 17.8, 3.3, 1.6, 2.0),
        food("Protein Bar, Chocolate", Some("FitFuel"), "snacks", "60g", 220.0, 20.0, 24.0, 7.0, 5.0, 3.0, 180.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_valid_and_unique() {
        let recipes = seed_recipes();
        let workouts = seed_workouts();
        let foods = seed_foods();

        assert!(recipes.iter().all(|r| r.servings > 0 && !r.ingredients.is_empty()));
        assert!(workouts.iter().all(|w| w.duration_minutes > 0 && !w.exercises.is_empty()));

        let mut ids: Vec<_> = recipes.iter().map(|r| r.id).collect();
        ids.extend(workouts.iter().map(|w| w.id));
        ids.extend(foods.iter().map(|f| f.id));
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
