//! Fixed vocabularies and name normalisation shared by the recognition steps.

/// Label and object names are kept when their normalised form contains one of these.
pub const FOOD_KEYWORDS: &[&str] = &[
    "apple",
    "banana",
    "orange",
    "grape",
    "strawberr",
    "blueberr",
    "mango",
    "pineapple",
    "watermelon",
    "lemon",
    "avocado",
    "tomato",
    "carrot",
    "broccoli",
    "lettuce",
    "spinach",
    "salad",
    "potato",
    "corn",
    "cucumber",
    "pepper",
    "onion",
    "mushroom",
    "bean",
    "rice",
    "pasta",
    "spaghetti",
    "noodle",
    "bread",
    "toast",
    "bagel",
    "sandwich",
    "burger",
    "pizza",
    "taco",
    "burrito",
    "sushi",
    "soup",
    "egg",
    "cheese",
    "yogurt",
    "milk",
    "beef",
    "steak",
    "pork",
    "bacon",
    "sausage",
    "chicken",
    "turkey",
    "fish",
    "salmon",
    "tuna",
    "shrimp",
    "tofu",
    "almond",
    "peanut",
    "oat",
    "cereal",
    "pancake",
    "waffle",
    "cake",
    "cookie",
    "muffin",
    "donut",
    "doughnut",
    "chocolate",
    "ice cream",
    "fries",
];

/// Text detections are kept when they mention one of these.
pub const NUTRITION_TEXT_KEYWORDS: &[&str] = &[
    "calorie",
    "kcal",
    "protein",
    "carb",
    "fat",
    "sugar",
    "sodium",
    "fiber",
    "fibre",
    "nutrition",
    "serving",
];

/// Confidence given to text detections, which carry no provider score.
pub const TEXT_DETECTION_CONFIDENCE: f64 = 0.6;

/// Trims, lowercases and collapses inner whitespace.
pub fn normalize_food_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Two normalised names overlap when either contains the other.
pub fn names_overlap(a: &str, b: &str) -> bool {
    let a = normalize_food_name(a);
    let b = normalize_food_name(b);
    a.contains(&b) || b.contains(&a)
}

pub fn is_food_name(normalized: &str) -> bool {
    !normalized.is_empty() && FOOD_KEYWORDS.iter().any(|k| normalized.contains(k))
}

pub fn mentions_nutrition(normalized: &str) -> bool {
    NUTRITION_TEXT_KEYWORDS
        .iter()
        .any(|k| normalized.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalisation_collapses_whitespace_and_case() {
        assert_eq!(normalize_food_name("  Granny   Smith\tApple "), "granny smith apple");
    }

    #[test]
    fn overlap_is_symmetric_and_case_insensitive() {
        assert!(names_overlap("Apple", "green apple"));
        assert!(names_overlap("green apple", "APPLE"));
        assert!(!names_overlap("apple", "banana"));
    }

    #[test]
    fn vocabulary_checks() {
        assert!(is_food_name("fried chicken"));
        assert!(!is_food_name("table"));
        assert!(!is_food_name(""));
        assert!(mentions_nutrition("nutrition facts"));
        assert!(!mentions_nutrition("best before 2025"));
    }
}
