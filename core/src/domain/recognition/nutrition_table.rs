//! Static nutrition reference table and the resolver over it.
//!
//! Lookup order: exact key, then the first entry (in table order) whose key is
//! contained in the name or contains the name, then [`default_nutrition`].

use crate::domain::recognition::{entities::NutritionRecord, vocabulary::normalize_food_name};

#[derive(Debug, Clone, Copy)]
pub struct NutritionEntry {
    pub key: &'static str,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub allergens: &'static [&'static str],
    pub serving_size: &'static str,
    pub glycemic_index: Option<u32>,
}

impl NutritionEntry {
    pub fn to_record(&self) -> NutritionRecord {
        NutritionRecord {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            fiber: self.fiber,
            sugar: self.sugar,
            sodium: self.sodium,
            allergens: self.allergens.iter().map(|a| a.to_string()).collect(),
            serving_size: self.serving_size.to_string(),
            glycemic_index: self.glycemic_index,
        }
    }
}

const fn entry(
    key: &'static str,
    macros: [f64; 7],
    allergens: &'static [&'static str],
    serving_size: &'static str,
    glycemic_index: Option<u32>,
) -> NutritionEntry {
    NutritionEntry {
        key,
        calories: macros[0],
        protein: macros[1],
        carbs: macros[2],
        fat: macros[3],
        fiber: macros[4],
        sugar: macros[5],
        sodium: macros[6],
        allergens,
        serving_size,
        glycemic_index,
    }
}

/// `[calories, protein, carbs, fat, fiber, sugar, sodium]`; order is the substring tie-break.
pub const NUTRITION_TABLE: &[NutritionEntry] = &[
    entry("apple", [95.0, 0.5, 25.0, 0.3, 4.4, 19.0, 2.0], &[], "1 medium (182g)", Some(36)),
    entry("banana", [105.0, 1.3, 27.0, 0.4, 3.1, 14.0, 1.0], &[], "1 medium (118g)", Some(51)),
    entry("orange", [62.0, 1.2, 15.4, 0.2, 3.1, 12.2, 0.0], &[], "1 medium (131g)", Some(43)),
    entry("strawberry", [32.0, 0.7, 7.7, 0.3, 2.0, 4.9, 1.0], &[], "100g", Some(40)),
    entry("avocado", [160.0, 2.0, 8.5, 14.7, 6.7, 0.7, 7.0], &[], "100g", Some(15)),
    entry("broccoli", [34.0, 2.8, 6.6, 0.4, 2.6, 1.7, 33.0], &[], "100g", Some(15)),
    entry("carrot", [41.0, 0.9, 9.6, 0.2, 2.8, 4.7, 69.0], &[], "100g", Some(39)),
    entry("tomato", [18.0, 0.9, 3.9, 0.2, 1.2, 2.6, 5.0], &[], "100g", Some(15)),
    entry("salad", [20.0, 1.5, 3.5, 0.2, 1.8, 1.5, 25.0], &[], "100g", Some(15)),
    entry("potato", [77.0, 2.0, 17.0, 0.1, 2.2, 0.8, 6.0], &[], "100g", Some(78)),
    entry("fries", [312.0, 3.4, 41.0, 15.0, 3.8, 0.3, 210.0], &[], "100g", Some(75)),
    entry("rice", [130.0, 2.7, 28.0, 0.3, 0.4, 0.1, 1.0], &[], "100g cooked", Some(73)),
    entry("pasta", [131.0, 5.0, 25.0, 1.1, 1.8, 0.6, 1.0], &["gluten"], "100g cooked", Some(49)),
    entry("bread", [265.0, 9.0, 49.0, 3.2, 2.7, 5.0, 491.0], &["gluten"], "100g", Some(75)),
    entry("pizza", [266.0, 11.0, 33.0, 10.0, 2.3, 3.6, 598.0], &["gluten", "dairy"], "100g", Some(60)),
    entry("burger", [295.0, 17.0, 24.0, 14.0, 1.3, 4.5, 396.0], &["gluten"], "100g", Some(66)),
    entry("sandwich", [250.0, 11.0, 30.0, 9.0, 2.0, 4.0, 500.0], &["gluten"], "100g", Some(55)),
    entry("sushi", [143.0, 5.8, 29.0, 0.6, 0.4, 8.0, 428.0], &["fish", "soy"], "100g", Some(55)),
    entry("chicken", [165.0, 31.0, 0.0, 3.6, 0.0, 0.0, 74.0], &[], "100g", None),
    entry("beef", [250.0, 26.0, 0.0, 15.0, 0.0, 0.0, 72.0], &[], "100g", None),
    entry("steak", [271.0, 25.0, 0.0, 19.0, 0.0, 0.0, 54.0], &[], "100g", None),
    entry("pork", [242.0, 27.0, 0.0, 14.0, 0.0, 0.0, 62.0], &[], "100g", None),
    entry("salmon", [208.0, 20.0, 0.0, 13.0, 0.0, 0.0, 59.0], &["fish"], "100g", None),
    entry("fish", [206.0, 22.0, 0.0, 12.0, 0.0, 0.0, 61.0], &["fish"], "100g", None),
    entry("shrimp", [99.0, 24.0, 0.2, 0.3, 0.0, 0.0, 111.0], &["shellfish"], "100g", None),
    entry("egg", [155.0, 13.0, 1.1, 11.0, 0.0, 1.1, 124.0], &["eggs"], "100g", None),
    entry("cheese", [402.0, 25.0, 1.3, 33.0, 0.0, 0.5, 621.0], &["dairy"], "100g", None),
    entry("yogurt", [59.0, 10.0, 3.6, 0.4, 0.0, 3.2, 36.0], &["dairy"], "100g", Some(11)),
    entry("milk", [42.0, 3.4, 5.0, 1.0, 0.0, 5.0, 44.0], &["dairy"], "100ml", Some(31)),
    entry("tofu", [76.0, 8.0, 1.9, 4.8, 0.3, 0.6, 7.0], &["soy"], "100g", Some(15)),
    entry("peanut", [567.0, 26.0, 16.0, 49.0, 8.5, 4.7, 18.0], &["peanuts"], "100g", Some(14)),
    entry("almond", [579.0, 21.0, 22.0, 50.0, 12.5, 4.4, 1.0], &["tree nuts"], "100g", Some(0)),
    entry("oat", [389.0, 16.9, 66.0, 6.9, 10.6, 0.0, 2.0], &["gluten"], "100g dry", Some(55)),
    entry("cake", [257.0, 3.0, 38.0, 11.0, 0.6, 26.0, 242.0], &["gluten", "eggs", "dairy"], "100g", Some(60)),
    entry("cookie", [502.0, 5.0, 64.0, 25.0, 2.0, 36.0, 386.0], &["gluten", "dairy"], "100g", Some(62)),
    entry("chocolate", [546.0, 4.9, 61.0, 31.0, 7.0, 48.0, 24.0], &["dairy"], "100g", Some(40)),
    entry("ice cream", [207.0, 3.5, 24.0, 11.0, 0.7, 21.0, 80.0], &["dairy"], "100g", Some(51)),
];

/// Used when no table entry matches.
pub fn default_nutrition() -> NutritionRecord {
    NutritionRecord {
        calories: 100.0,
        protein: 5.0,
        carbs: 15.0,
        fat: 2.0,
        fiber: 2.0,
        sugar: 3.0,
        sodium: 50.0,
        allergens: Vec::new(),
        serving_size: "100g".to_string(),
        glycemic_index: None,
    }
}

/// Finds the table entry for a free-text name, if any.
pub fn find_entry(name: &str) -> Option<&'static NutritionEntry> {
    let name = normalize_food_name(name);
    if name.is_empty() {
        return None;
    }

    NUTRITION_TABLE
        .iter()
        .find(|e| e.key == name)
        .or_else(|| {
            NUTRITION_TABLE
                .iter()
                .find(|e| name.contains(e.key) || e.key.contains(name.as_str()))
        })
}

/// Deterministic, pure resolution of a food name to its nutrition record.
pub fn resolve_nutrition(name: &str) -> NutritionRecord {
    find_entry(name)
        .map(NutritionEntry::to_record)
        .unwrap_or_else(default_nutrition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let record = resolve_nutrition("Apple");
        assert_eq!(record.calories, 95.0);
        assert_eq!(record.protein, 0.5);
        assert_eq!(record.carbs, 25.0);
        assert_eq!(record.fat, 0.3);
    }

    #[test]
    fn test_substring_match_both_directions() {
        assert_eq!(resolve_nutrition("grilled chicken breast").calories, 165.0);
        // "straw" is contained in the "strawberry" key
        assert_eq!(resolve_nutrition("straw").calories, 32.0);
    }

    #[test]
    fn test_table_order_breaks_ties() {
        // both "salmon" and "fish" keys appear in the name; "salmon" comes first
        assert_eq!(resolve_nutrition("salmon fish").calories, 208.0);
        // "cheese" and "burger" both match; "burger" is earlier in the table
        assert_eq!(resolve_nutrition("cheese burger").calories, 295.0);
    }

    #[test]
    fn test_unknown_food_uses_default() {
        let record = resolve_nutrition("xylophone fruit");
        assert_eq!(record, default_nutrition());
        assert_eq!(record.calories, 100.0);
        assert_eq!(record.protein, 5.0);
        assert_eq!(record.carbs, 15.0);
        assert_eq!(record.fat, 2.0);
        assert!(record.allergens.is_empty());
    }

    #[test]
    fn test_empty_name_uses_default() {
        assert_eq!(resolve_nutrition("   "), default_nutrition());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for name in ["pizza slice", "mystery stew", "Banana", "rice bowl"] {
            assert_eq!(resolve_nutrition(name), resolve_nutrition(name));
        }
    }

    #[test]
    fn test_keys_are_normalised() {
        for e in NUTRITION_TABLE {
            assert_eq!(normalize_food_name(e.key), e.key);
        }
    }
}
