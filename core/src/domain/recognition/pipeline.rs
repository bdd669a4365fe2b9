//! Full analysis of one set of annotations.

use crate::domain::recognition::{
    aggregator::{aggregate_detections, object_candidates},
    calories::analyze_calories,
    entities::{FoodRecognitionReport, RecognizedFood, VisionAnnotations},
    health_score::assess,
    nutrition_table::resolve_nutrition,
    portion::estimate_portions,
};

pub fn confidence_score(foods: &[RecognizedFood]) -> u32 {
    if foods.is_empty() {
        return 0;
    }
    let mean = foods.iter().map(|f| f.detection.confidence).sum::<f64>() / foods.len() as f64;
    (mean * 100.0).round().max(0.0) as u32
}

/// Returns `None` when the annotations contain no food.
pub fn analyze_annotations(annotations: &VisionAnnotations) -> Option<FoodRecognitionReport> {
    let detections = aggregate_detections(annotations);
    if detections.is_empty() {
        return None;
    }

    let recognized_foods: Vec<RecognizedFood> = detections
        .into_iter()
        .map(|detection| RecognizedFood {
            nutrition: resolve_nutrition(&detection.name),
            detection,
        })
        .collect();

    let portion_analysis = estimate_portions(
        &object_candidates(annotations),
        annotations.image_properties.as_ref(),
    );
    let (calorie_analysis, totals) = analyze_calories(&recognized_foods, &portion_analysis);

    Some(FoodRecognitionReport {
        confidence_score: confidence_score(&recognized_foods),
        nutrition_analysis: assess(totals),
        recognized_foods,
        portion_analysis,
        calorie_analysis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recognition::entities::{
        LabelAnnotation, LocalizedObject, RecognitionOutcome, Vertex,
    };

    fn apple_annotations() -> VisionAnnotations {
        VisionAnnotations {
            labels: vec![
                LabelAnnotation {
                    description: "Apple".to_string(),
                    score: 0.95,
                },
                LabelAnnotation {
                    description: "Tableware".to_string(),
                    score: 0.9,
                },
            ],
            objects: vec![LocalizedObject {
                name: "Apple".to_string(),
                score: 0.8,
                vertices: vec![
                    Vertex { x: 0.2, y: 0.2 },
                    Vertex { x: 0.6, y: 0.2 },
                    Vertex { x: 0.6, y: 0.7 },
                    Vertex { x: 0.2, y: 0.7 },
                ],
            }],
            texts: vec![],
            image_properties: None,
        }
    }

    #[test]
    fn test_single_apple_report() {
        let report = analyze_annotations(&apple_annotations()).expect("apple is food");

        assert_eq!(report.recognized_foods.len(), 1);
        let apple = &report.recognized_foods[0];
        assert_eq!(apple.name(), "apple");
        assert_eq!(apple.detection.confidence, 0.95);
        assert_eq!(apple.nutrition.calories, 95.0);

        assert_eq!(report.portion_analysis.estimates.len(), 1);
        // 0.4 * 0.5 * 1000 * 1.1
        assert_eq!(report.portion_analysis.estimates[0].estimated_weight_grams, 220.0);
        assert_eq!(report.calorie_analysis.food_breakdown[0].weight_grams, 220.0);
        assert!((report.calorie_analysis.total_calories - 209.0).abs() < 1e-9);
        // 70 + 15 (estimates) + 5 (all confident)
        assert_eq!(report.calorie_analysis.estimated_accuracy, 90);
        assert_eq!(report.confidence_score, 95);
        assert!(report.nutrition_analysis.health_score <= 100);
    }

    #[test]
    fn test_analyzed_outcome_json_shape() {
        let annotations = VisionAnnotations {
            labels: vec![LabelAnnotation {
                description: "apple".to_string(),
                score: 0.9,
            }],
            ..Default::default()
        };
        let report = analyze_annotations(&annotations).expect("apple is food");
        let json = serde_json::to_value(RecognitionOutcome::Analyzed(report)).unwrap();

        let foods = json["recognized_foods"].as_array().unwrap();
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0]["name"], "apple");
        assert_eq!(foods[0]["confidence"], 0.9);
        assert_eq!(foods[0]["source"], "label");
        assert_eq!(foods[0]["nutrition"]["calories"], 95.0);
        assert_eq!(foods[0]["nutrition"]["protein"], 0.5);
        assert_eq!(foods[0]["nutrition"]["carbs"], 25.0);
        assert_eq!(foods[0]["nutrition"]["fat"], 0.3);
        assert!(foods[0].get("detection").is_none());

        assert!(json["portion_analysis"]["estimates"].as_array().unwrap().is_empty());

        let calories = &json["calorie_analysis"];
        assert_eq!(calories["total_calories"], 95.0);
        assert_eq!(calories["food_breakdown"].as_array().unwrap().len(), 1);
        // 70 + 5 (all confident)
        assert_eq!(calories["estimated_accuracy"], 75);

        let nutrition = &json["nutrition_analysis"];
        for key in [
            "calories", "protein", "carbs", "fat", "fiber", "sugar", "sodium", "allergens",
        ] {
            assert!(nutrition.get(key).is_some(), "missing nutrition_analysis.{key}");
        }
        assert!(nutrition.get("totals").is_none());
        // fiber 4.4 < 5
        assert_eq!(nutrition["health_score"], 90);
        assert_eq!(nutrition["recommendations"].as_array().unwrap().len(), 2);

        assert_eq!(json["confidence_score"], 90);
        assert!(json.get("recognized_food").is_none());
    }

    #[test]
    fn test_no_food_yields_none() {
        let annotations = VisionAnnotations {
            labels: vec![LabelAnnotation {
                description: "Table".to_string(),
                score: 0.99,
            }],
            ..Default::default()
        };
        assert!(analyze_annotations(&annotations).is_none());
    }

    #[test]
    fn test_confidence_score_of_empty_list_is_zero() {
        assert_eq!(confidence_score(&[]), 0);
    }
}
