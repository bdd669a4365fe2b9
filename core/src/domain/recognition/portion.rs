//! Portion-size estimation from object bounding boxes.

use crate::domain::recognition::entities::{
    Detection, ImageProperties, PortionAnalysis, PortionEstimate,
};

/// Grams per unit of normalised area, before the per-food multiplier.
pub const GRAMS_PER_UNIT_AREA: f64 = 1000.0;

/// Density multipliers; the first key contained in the name wins when there is no exact key.
pub const PORTION_MULTIPLIERS: &[(&str, f64)] = &[
    ("rice", 1.3),
    ("pasta", 1.2),
    ("bread", 0.6),
    ("salad", 0.5),
    ("lettuce", 0.4),
    ("apple", 1.1),
    ("banana", 0.9),
    ("chicken", 1.2),
    ("beef", 1.3),
    ("steak", 1.3),
    ("fish", 1.0),
    ("soup", 1.5),
    ("pizza", 0.8),
    ("cake", 0.7),
    ("cookie", 0.4),
    ("egg", 0.5),
    ("cheese", 0.8),
];

pub fn portion_multiplier(name: &str) -> f64 {
    PORTION_MULTIPLIERS
        .iter()
        .find(|(key, _)| *key == name)
        .or_else(|| PORTION_MULTIPLIERS.iter().find(|(key, _)| name.contains(key)))
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(1.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Estimates one portion per object detection that carries at least four vertices.
pub fn estimate_portions(
    objects: &[Detection],
    image_properties: Option<&ImageProperties>,
) -> PortionAnalysis {
    let estimates: Vec<PortionEstimate> = objects
        .iter()
        .filter_map(|object| {
            let vertices = object.bounds.as_deref()?;
            if vertices.len() < 4 {
                return None;
            }

            let width = (vertices[1].x - vertices[0].x).abs();
            let height = (vertices[2].y - vertices[1].y).abs();
            let area = width * height;

            Some(PortionEstimate {
                food: object.name.clone(),
                estimated_weight_grams: (area * GRAMS_PER_UNIT_AREA * portion_multiplier(&object.name))
                    .round(),
                confidence: object.confidence,
                area_percentage: round_to(area * 100.0, 2),
            })
        })
        .collect();

    let total_estimated_weight_grams = estimates.iter().map(|e| e.estimated_weight_grams).sum();

    PortionAnalysis {
        estimates,
        total_estimated_weight_grams,
        color_profile_available: image_properties.is_some(),
    }
}
