//! Turns raw annotations into a deduplicated list of food detections.

use std::cmp::Ordering;

use crate::domain::recognition::{
    entities::{Detection, DetectionSource, VisionAnnotations},
    vocabulary::{
        TEXT_DETECTION_CONFIDENCE, is_food_name, mentions_nutrition, normalize_food_name,
    },
};

pub fn label_candidates(annotations: &VisionAnnotations) -> Vec<Detection> {
    annotations
        .labels
        .iter()
        .filter_map(|label| {
            let name = normalize_food_name(&label.description);
            is_food_name(&name).then(|| Detection {
                name,
                confidence: label.score,
                source: DetectionSource::Label,
                bounds: None,
            })
        })
        .collect()
}

pub fn object_candidates(annotations: &VisionAnnotations) -> Vec<Detection> {
    annotations
        .objects
        .iter()
        .filter_map(|object| {
            let name = normalize_food_name(&object.name);
            is_food_name(&name).then(|| Detection {
                name,
                confidence: object.score,
                source: DetectionSource::Object,
                bounds: Some(object.vertices.clone()),
            })
        })
        .collect()
}

/// Text blocks that mention nutrition; the first non-blank line names the detection.
pub fn text_candidates(annotations: &VisionAnnotations) -> Vec<Detection> {
    annotations
        .texts
        .iter()
        .filter(|text| mentions_nutrition(&normalize_food_name(text)))
        .filter_map(|text| {
            let name = text
                .lines()
                .map(normalize_food_name)
                .find(|line| !line.is_empty())?;
            Some(Detection {
                name,
                confidence: TEXT_DETECTION_CONFIDENCE,
                source: DetectionSource::Text,
                bounds: None,
            })
        })
        .collect()
}

fn confidence_key(detection: &Detection) -> f64 {
    if detection.confidence.is_nan() {
        0.0
    } else {
        detection.confidence
    }
}

/// Keeps the most confident detection for every group of overlapping names.
///
/// Candidates are visited by descending confidence; ties keep their input order.
/// A candidate is dropped when its name contains, or is contained in, an accepted name.
pub fn dedupe_detections(mut candidates: Vec<Detection>) -> Vec<Detection> {
    candidates.sort_by(|a, b| {
        confidence_key(b)
            .partial_cmp(&confidence_key(a))
            .unwrap_or(Ordering::Equal)
    });

    let mut accepted: Vec<Detection> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let overlaps = accepted.iter().any(|kept| {
            kept.name.contains(candidate.name.as_str()) || candidate.name.contains(kept.name.as_str())
        });
        if !overlaps {
            accepted.push(candidate);
        }
    }

    accepted
}

/// Labels, then objects, then text, merged and deduplicated.
pub fn aggregate_detections(annotations: &VisionAnnotations) -> Vec<Detection> {
    let mut candidates = label_candidates(annotations);
    candidates.extend(object_candidates(annotations));
    candidates.extend(text_candidates(annotations));
    dedupe_detections(candidates)
}
