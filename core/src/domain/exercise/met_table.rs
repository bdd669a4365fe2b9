//! Offline calorie estimate from metabolic equivalents.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::exercise::entities::ExerciseEstimate;

pub const DEFAULT_DURATION_MINUTES: f64 = 30.0;
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
/// MET used when no keyword matches.
pub const DEFAULT_MET: f64 = 4.0;

/// Keyword to MET; the first keyword contained in the query wins.
pub const MET_TABLE: &[(&str, f64)] = &[
    ("jump rope", 12.3),
    ("skipping", 12.3),
    ("sprint", 11.0),
    ("running", 9.8),
    ("run", 9.8),
    ("jog", 7.0),
    ("hiit", 8.0),
    ("swim", 8.0),
    ("cycling", 7.5),
    ("bike", 7.5),
    ("biking", 7.5),
    ("rowing", 7.0),
    ("soccer", 7.0),
    ("tennis", 7.3),
    ("basketball", 6.5),
    ("hiking", 6.0),
    ("hike", 6.0),
    ("weight", 5.0),
    ("strength", 5.0),
    ("elliptical", 5.0),
    ("dancing", 5.0),
    ("dance", 5.0),
    ("walking", 3.5),
    ("walk", 3.5),
    ("pilates", 3.0),
    ("yoga", 2.5),
    ("stretching", 2.3),
];

static DURATION_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(hours?|hrs?|h\b|minutes?|mins?|m\b)").ok()
});

pub fn met_for(query: &str) -> (String, f64) {
    let query = query.to_lowercase();
    MET_TABLE
        .iter()
        .find(|(keyword, _)| query.contains(keyword))
        .map(|(keyword, met)| (keyword.to_string(), *met))
        .unwrap_or_else(|| (query.trim().to_string(), DEFAULT_MET))
}

/// Reads "30 min", "45 minutes", "1 hour" or "1.5 hrs"; defaults to 30 minutes.
pub fn parse_duration_minutes(query: &str) -> f64 {
    let Some(pattern) = DURATION_PATTERN.as_ref() else {
        return DEFAULT_DURATION_MINUTES;
    };

    pattern
        .captures(query)
        .and_then(|caps| {
            let amount: f64 = caps.get(1)?.as_str().parse().ok()?;
            let unit = caps.get(2)?.as_str().to_lowercase();
            Some(if unit.starts_with('h') {
                amount * 60.0
            } else {
                amount
            })
        })
        .filter(|minutes| *minutes > 0.0)
        .unwrap_or(DEFAULT_DURATION_MINUTES)
}

/// kcal = MET x kg x hours.
pub fn estimate_with_met(query: &str, weight_kg: Option<f64>) -> ExerciseEstimate {
    let (name, met) = met_for(query);
    let duration_minutes = parse_duration_minutes(query);
    let weight_kg = weight_kg
        .filter(|w| w.is_finite() && *w > 0.0)
        .unwrap_or(DEFAULT_WEIGHT_KG);

    ExerciseEstimate {
        name,
        duration_minutes,
        calories_burned: (met * weight_kg * duration_minutes / 60.0).round(),
        met: Some(met),
    }
}
