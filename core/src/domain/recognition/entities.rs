use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw output of one image-labelling call, already decoded from the provider's wire format.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisionAnnotations {
    pub labels: Vec<LabelAnnotation>,
    pub objects: Vec<LocalizedObject>,
    pub texts: Vec<String>,
    pub image_properties: Option<ImageProperties>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAnnotation {
    pub description: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedObject {
    pub name: String,
    pub score: f64,
    pub vertices: Vec<Vertex>,
}

/// Normalised image coordinate in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Vertex {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageProperties {
    pub dominant_colors: Vec<DominantColor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DominantColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub score: f64,
    pub pixel_fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DetectionSource {
    Label,
    Object,
    Text,
}

/// A candidate food from one provider signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Detection {
    pub name: String,
    pub confidence: f64,
    pub source: DetectionSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Vec<Vertex>>,
}

/// Nutrition per 100 g (or per named serving).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionRecord {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub allergens: Vec<String>,
    pub serving_size: String,
    pub glycemic_index: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecognizedFood {
    #[serde(flatten)]
    pub detection: Detection,
    pub nutrition: NutritionRecord,
}

impl RecognizedFood {
    pub fn name(&self) -> &str {
        &self.detection.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortionEstimate {
    pub food: String,
    pub estimated_weight_grams: f64,
    pub confidence: f64,
    pub area_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct PortionAnalysis {
    pub estimates: Vec<PortionEstimate>,
    pub total_estimated_weight_grams: f64,
    pub color_profile_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodBreakdown {
    pub food: String,
    pub weight_grams: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalorieAnalysis {
    pub total_calories: f64,
    pub food_breakdown: Vec<FoodBreakdown>,
    pub estimated_accuracy: u32,
}

/// Sum of every detected food's nutrition scaled to its estimated weight.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct AggregateNutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub allergens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionAnalysis {
    #[serde(flatten)]
    pub totals: AggregateNutrition,
    pub health_score: u8,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodRecognitionReport {
    pub recognized_foods: Vec<RecognizedFood>,
    pub portion_analysis: PortionAnalysis,
    pub calorie_analysis: CalorieAnalysis,
    pub nutrition_analysis: NutritionAnalysis,
    pub confidence_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MockFood {
    pub name: String,
    pub confidence: f64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub serving_size: String,
}

/// Demo response used when no recognition provider is usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FallbackRecognition {
    pub recognized_food: MockFood,
    pub source: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RecognitionOutcome {
    Analyzed(FoodRecognitionReport),
    Fallback(FallbackRecognition),
}
