use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{VisionConfig, entities::app_errors::CoreError, non_blank},
    recognition::{
        entities::{
            DominantColor, ImageProperties, LabelAnnotation, LocalizedObject, VisionAnnotations,
            Vertex,
        },
        ports::VisionClient,
    },
};

const MAX_LABELS: u32 = 20;
const MAX_OBJECTS: u32 = 20;

#[derive(Debug, Clone)]
pub struct GoogleVisionClient {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct AnnotateRequest {
    requests: Vec<ImageRequest>,
}

#[derive(Debug, Serialize)]
struct ImageRequest {
    image: ImageContent,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
struct ImageContent {
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<ImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageResponse {
    #[serde(default)]
    label_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    localized_object_annotations: Vec<ObjectAnnotation>,
    #[serde(default)]
    text_annotations: Vec<TextAnnotation>,
    image_properties_annotation: Option<ImagePropertiesAnnotation>,
    error: Option<Status>,
}

#[derive(Debug, Deserialize)]
struct EntityAnnotation {
    #[serde(default)]
    description: String,
    #[serde(default)]
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectAnnotation {
    #[serde(default)]
    name: String,
    #[serde(default)]
    score: f64,
    bounding_poly: Option<BoundingPoly>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoundingPoly {
    #[serde(default)]
    normalized_vertices: Vec<Vertex>,
}

#[derive(Debug, Deserialize)]
struct TextAnnotation {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImagePropertiesAnnotation {
    dominant_colors: Option<DominantColorsAnnotation>,
}

#[derive(Debug, Deserialize)]
struct DominantColorsAnnotation {
    #[serde(default)]
    colors: Vec<ColorInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColorInfo {
    #[serde(default)]
    color: Color,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    pixel_fraction: f64,
}

#[derive(Debug, Default, Deserialize)]
struct Color {
    #[serde(default)]
    red: f64,
    #[serde(default)]
    green: f64,
    #[serde(default)]
    blue: f64,
}

#[derive(Debug, Deserialize)]
struct Status {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

impl From<ImageResponse> for VisionAnnotations {
    fn from(response: ImageResponse) -> Self {
        Self {
            labels: response
                .label_annotations
                .into_iter()
                .map(|label| LabelAnnotation {
                    description: label.description,
                    score: label.score,
                })
                .collect(),
            objects: response
                .localized_object_annotations
                .into_iter()
                .map(|object| LocalizedObject {
                    name: object.name,
                    score: object.score,
                    vertices: object
                        .bounding_poly
                        .map(|poly| poly.normalized_vertices)
                        .unwrap_or_default(),
                })
                .collect(),
            texts: response
                .text_annotations
                .into_iter()
                .map(|text| text.description)
                .filter(|text| !text.trim().is_empty())
                .collect(),
            image_properties: response.image_properties_annotation.map(|properties| {
                ImageProperties {
                    dominant_colors: properties
                        .dominant_colors
                        .map(|dominant| {
                            dominant
                                .colors
                                .into_iter()
                                .map(|info| DominantColor {
                                    red: info.color.red,
                                    green: info.color.green,
                                    blue: info.color.blue,
                                    score: info.score,
                                    pixel_fraction: info.pixel_fraction,
                                })
                                .collect()
                        })
                        .unwrap_or_default(),
                }
            }),
        }
    }
}

impl GoogleVisionClient {
    pub fn new(config: VisionConfig) -> Self {
        Self {
            api_key: non_blank(config.api_key),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn build_request(image_data: &[u8]) -> AnnotateRequest {
        AnnotateRequest {
            requests: vec![ImageRequest {
                image: ImageContent {
                    content: general_purpose::STANDARD.encode(image_data),
                },
                features: vec![
                    Feature {
                        kind: "LABEL_DETECTION",
                        max_results: Some(MAX_LABELS),
                    },
                    Feature {
                        kind: "OBJECT_LOCALIZATION",
                        max_results: Some(MAX_OBJECTS),
                    },
                    Feature {
                        kind: "TEXT_DETECTION",
                        max_results: None,
                    },
                    Feature {
                        kind: "IMAGE_PROPERTIES",
                        max_results: None,
                    },
                ],
            }],
        }
    }

    fn parse_response(body: AnnotateResponse) -> Result<VisionAnnotations, CoreError> {
        let response = body.responses.into_iter().next().ok_or_else(|| {
            CoreError::ExternalServiceError("vision API returned no responses".to_string())
        })?;

        if let Some(status) = &response.error {
            tracing::error!("Vision API annotate error: {} - {}", status.code, status.message);
            return Err(CoreError::ExternalServiceError(format!(
                "vision API error: {}",
                status.message
            )));
        }

        Ok(response.into())
    }
}

impl VisionClient for GoogleVisionClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn annotate(&self, image_data: Vec<u8>) -> Result<VisionAnnotations, CoreError> {
        let Some(api_key) = &self.api_key else {
            return Err(CoreError::ProviderNotConfigured("vision".to_string()));
        };

        let url = format!("{}/images:annotate", self.base_url);

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&Self::build_request(&image_data))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Vision API request failed: {}", e);
                CoreError::ExternalServiceError(format!("vision API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Vision API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "vision API returned error: {}",
                status
            )));
        }

        let body: AnnotateResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Vision API response: {}", e);
            CoreError::ExternalServiceError(format!("failed to parse vision response: {}", e))
        })?;

        Self::parse_response(body)
    }
}
