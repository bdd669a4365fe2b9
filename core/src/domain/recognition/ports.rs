use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recognition::{
        entities::{RecognitionOutcome, VisionAnnotations},
        value_objects::RecognizeFoodInput,
    },
};

/// Image-labelling provider: labels, localized objects, text and image properties in one call.
#[cfg_attr(test, mockall::automock)]
pub trait VisionClient: Send + Sync {
    fn is_configured(&self) -> bool;

    fn annotate(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<VisionAnnotations, CoreError>> + Send;
}

pub trait FoodRecognitionService: Send + Sync {
    /// Never fails because of the provider: provider errors degrade to the fallback outcome.
    fn recognize_food(
        &self,
        input: RecognizeFoodInput,
    ) -> impl Future<Output = Result<RecognitionOutcome, CoreError>> + Send;
}
