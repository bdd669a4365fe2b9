#[derive(Debug, Clone)]
pub struct RecognizeFoodInput {
    pub image_data: Vec<u8>,
}
