use std::sync::Arc;

use fitpulse_core::application::FitpulseService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FitpulseService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FitpulseService) -> Self {
        Self { args, service }
    }
}
