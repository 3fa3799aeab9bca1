use std::sync::Arc;

use client::SubmissionSource;

use crate::config::AppConfig;
use crate::in_flight::InFlight;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn SubmissionSource>,
    pub in_flight: InFlight,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(source: Arc<dyn SubmissionSource>, config: AppConfig) -> Self {
        Self {
            source,
            in_flight: InFlight::default(),
            config,
        }
    }
}
