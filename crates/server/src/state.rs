use std::sync::Arc;

use detection::Detector;

/// Shared per-process state: the injected detector and the outbound HTTP
/// client for URL image references.
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<dyn Detector>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(detector: Arc<dyn Detector>, http: reqwest::Client) -> Self {
        Self { detector, http }
    }
}
