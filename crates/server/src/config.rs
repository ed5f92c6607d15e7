use std::env;

pub use common::Environment;
use detection::{ExecutionProvider, InferenceParams};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: Environment,
    pub bind_addr: String,
    pub model_path: String,
    pub model_input_size: u32,
    pub confidence_threshold: f32,
    pub iou_threshold: f32,
    pub device: ExecutionProvider,
    pub accept_invalid_certs: bool,
    pub fetch_timeout_secs: Option<u64>,
}

impl ServerConfig {
    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Self {
        let environment = Environment::from_env();

        let bind_addr =
            env::var("SERVER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5050".to_string());

        let model_path =
            env::var("MODEL_PATH").unwrap_or_else(|_| "models/yolov8n.onnx".to_string());

        let model_input_size = env::var("MODEL_INPUT_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(640);

        let confidence_threshold = env::var("CONFIDENCE_THRESHOLD")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.5);

        let iou_threshold = env::var("IOU_THRESHOLD")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.5);

        let device = env::var("DETECTION_DEVICE")
            .ok()
            .and_then(|s| ExecutionProvider::parse(&s))
            .unwrap_or(ExecutionProvider::Cpu);

        // Upstream image hosts are fetched with certificate validation
        // disabled unless the operator turns this off.
        let accept_invalid_certs = env::var("ACCEPT_INVALID_CERTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        let fetch_timeout_secs = env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());

        Self {
            environment,
            bind_addr,
            model_path,
            model_input_size,
            confidence_threshold,
            iou_threshold,
            device,
            accept_invalid_certs,
            fetch_timeout_secs,
        }
    }

    pub fn inference_params(&self) -> InferenceParams {
        InferenceParams {
            confidence_threshold: self.confidence_threshold,
            iou_threshold: self.iou_threshold,
        }
    }
}
