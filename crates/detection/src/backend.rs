use crate::error::DetectionError;
use ort::session::{Session, builder::GraphOptimizationLevel};

/// Compute device for the ONNX Runtime session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionProvider {
    Cpu,
    Cuda,
}

impl ExecutionProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionProvider::Cpu => "cpu",
            ExecutionProvider::Cuda => "cuda",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "cpu" => Some(ExecutionProvider::Cpu),
            "cuda" | "gpu" => Some(ExecutionProvider::Cuda),
            _ => None,
        }
    }
}

/// Build an ONNX Runtime session for the given weights file.
pub fn build_session(
    model_path: &str,
    provider: ExecutionProvider,
) -> Result<Session, DetectionError> {
    // Initialize ORT environment (idempotent)
    let _ = ort::init().commit();

    let mut builder = Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(4)?;

    match provider {
        ExecutionProvider::Cuda => {
            tracing::info!("Initializing ONNX Runtime with CUDA execution provider");
            builder = builder.with_execution_providers([
                ort::execution_providers::CUDAExecutionProvider::default()
                    .with_device_id(0)
                    .build()
                    .error_on_failure(),
            ])?;
        }
        ExecutionProvider::Cpu => {
            tracing::info!("Initializing ONNX Runtime with CPU execution provider");
        }
    }

    let session = builder.commit_from_file(model_path)?;

    tracing::info!("Model loaded from {}", model_path);
    Ok(session)
}
