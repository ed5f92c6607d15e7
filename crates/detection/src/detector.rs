use crate::error::DetectionError;
use image::RgbImage;

/// A single box reported by the model, in source-image pixel coordinates.
///
/// Corners are un-clamped; callers format them into bounded annotations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDetection {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub confidence: f32,
    pub class_id: u32,
}

/// Inference parameters, fixed at startup.
#[derive(Debug, Clone, Copy)]
pub struct InferenceParams {
    pub confidence_threshold: f32,
    pub iou_threshold: f32,
}

impl Default for InferenceParams {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.5,
            iou_threshold: 0.5,
        }
    }
}

/// Object detection over a decoded image.
///
/// The production implementation wraps a shared ONNX session; tests
/// substitute a fake. Implementations must be safe to call from multiple
/// request tasks at once.
pub trait Detector: Send + Sync {
    fn infer(&self, image: &RgbImage) -> Result<Vec<RawDetection>, DetectionError>;
}
