use std::path::Path;

use ort::{session::Session, value::TensorRef};

use crate::backend::{ExecutionProvider, build_session};
use crate::detector::{InferenceParams, RawDetection};
use crate::error::DetectionError;
use crate::postprocess::parse_output;
use crate::preprocess::letterbox;

/// Pretrained YOLO detection model behind a file-path interface.
///
/// The exported graph carries its own non-maximum suppression (tuned at
/// export time with the configured IoU threshold) and emits `output0` rows
/// of `(x1, y1, x2, y2, confidence, class)`.
pub struct YoloModel {
    session: Session,
    input_size: u32,
    params: InferenceParams,
}

impl YoloModel {
    pub fn load(
        model_path: &str,
        provider: ExecutionProvider,
        input_size: u32,
        params: InferenceParams,
    ) -> Result<Self, DetectionError> {
        let session = build_session(model_path, provider)?;

        tracing::info!(
            confidence_threshold = params.confidence_threshold,
            iou_threshold = params.iou_threshold,
            input_size,
            device = provider.as_str(),
            "Detection model ready"
        );

        Ok(Self {
            session,
            input_size,
            params,
        })
    }

    /// Run detection on an encoded image file.
    ///
    /// Returned boxes are in source-image pixel coordinates, un-clamped.
    pub fn predict(&mut self, source: &Path) -> Result<Vec<RawDetection>, DetectionError> {
        let image = image::open(source)?.to_rgb8();
        let (input, transform) = letterbox(&image, self.input_size)?;

        let outputs = self.session.run(ort::inputs![
            "images" => TensorRef::from_array_view(input.view())?
        ])?;

        let Some(value) = outputs.get("output0") else {
            return Err(DetectionError::Output("missing output0 tensor".to_string()));
        };
        let output = value.try_extract_array::<f32>()?;

        parse_output(&output, &transform, self.params.confidence_threshold)
    }
}
