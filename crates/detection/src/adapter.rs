use std::sync::Mutex;

use image::RgbImage;
use tempfile::NamedTempFile;

use crate::detector::{Detector, RawDetection};
use crate::error::DetectionError;
use crate::yolo::YoloModel;

/// Production [`Detector`] backed by one shared [`YoloModel`].
///
/// The session runs one inference at a time; concurrent callers queue on the
/// internal lock.
pub struct OrtDetector {
    model: Mutex<YoloModel>,
}

impl OrtDetector {
    pub fn new(model: YoloModel) -> Self {
        Self {
            model: Mutex::new(model),
        }
    }
}

impl Detector for OrtDetector {
    fn infer(&self, image: &RgbImage) -> Result<Vec<RawDetection>, DetectionError> {
        // The staged file is removed when the guard drops, on every path.
        let staged = stage_jpeg(image)?;

        let mut model = self
            .model
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        model.predict(staged.path())
    }
}

/// Write the decoded image to a temporary `.jpg` for the model's file-path
/// interface.
fn stage_jpeg(image: &RgbImage) -> Result<NamedTempFile, DetectionError> {
    let staged = tempfile::Builder::new()
        .prefix("annotate-")
        .suffix(".jpg")
        .tempfile()?;

    image.save(staged.path())?;

    Ok(staged)
}
