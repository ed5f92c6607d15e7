use crate::detector::RawDetection;
use crate::labels::label_for;
use serde::{Deserialize, Serialize};

/// Public result unit: a clamped `[x, y, width, height]` box with its
/// confidence and label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Annotation {
    pub bbox: [f32; 4],
    pub confidence: f32,
    pub label: String,
}

/// Convert raw detections into annotations bounded by the image.
///
/// Corners are clamped to `[0, width] x [0, height]` before the box extent
/// is computed, and extents floor at zero. Output order preserves detection
/// order; no boxes are merged or dropped here.
pub fn format_detections(
    detections: &[RawDetection],
    image_width: u32,
    image_height: u32,
) -> Vec<Annotation> {
    let max_x = image_width as f32;
    let max_y = image_height as f32;

    detections
        .iter()
        .map(|detection| {
            let x1 = detection.x1.clamp(0.0, max_x);
            let y1 = detection.y1.clamp(0.0, max_y);
            let x2 = detection.x2.clamp(0.0, max_x);
            let y2 = detection.y2.clamp(0.0, max_y);

            Annotation {
                bbox: [x1, y1, (x2 - x1).max(0.0), (y2 - y1).max(0.0)],
                confidence: detection.confidence,
                label: label_for(detection.class_id),
            }
        })
        .collect()
}
