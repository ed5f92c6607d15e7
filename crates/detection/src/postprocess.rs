use crate::detector::RawDetection;
use crate::error::DetectionError;
use crate::preprocess::LetterboxTransform;
use ndarray::ArrayViewD;

/// Unpack `[1, N, 6]` output rows of `(x1, y1, x2, y2, confidence, class)`
/// into source-image coordinates.
///
/// Rows under the confidence threshold are dropped. Coordinates come back
/// un-clamped; bounding happens when annotations are formatted. Any other
/// output shape is an error rather than an empty result.
pub fn parse_output(
    output: &ArrayViewD<f32>,
    transform: &LetterboxTransform,
    confidence_threshold: f32,
) -> Result<Vec<RawDetection>, DetectionError> {
    let shape = output.shape();
    if shape.len() != 3 || shape[0] != 1 || shape[2] != 6 {
        return Err(DetectionError::Output(format!(
            "expected [1, N, 6] detection rows, got {shape:?}"
        )));
    }

    let mut detections = Vec::new();

    for i in 0..shape[1] {
        let confidence = output[[0, i, 4]];
        if confidence < confidence_threshold {
            continue;
        }

        detections.push(RawDetection {
            x1: (output[[0, i, 0]] - transform.offset_x) / transform.scale,
            y1: (output[[0, i, 1]] - transform.offset_y) / transform.scale,
            x2: (output[[0, i, 2]] - transform.offset_x) / transform.scale,
            y2: (output[[0, i, 3]] - transform.offset_y) / transform.scale,
            confidence,
            class_id: output[[0, i, 5]] as u32,
        });
    }

    Ok(detections)
}
