pub mod adapter;
pub mod annotation;
pub mod backend;
pub mod detector;
pub mod error;
pub mod labels;
pub mod postprocess;
pub mod preprocess;
pub mod yolo;

pub use adapter::OrtDetector;
pub use annotation::{Annotation, format_detections};
pub use backend::ExecutionProvider;
pub use detector::{Detector, InferenceParams, RawDetection};
pub use error::DetectionError;
pub use yolo::YoloModel;
