use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("temporary image file: {0}")]
    Staging(#[from] io::Error),

    #[error("image codec: {0}")]
    Codec(#[from] image::ImageError),

    #[error("resize: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("resize buffer: {0}")]
    ResizeBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("tensor layout: {0}")]
    Tensor(#[from] ndarray::ShapeError),

    #[error("model session: {0}")]
    Session(#[from] ort::Error),

    #[error("unexpected model output: {0}")]
    Output(String),
}
