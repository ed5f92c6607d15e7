use crate::error::DetectionError;
use fast_image_resize::{
    FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image,
};
use image::RgbImage;
use ndarray::{Array, IxDyn};

const LETTERBOX_COLOR: u8 = 114;

/// Maps letterboxed model-input coordinates back to the source image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterboxTransform {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Resize onto a square canvas with preserved aspect ratio and produce the
/// model input tensor (`[1, 3, size, size]`, pixels scaled to 0-1).
pub fn letterbox(
    image: &RgbImage,
    input_size: u32,
) -> Result<(Array<f32, IxDyn>, LetterboxTransform), DetectionError> {
    let (width, height) = image.dimensions();

    let scale = (input_size as f32 / width as f32).min(input_size as f32 / height as f32);
    let new_width = ((width as f32 * scale) as u32).max(1);
    let new_height = ((height as f32 * scale) as u32).max(1);
    let offset_x = (input_size - new_width) / 2;
    let offset_y = (input_size - new_height) / 2;

    let mut rgb = image.as_raw().clone();
    let src = Image::from_slice_u8(width, height, &mut rgb, PixelType::U8x3)?;
    let mut resized = Image::new(new_width, new_height, PixelType::U8x3);

    Resizer::new().resize(
        &src,
        &mut resized,
        &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear)),
    )?;

    let mut canvas = vec![LETTERBOX_COLOR; (input_size * input_size * 3) as usize];
    let stride = (input_size * 3) as usize;
    let row_bytes = (new_width * 3) as usize;
    let resized_data = resized.buffer();

    for row in 0..new_height as usize {
        let src_start = row * row_bytes;
        let dst_start = (row + offset_y as usize) * stride + (offset_x * 3) as usize;
        canvas[dst_start..dst_start + row_bytes]
            .copy_from_slice(&resized_data[src_start..src_start + row_bytes]);
    }

    let spatial = (input_size * input_size) as usize;
    let mut tensor = vec![0.0f32; 3 * spatial];
    for (i, px) in canvas.chunks_exact(3).enumerate() {
        tensor[i] = px[0] as f32 / 255.0;
        tensor[i + spatial] = px[1] as f32 / 255.0;
        tensor[i + 2 * spatial] = px[2] as f32 / 255.0;
    }

    let input = Array::from_shape_vec(
        IxDyn(&[1, 3, input_size as usize, input_size as usize]),
        tensor,
    )?;

    Ok((
        input,
        LetterboxTransform {
            scale,
            offset_x: offset_x as f32,
            offset_y: offset_y as f32,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn output_tensor_has_model_input_shape() {
        let image = RgbImage::from_pixel(320, 240, Rgb([0, 0, 0]));
        let (input, _) = letterbox(&image, 640).unwrap();

        assert_eq!(input.shape(), &[1, 3, 640, 640]);
    }

    #[test]
    fn scale_and_offsets_preserve_aspect_ratio() {
        // 800x600 into 640: scale = min(640/800, 640/600) = 0.8,
        // resized 640x480, vertical padding (640-480)/2 = 80.
        let image = RgbImage::from_pixel(800, 600, Rgb([128, 128, 128]));
        let (_, transform) = letterbox(&image, 640).unwrap();

        assert_eq!(transform.scale, 0.8);
        assert_eq!(transform.offset_x, 0.0);
        assert_eq!(transform.offset_y, 80.0);
    }

    #[test]
    fn pixels_are_scaled_to_unit_range() {
        let image = RgbImage::from_pixel(640, 640, Rgb([255, 0, 128]));
        let (input, _) = letterbox(&image, 640).unwrap();

        let r = input[[0, 0, 320, 320]];
        let g = input[[0, 1, 320, 320]];
        let b = input[[0, 2, 320, 320]];

        assert!((r - 1.0).abs() < 1e-6, "red channel should be 1.0, got {r}");
        assert!(g.abs() < 1e-6, "green channel should be 0.0, got {g}");
        assert!((b - 128.0 / 255.0).abs() < 1e-6, "blue channel off: {b}");
    }

    #[test]
    fn padding_rows_are_letterbox_gray() {
        let image = RgbImage::from_pixel(800, 600, Rgb([0, 0, 0]));
        let (input, transform) = letterbox(&image, 640).unwrap();

        // Rows above the vertical offset are padding.
        let pad = input[[0, 0, (transform.offset_y as usize) / 2, 320]];
        assert!(
            (pad - LETTERBOX_COLOR as f32 / 255.0).abs() < 1e-6,
            "padding should be gray 114, got {pad}"
        );

        // The image area itself is black.
        let center = input[[0, 0, 320, 320]];
        assert!(center.abs() < 1e-6, "image area should be black, got {center}");
    }
}
