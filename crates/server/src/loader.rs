use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use image::RgbImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("invalid data uri: missing base64 payload")]
    MalformedDataUri,

    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("image fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Resolve an image reference into a decoded RGB buffer.
///
/// References starting with `data:` are decoded inline from their base64
/// payload; anything else is fetched over HTTP through the shared client.
/// Every failure surfaces as an error, never as an empty buffer.
pub async fn load(image_ref: &str, client: &reqwest::Client) -> Result<RgbImage, LoadError> {
    let bytes = if image_ref.starts_with("data:") {
        let (_, payload) = image_ref
            .split_once(',')
            .ok_or(LoadError::MalformedDataUri)?;
        BASE64.decode(payload)?
    } else {
        client
            .get(image_ref)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec()
    };

    let image = image::load_from_memory(&bytes)?;
    Ok(image.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::io::Cursor;

    fn png_data_uri(image: &RgbImage) -> String {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
        format!("data:image/png;base64,{}", BASE64.encode(bytes.into_inner()))
    }

    #[tokio::test]
    async fn data_uri_round_trips_with_matching_dimensions() {
        let original = RgbImage::from_pixel(5, 3, Rgb([10, 20, 30]));
        let client = reqwest::Client::new();

        let loaded = load(&png_data_uri(&original), &client).await.unwrap();

        assert_eq!(loaded.dimensions(), (5, 3));
    }

    #[tokio::test]
    async fn data_uri_without_payload_is_rejected() {
        let client = reqwest::Client::new();

        let err = load("data:image/png;base64", &client).await.unwrap_err();

        assert!(matches!(err, LoadError::MalformedDataUri));
    }

    #[tokio::test]
    async fn corrupt_base64_payload_is_rejected() {
        let client = reqwest::Client::new();

        let err = load("data:image/png;base64,!!not-base64!!", &client)
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::Base64(_)));
    }

    #[tokio::test]
    async fn non_image_payload_is_rejected() {
        let client = reqwest::Client::new();
        let payload = BASE64.encode(b"plain text, not an image");

        let err = load(&format!("data:text/plain;base64,{payload}"), &client)
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_url_is_a_fetch_error() {
        let client = reqwest::Client::new();

        let err = load("http://127.0.0.1:9/image.jpg", &client)
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::Fetch(_)));
    }
}
