use std::io::Cursor;

use bytes::Bytes;
use futures::future::join_all;
use image::{ImageError, ImageFormat};
use reqwest::Client;
use serde_json::Value;

use crate::app::util::reqwest::{get_bytes, GetBytesError};

#[derive(Debug)]
pub enum ConversionError {
    Fetch(GetBytesError),
    Decode(ImageError),
    Encode(ImageError),
    Task(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "failed to fetch image: {}", e),
            Self::Decode(e) => write!(f, "failed to decode image: {}", e),
            Self::Encode(e) => write!(f, "failed to encode png: {}", e),
            Self::Task(e) => write!(f, "conversion task failed: {}", e),
        }
    }
}

fn image_url(image: &Value) -> Option<&str> {
    image.get("url").and_then(Value::as_str)
}

/// An image is converted only when its url contains `image_host`.
pub fn needs_conversion(image: &Value, image_host: &str) -> bool {
    match image_url(image) {
        Some(url) => url.contains(image_host),
        None => false,
    }
}

pub fn png_data_uri(b64: &str) -> String {
    format!("data:{};base64,{}", mime::IMAGE_PNG, b64)
}

/// Re-encodes every image hosted on `image_host` as png, concurrently.
/// Failed images keep their original fields.
pub async fn convert_images(images: &mut [Value], client: &Client, image_host: &str) {
    let tasks = images
        .iter()
        .enumerate()
        .filter(|(_, image)| needs_conversion(image, image_host))
        .filter_map(|(index, image)| image_url(image).map(|url| (index, url)))
        .map(|(index, url)| async move {
            let result = fetch_as_png_base64(client, url).await;
            (index, url.to_string(), result)
        });

    let results = join_all(tasks).await;

    for (index, url, result) in results {
        match result {
            Ok(b64) => {
                if let Some(image) = images[index].as_object_mut() {
                    image.insert("url_png".to_string(), Value::from(png_data_uri(&b64)));
                    image.insert("b64_json".to_string(), Value::from(b64));
                    tracing::debug!(%url, "converted image to png");
                }
            }
            Err(e) => {
                tracing::warn!(%url, %e, "image conversion failed, keeping original url");
            }
        }
    }
}

async fn fetch_as_png_base64(client: &Client, url: &str) -> Result<String, ConversionError> {
    let bytes = get_bytes(client, url)
        .await
        .map_err(ConversionError::Fetch)?;

    let png = match tokio::task::spawn_blocking(move || reencode_as_png(&bytes)).await {
        Ok(result) => result?,
        Err(e) => return Err(ConversionError::Task(e.to_string())),
    };

    Ok(base64::encode(png))
}

pub fn reencode_as_png(bytes: &Bytes) -> Result<Vec<u8>, ConversionError> {
    let image = image::load_from_memory(bytes).map_err(ConversionError::Decode)?;

    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(ConversionError::Encode)?;

    Ok(buf)
}
