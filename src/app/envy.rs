use std::time::Duration;

use serde::Deserialize;

use crate::generations::apis::recraft::config::{API_URL, IMAGE_HOST};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub port: Option<u16>,

    pub recraft_api_key: Option<String>,
    pub recraft_api_url: Option<String>,
    pub recraft_image_host: Option<String>,

    pub convert_images: Option<bool>,
    pub request_timeout_secs: Option<u64>,
}

impl Envy {
    /// Empty values count as missing.
    pub fn recraft_api_key(&self) -> Option<&str> {
        self.recraft_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn recraft_api_url(&self) -> &str {
        self.recraft_api_url.as_deref().unwrap_or(API_URL)
    }

    pub fn recraft_image_host(&self) -> &str {
        self.recraft_image_host.as_deref().unwrap_or(IMAGE_HOST)
    }

    pub fn convert_images(&self) -> bool {
        self.convert_images.unwrap_or(true)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(60))
    }
}
