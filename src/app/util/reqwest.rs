use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client, StatusCode};

pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).build()
}

#[derive(Debug)]
pub enum GetBytesError {
    Request(reqwest::Error),
    Status(StatusCode),
}

impl std::fmt::Display for GetBytesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(e) => write!(f, "request failed: {}", e),
            Self::Status(code) => write!(f, "unexpected status {}", code),
        }
    }
}

pub async fn get_bytes(client: &Client, url: &str) -> Result<Bytes, GetBytesError> {
    match client.get(url).send().await {
        Ok(res) => {
            if !res.status().is_success() {
                return Err(GetBytesError::Status(res.status()));
            }

            match res.bytes().await {
                Ok(bytes) => Ok(bytes),
                Err(e) => Err(GetBytesError::Request(e)),
            }
        }
        Err(e) => Err(GetBytesError::Request(e)),
    }
}
