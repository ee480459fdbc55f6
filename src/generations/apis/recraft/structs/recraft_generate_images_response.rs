use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A parsed success reply together with its status and raw body text.
#[derive(Debug)]
pub struct RecraftGenerateImagesOutcome {
    pub status: StatusCode,
    pub body: String,
    pub response: RecraftGenerateImagesResponse,
}

/// Upstream success body kept as an open record, so every field (explicit
/// nulls included) survives untouched. Only `data[*].b64_json` and
/// `data[*].url_png` are ever written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecraftGenerateImagesResponse(pub Map<String, Value>);

impl RecraftGenerateImagesResponse {
    pub fn images_mut(&mut self) -> Option<&mut Vec<Value>> {
        self.0.get_mut("data").and_then(Value::as_array_mut)
    }
}
