use serde::Serialize;
use serde_json::Value;

/// Client values are carried as raw JSON so upstream does the validating.
#[derive(Debug, PartialEq, Serialize)]
pub struct InputSpec {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Value>,
    pub model: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substyle: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<Value>,
    pub n: Value,
    pub response_format: Value,
    pub format: String,
}
