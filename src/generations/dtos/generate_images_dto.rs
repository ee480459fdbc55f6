use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::generations::apis::recraft::{
    config::{DEFAULT_MODEL, DEFAULT_NUMBER, DEFAULT_RESPONSE_FORMAT, OUTPUT_FORMAT},
    models::input_spec::InputSpec,
};

/// Optional fields stay raw JSON: an absent key is `None`, an explicit
/// `null` is `Some(Value::Null)` and is forwarded as such.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateImagesDto {
    #[validate(custom(function = "validate_prompt"))]
    pub prompt: String,
    #[serde(default, deserialize_with = "present")]
    pub style: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub model: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub substyle: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub negative_prompt: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub n: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub response_format: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn validate_prompt(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("validate_prompt");
        error.message = Some("prompt must not be empty.".into());
        return Err(error);
    }

    return Ok(());
}

impl GenerateImagesDto {
    /// Falsy values (null, false, 0, "") fall back to the defaults.
    pub fn to_input_spec(&self) -> InputSpec {
        InputSpec {
            prompt: self.prompt.to_string(),
            style: self.style.clone(),
            model: truthy(&self.model).unwrap_or_else(|| Value::from(DEFAULT_MODEL)),
            substyle: self.substyle.clone(),
            negative_prompt: self.negative_prompt.clone(),
            n: truthy(&self.n).unwrap_or_else(|| Value::from(DEFAULT_NUMBER)),
            response_format: truthy(&self.response_format)
                .unwrap_or_else(|| Value::from(DEFAULT_RESPONSE_FORMAT)),
            format: OUTPUT_FORMAT.to_string(),
        }
    }
}

fn truthy(value: &Option<Value>) -> Option<Value> {
    let value = value.as_ref()?;

    let falsy = match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    };

    if falsy {
        None
    } else {
        Some(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn dto(value: Value) -> GenerateImagesDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn applies_defaults() {
        let spec = dto(json!({ "prompt": "a red cube" })).to_input_spec();

        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "prompt": "a red cube",
                "model": "recraftv3",
                "n": 1,
                "response_format": "url",
                "format": "png"
            })
        );
    }

    #[test]
    fn copies_client_fields() {
        let spec = dto(json!({
            "prompt": "a fox",
            "style": "digital_illustration",
            "model": "recraft20b",
            "substyle": "pixel_art",
            "negative_prompt": "blurry",
            "n": 3,
            "response_format": "b64_json"
        }))
        .to_input_spec();

        assert_eq!(spec.style, Some(json!("digital_illustration")));
        assert_eq!(spec.model, json!("recraft20b"));
        assert_eq!(spec.substyle, Some(json!("pixel_art")));
        assert_eq!(spec.negative_prompt, Some(json!("blurry")));
        assert_eq!(spec.n, json!(3));
        assert_eq!(spec.response_format, json!("b64_json"));
    }

    #[test]
    fn forwards_values_upstream_would_reject() {
        let spec = dto(json!({
            "prompt": "a fox",
            "style": { "id": 7 },
            "substyle": null,
            "n": 300,
            "response_format": "b64"
        }))
        .to_input_spec();

        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "prompt": "a fox",
                "style": { "id": 7 },
                "model": "recraftv3",
                "substyle": null,
                "n": 300,
                "response_format": "b64",
                "format": "png"
            })
        );

        assert_eq!(dto(json!({ "prompt": "a fox", "n": "2" })).to_input_spec().n, json!("2"));
    }

    #[test]
    fn format_is_always_png() {
        let spec = dto(json!({ "prompt": "a fox", "format": "webp" })).to_input_spec();

        assert_eq!(spec.format, "png");
    }

    #[test]
    fn falsy_values_use_defaults() {
        let spec = dto(json!({
            "prompt": "a fox",
            "model": "",
            "n": 0,
            "response_format": null
        }))
        .to_input_spec();

        assert_eq!(spec.model, json!("recraftv3"));
        assert_eq!(spec.n, json!(1));
        assert_eq!(spec.response_format, json!("url"));

        assert_eq!(dto(json!({ "prompt": "a fox", "n": false })).to_input_spec().n, json!(1));
    }

    #[test]
    fn rejects_blank_prompt() {
        assert!(dto(json!({ "prompt": "  " })).validate().is_err());
        assert!(dto(json!({ "prompt": "a fox" })).validate().is_ok());
    }

    #[test]
    fn requires_prompt() {
        let result = serde_json::from_value::<GenerateImagesDto>(json!({ "n": 1 }));

        assert!(result.is_err());
    }
}
