use reqwest::{header, Client, Response, StatusCode};

use crate::app::models::api_error::ApiError;

use super::{
    models::input_spec::InputSpec,
    structs::recraft_generate_images_response::RecraftGenerateImagesOutcome,
};

/// Sends a single generation request. Non-2xx responses become an
/// `ApiError` mirroring the upstream status, with the raw body as details.
pub async fn recraft_generate_images(
    input_spec: &InputSpec,
    api_url: &str,
    recraft_api_key: &str,
    client: &Client,
) -> Result<RecraftGenerateImagesOutcome, ApiError> {
    let result = client
        .post(api_url)
        .header(header::AUTHORIZATION, ["Bearer ", recraft_api_key].concat())
        .json(input_spec)
        .send()
        .await;

    match result {
        Ok(res) => parse_response_to_recraft_generate_images_response(res).await,
        Err(e) => {
            tracing::error!(%e, "recraft request failed");
            Err(unexpected_error(&e))
        }
    }
}

async fn parse_response_to_recraft_generate_images_response(
    res: Response,
) -> Result<RecraftGenerateImagesOutcome, ApiError> {
    let status = res.status();

    let text = match res.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(%e, %status, "failed to read recraft response");
            return Err(unexpected_error(&e));
        }
    };

    if !status.is_success() {
        tracing::error!(%status, body = %text, "recraft api error");
        return Err(ApiError {
            code: status,
            message: format!(
                "Recraft API error: {}",
                status.canonical_reason().unwrap_or("Unknown Status")
            ),
            details: Some(text),
        });
    }

    match serde_json::from_str(&text) {
        Ok(response) => Ok(RecraftGenerateImagesOutcome {
            status,
            body: text,
            response,
        }),
        Err(e) => {
            tracing::error!(%e, body = %text, "failed to parse recraft response");
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to parse Recraft API response.".to_string(),
                details: Some(e.to_string()),
            })
        }
    }
}

fn unexpected_error(e: &reqwest::Error) -> ApiError {
    ApiError {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        message: e.to_string(),
        details: Some(format!("{:?}", e)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn input_spec() -> InputSpec {
        InputSpec {
            prompt: "a red cube".to_string(),
            style: None,
            model: json!("recraftv3"),
            substyle: None,
            negative_prompt: None,
            n: json!(1),
            response_format: json!("url"),
            format: "png".to_string(),
        }
    }

    #[tokio::test]
    async fn sends_authenticated_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_json(json!({
                "prompt": "a red cube",
                "model": "recraftv3",
                "n": 1,
                "response_format": "url",
                "format": "png"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "created": 1,
                "data": [{ "url": "https://img.recraft.ai/abc.webp" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/v1/images/generations", server.uri());
        let mut outcome =
            recraft_generate_images(&input_spec(), &url, "test-key", &Client::new())
                .await
                .unwrap();

        assert_eq!(outcome.status, StatusCode::OK);
        assert_eq!(outcome.response.images_mut().unwrap().len(), 1);
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&outcome.body).unwrap(),
            json!({
                "created": 1,
                "data": [{ "url": "https://img.recraft.ai/abc.webp" }]
            })
        );
    }

    #[tokio::test]
    async fn mirrors_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down <not json>"))
            .expect(1)
            .mount(&server)
            .await;

        let e = recraft_generate_images(&input_spec(), &server.uri(), "test-key", &Client::new())
            .await
            .unwrap_err();

        assert_eq!(e.code, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(e.message, "Recraft API error: Too Many Requests");
        assert_eq!(e.details.as_deref(), Some("slow down <not json>"));
    }

    #[tokio::test]
    async fn invalid_success_body_is_internal_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[1, 2, 3]"))
            .mount(&server)
            .await;

        let e = recraft_generate_images(&input_spec(), &server.uri(), "test-key", &Client::new())
            .await
            .unwrap_err();

        assert_eq!(e.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(e.details.is_some());
    }

    #[tokio::test]
    async fn unreachable_upstream_is_internal_error() {
        let e = recraft_generate_images(
            &input_spec(),
            "http://127.0.0.1:9/v1/images/generations",
            "test-key",
            &Client::new(),
        )
        .await
        .unwrap_err();

        assert_eq!(e.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(e.details.is_some());
    }
}
