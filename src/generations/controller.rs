use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::{app::models::api_error::ApiError, AppState};

use super::{dtos::generate_images_dto::GenerateImagesDto, errors::GenerationsApiError, service};

pub async fn generate_images(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Response, ApiError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    if method != Method::POST {
        tracing::debug!(%method, "method not allowed");
        return Err(GenerationsApiError::MethodNotAllowed.value());
    }

    let Some(recraft_api_key) = state.envy.recraft_api_key() else {
        tracing::error!("RECRAFT_API_KEY is not configured");
        return Err(GenerationsApiError::ApiKeyNotConfigured.value());
    };

    let dto = match serde_json::from_slice::<GenerateImagesDto>(&body) {
        Ok(dto) => dto,
        Err(e) => {
            return Err(GenerationsApiError::InvalidRequestBody
                .value()
                .with_details(e.to_string()))
        }
    };

    if let Err(e) = dto.validate() {
        return Err(GenerationsApiError::InvalidRequestBody
            .value()
            .with_details(e.to_string()));
    }

    match service::generate_images(&dto, recraft_api_key, &state).await {
        Ok((status, body)) => Ok((
            status,
            [(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())],
            body,
        )
            .into_response()),
        Err(e) => Err(e),
    }
}
