use reqwest::StatusCode;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    apis::recraft::service::recraft_generate_images, conversion::convert_images,
    dtos::generate_images_dto::GenerateImagesDto,
};

/// Returns the upstream status and the JSON body to send back. Without
/// conversion the upstream body text is returned byte for byte.
pub async fn generate_images(
    dto: &GenerateImagesDto,
    recraft_api_key: &str,
    state: &AppState,
) -> Result<(StatusCode, String), ApiError> {
    let envy = &state.envy;
    let input_spec = dto.to_input_spec();

    let mut outcome = recraft_generate_images(
        &input_spec,
        envy.recraft_api_url(),
        recraft_api_key,
        &state.client,
    )
    .await?;

    if !envy.convert_images() {
        return Ok((outcome.status, outcome.body));
    }

    if let Some(images) = outcome.response.images_mut() {
        convert_images(images, &state.client, envy.recraft_image_host()).await;
    }

    match serde_json::to_string(&outcome.response) {
        Ok(body) => Ok((outcome.status, body)),
        Err(e) => {
            tracing::error!(%e, "failed to serialize converted response");
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
                details: Some(format!("{:?}", e)),
            })
        }
    }
}
