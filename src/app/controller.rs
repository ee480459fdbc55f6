use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

use super::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "online",
        "convert_images": state.envy.convert_images(),
    }))
}

pub async fn fallback() -> ApiError {
    DefaultApiError::NotFound.value()
}
