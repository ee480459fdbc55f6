use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GenerationsApiError {
    MethodNotAllowed,
    ApiKeyNotConfigured,
    InvalidRequestBody,
}

impl GenerationsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MethodNotAllowed => ApiError {
                code: StatusCode::METHOD_NOT_ALLOWED,
                message: "Method not allowed".to_string(),
                details: None,
            },
            Self::ApiKeyNotConfigured => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "API key not configured: missing RECRAFT_API_KEY configuration"
                    .to_string(),
                details: None,
            },
            Self::InvalidRequestBody => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid request body.".to_string(),
                details: None,
            },
        }
    }
}
