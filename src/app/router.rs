use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{app, generations, AppState};

use super::{errors::DefaultApiError, util::cors::with_cors_headers};

pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(app::controller::get_root))
        .route("/api/recraft", any(generations::controller::generate_images))
        .fallback(app::controller::fallback)
        .with_state(state)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic));

    with_cors_headers(router)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(%details, "handler panicked");

    DefaultApiError::InternalServerError
        .value()
        .with_details(details)
        .into_response()
}
