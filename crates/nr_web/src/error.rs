use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nr_core::Error;

use crate::api::ApiResponse;

/// Maps controller errors onto the `{success: false, message}` envelope.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = if self.0.is_client_error() {
            (StatusCode::BAD_REQUEST, self.0.to_string())
        } else {
            tracing::error!("Request failed: {}", self.0);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred: {}", self.0),
            )
        };
        (status, Json(ApiResponse::failure(message))).into_response()
    }
}
