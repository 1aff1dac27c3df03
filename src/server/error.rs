//! Every request failure leaves the server as the same opaque body.
//!
//! The full error is logged; the caller only ever sees
//! `{"error": "Failed to process request"}` with status 500.

use crate::chat::ErrorResponse;
use crate::core::error::ChatError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

const GENERIC_FAILURE: &str = "Failed to process request";

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        error!(error = %self, "chat request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: GENERIC_FAILURE.to_string(),
            }),
        )
            .into_response()
    }
}
