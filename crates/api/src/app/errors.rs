//! Consistent error responses.
//!
//! Every failure crosses the HTTP boundary exactly once, here, as a uniform
//! `{ timestamp, message }` body paired with a status code.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_infra::ProductError;

/// Uniform error payload.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

pub fn product_error_to_response(err: ProductError) -> axum::response::Response {
    match err {
        ProductError::NotFound(_) => json_error(StatusCode::NOT_FOUND, err.to_string()),
        ProductError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        ProductError::Store(e) => {
            // Driver detail stays in the logs; clients get a generic message.
            tracing::error!("storage failure: {e}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred.",
            )
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(ErrorBody {
            timestamp: Utc::now(),
            message: message.into(),
        }),
    )
        .into_response()
}
