//! Response construction for validation failures.
//!
//! # Responsibilities
//! - Build the structured 422 response returned when endpoint validation
//!   rejects a request
//!
//! # Design Decisions
//! - Body shape is `{ "success": false, "error": { "message": ... } }`;
//!   `message` is omitted entirely when the validator gave none
//! - 422 Unprocessable Entity: the request was well-formed HTTP but failed
//!   the endpoint's semantic checks

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ValidationFailureBody {
    pub success: bool,
    pub error: ValidationFailureDetail,
}

#[derive(Debug, Serialize)]
pub struct ValidationFailureDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Build the client-error response for a failed validation.
pub fn validation_failure(message: Option<String>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationFailureBody {
            success: false,
            error: ValidationFailureDetail { message },
        }),
    )
        .into_response()
}
