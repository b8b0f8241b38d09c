use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub mod contact;

pub const CONTACT_ROUTE: &str = "/api/contact";
pub const TEST_WEBHOOK_ROUTE: &str = "/api/test-webhook";

pub const SEND_FAILED: &str = "Failed to send message. Please try again later.";
pub const TEST_WEBHOOK_FAILED: &str = "Failed to send test webhook";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Error message reported for unexpected failures while handling `path`.
pub fn failure_message(path: &str) -> &'static str {
    match path {
        CONTACT_ROUTE => SEND_FAILED,
        TEST_WEBHOOK_ROUTE => TEST_WEBHOOK_FAILED,
        _ => INTERNAL_SERVER_ERROR,
    }
}

/// Controls whether internal error messages are included in responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorReporting {
    pub expose_details: bool,
}

pub fn internal_server_error(
    reporting: ErrorReporting,
    error: &'static str,
    err: impl Into<anyhow::Error>,
) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    let details = reporting.expose_details.then(|| format!("{err:#}"));
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            details,
            ..ApiError::new(error)
        }),
    )
        .into_response()
}

fn error(code: StatusCode, error: &'static str) -> Response {
    (code, Json(ApiError::new(error))).into_response()
}
