use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Extension, Json, Router,
};
use folio_core_contact_contracts::{
    ContactFeatureService, ContactSubmitError, ContactTestWebhookError,
};
use folio_models::contact::ContactRequester;
use tracing::debug;

use super::{
    error, internal_server_error, ErrorReporting, CONTACT_ROUTE, SEND_FAILED,
    TEST_WEBHOOK_FAILED, TEST_WEBHOOK_ROUTE,
};
use crate::{
    extractors::user_agent::UserAgent,
    middlewares::client_ip::ClientIp,
    models::contact::{
        ApiContactForm, ApiContactSubmitted, ApiWebhookNotConfigured, ApiWebhookRejected,
        ApiWebhookTested,
    },
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(CONTACT_ROUTE, routing::post(submit))
        .route(TEST_WEBHOOK_ROUTE, routing::post(test_webhook))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    Extension(reporting): Extension<ErrorReporting>,
    user_agent: UserAgent,
    client_ip: Option<Extension<ClientIp>>,
    body: Bytes,
) -> Response {
    // The body is decoded regardless of the content type header.
    let form = match serde_json::from_slice::<ApiContactForm>(&body) {
        Ok(form) => form,
        Err(err) => {
            debug!("rejected contact form: {err}");
            return error(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    let requester = ContactRequester {
        user_agent: user_agent.0,
        ip: client_ip.map(|Extension(ClientIp(ip))| ip.to_string()),
    };

    match service.submit(form.into(), requester).await {
        Ok(receipt) => Json(ApiContactSubmitted::from(receipt)).into_response(),
        Err(ContactSubmitError::MissingFields) => {
            error(StatusCode::BAD_REQUEST, "Missing required fields")
        }
        Err(ContactSubmitError::InvalidEmail) => {
            error(StatusCode::BAD_REQUEST, "Invalid email format")
        }
        Err(ContactSubmitError::Other(err)) => internal_server_error(reporting, SEND_FAILED, err),
    }
}

async fn test_webhook(
    service: State<Arc<impl ContactFeatureService>>,
    Extension(reporting): Extension<ErrorReporting>,
) -> Response {
    match service.test_webhook().await {
        Ok(webhook_type) => Json(ApiWebhookTested {
            success: true,
            message: "Test webhook sent successfully!",
            webhook_type,
        })
        .into_response(),
        Err(ContactTestWebhookError::NotConfigured) => (
            StatusCode::BAD_REQUEST,
            Json(ApiWebhookNotConfigured {
                success: false,
                error: "No webhook URL configured",
                message: "Set webhook.url in the config file or DISCORD_WEBHOOK_URL / \
                          WEBHOOK_URL in the environment",
            }),
        )
            .into_response(),
        Err(ContactTestWebhookError::Rejected { status, reason }) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiWebhookRejected {
                success: false,
                error: "Webhook failed",
                status,
                status_text: reason.unwrap_or_default(),
            }),
        )
            .into_response(),
        Err(ContactTestWebhookError::Other(err)) => {
            internal_server_error(reporting, TEST_WEBHOOK_FAILED, err)
        }
    }
}
