use anyhow::Context;
use folio_di::Build;
use folio_extern_contracts::{webhook::WebhookApiService, ExternApiError};
use folio_models::webhook::WebhookPayload;
use folio_utils::trace_instrument;
use url::Url;

use crate::{check_status, http::HttpClient};

#[derive(Debug, Clone, Default, Build)]
pub struct WebhookApiServiceImpl {
    #[state]
    client: HttpClient,
}

impl WebhookApiService for WebhookApiServiceImpl {
    #[trace_instrument(skip(self, payload), fields(kind = %payload.kind()))]
    async fn post(&self, url: &Url, payload: &WebhookPayload) -> Result<(), ExternApiError> {
        let response = self
            .client
            .post(url.clone())
            .json(payload)
            .send()
            .await
            .context("Failed to send webhook request")?;

        check_status(response).map(|_| ())
    }
}
