use anyhow::Context;
use folio_di::Build;
use folio_extern_contracts::{
    email_relay::{EmailRelayApiService, RelayEmail},
    ExternApiError,
};
use folio_utils::trace_instrument;
use serde::Serialize;
use url::Url;

use crate::{check_status, http::HttpClient};

#[derive(Debug, Clone, Default, Build)]
pub struct EmailRelayApiServiceImpl {
    #[state]
    client: HttpClient,
}

impl EmailRelayApiService for EmailRelayApiServiceImpl {
    #[trace_instrument(skip(self, api_key, email))]
    async fn send(
        &self,
        endpoint: &Url,
        api_key: &str,
        email: RelayEmail,
    ) -> Result<(), ExternApiError> {
        let response = self
            .client
            .post(endpoint.clone())
            .bearer_auth(api_key)
            .json(&SendRequest::from(&email))
            .send()
            .await
            .context("Failed to send email relay request")?;

        check_status(response).map(|_| ())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendRequest<'a> {
    to: &'a str,
    from: &'a str,
    subject: &'a str,
    html: &'a str,
    reply_to: &'a str,
}

impl<'a> From<&'a RelayEmail> for SendRequest<'a> {
    fn from(value: &'a RelayEmail) -> Self {
        Self {
            to: &value.to,
            from: &value.from,
            subject: &value.subject,
            html: &value.html,
            reply_to: &value.reply_to,
        }
    }
}
