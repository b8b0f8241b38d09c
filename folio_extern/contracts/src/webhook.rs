use std::future::Future;

use folio_models::webhook::WebhookPayload;
use url::Url;

use crate::ExternApiError;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait WebhookApiService: Send + Sync + 'static {
    /// Post the given payload as JSON to the webhook at `url`.
    ///
    /// Any non-success status is reported as [`ExternApiError::Status`].
    fn post(
        &self,
        url: &Url,
        payload: &WebhookPayload,
    ) -> impl Future<Output = Result<(), ExternApiError>> + Send;
}

#[cfg(feature = "mock")]
impl MockWebhookApiService {
    pub fn with_post(mut self, url: Url, payload: WebhookPayload, result: Result<(), u16>) -> Self {
        self.expect_post()
            .once()
            .with(
                mockall::predicate::eq(url),
                mockall::predicate::eq(payload),
            )
            .return_once(move |_, _| {
                Box::pin(std::future::ready(result.map_err(|status| {
                    ExternApiError::Status {
                        status,
                        reason: None,
                    }
                })))
            });
        self
    }

    pub fn with_post_transport_error(mut self, url: Url) -> Self {
        self.expect_post()
            .once()
            .withf(move |u, _| *u == url)
            .return_once(|_, _| {
                Box::pin(std::future::ready(Err(ExternApiError::Other(
                    anyhow::anyhow!("connection refused"),
                ))))
            });
        self
    }
}
