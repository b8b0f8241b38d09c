use std::future::Future;

use url::Url;

use crate::ExternApiError;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailRelayApiService: Send + Sync + 'static {
    /// Ask the email relay at `endpoint` to deliver `email`, authenticating
    /// with `api_key` as a bearer token.
    fn send(
        &self,
        endpoint: &Url,
        api_key: &str,
        email: RelayEmail,
    ) -> impl Future<Output = Result<(), ExternApiError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

#[cfg(feature = "mock")]
impl MockEmailRelayApiService {
    pub fn with_send(
        mut self,
        endpoint: Url,
        api_key: String,
        email: RelayEmail,
        result: Result<(), u16>,
    ) -> Self {
        self.expect_send()
            .once()
            .with(
                mockall::predicate::eq(endpoint),
                mockall::predicate::eq(api_key),
                mockall::predicate::eq(email),
            )
            .return_once(move |_, _, _| {
                Box::pin(std::future::ready(result.map_err(|status| {
                    ExternApiError::Status {
                        status,
                        reason: None,
                    }
                })))
            });
        self
    }
}
