use std::future::Future;

use chrono::{DateTime, Utc};
use folio_models::{
    contact::{ContactFormInput, ContactRequester, ContactSubmissionId},
    webhook::WebhookKind,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a contact form submission and notify the configured webhook
    /// and email relay.
    ///
    /// Notification failures never fail the submission, they are only
    /// reflected in the returned receipt.
    fn submit(
        &self,
        input: ContactFormInput,
        requester: ContactRequester,
    ) -> impl Future<Output = Result<ContactSubmissionReceipt, ContactSubmitError>> + Send;

    /// Send a canned test message to the configured webhook.
    fn test_webhook(
        &self,
    ) -> impl Future<Output = Result<WebhookKind, ContactTestWebhookError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmissionReceipt {
    pub id: ContactSubmissionId,
    pub timestamp: DateTime<Utc>,
    pub webhook: NotificationOutcome,
    pub email: NotificationOutcome,
}

/// Result of a single best-effort notification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    Sent,
    /// The channel is not configured.
    Skipped,
    Failed {
        reason: String,
    },
}

impl NotificationOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ContactTestWebhookError {
    #[error("No webhook URL configured")]
    NotConfigured,
    #[error("Webhook responded with status {status}")]
    Rejected {
        status: u16,
        reason: Option<&'static str>,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        input: ContactFormInput,
        requester: ContactRequester,
        result: Result<ContactSubmissionReceipt, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(
                mockall::predicate::eq(input),
                mockall::predicate::eq(requester),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_test_webhook(
        mut self,
        result: Result<WebhookKind, ContactTestWebhookError>,
    ) -> Self {
        self.expect_test_webhook()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }
}
