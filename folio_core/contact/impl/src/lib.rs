use std::sync::Arc;

use folio_core_contact_contracts::{
    ContactFeatureService, ContactSubmissionReceipt, ContactSubmitError,
    ContactTestWebhookError, NotificationOutcome,
};
use folio_di::Build;
use folio_extern_contracts::{
    email_relay::{EmailRelayApiService, RelayEmail},
    webhook::WebhookApiService,
    ExternApiError,
};
use folio_models::{
    contact::{
        ContactAuthor, ContactAuthorName, ContactCompany, ContactFormInput, ContactMessage,
        ContactPhone, ContactRequester, ContactSubject, ContactSubmission, ContactSubmissionId,
    },
    email_address::EmailAddress,
    webhook::WebhookKind,
};
use folio_shared_contracts::time::TimeService;
use folio_templates_contracts::{ContactNotificationTemplate, TemplateService};
use folio_utils::trace_instrument;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::record::ContactSubmissionRecord;

mod payload;
mod record;
#[cfg(test)]
mod tests;

/// Human readable timestamp format used in notifications.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Time, Template, WebhookApi, EmailRelayApi> {
    time: Time,
    template: Template,
    webhook_api: WebhookApi,
    email_relay_api: EmailRelayApi,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Address that receives notification emails.
    pub recipient: Arc<EmailAddress>,
    /// Sender address of notification emails.
    pub sender: Arc<EmailAddress>,
    pub webhook_url: Option<Arc<Url>>,
    /// Used only if `webhook_url` is not set.
    pub alt_webhook_url: Option<Arc<Url>>,
    pub email_relay_url: Option<Arc<Url>>,
    pub email_relay_key: Option<Arc<str>>,
}

impl ContactFeatureConfig {
    fn webhook_url(&self) -> Option<&Url> {
        self.webhook_url
            .as_deref()
            .or(self.alt_webhook_url.as_deref())
    }

    fn email_relay(&self) -> Option<(&Url, &str)> {
        Some((
            self.email_relay_url.as_deref()?,
            self.email_relay_key.as_deref()?,
        ))
    }
}

impl<Time, Template, WebhookApi, EmailRelayApi> ContactFeatureService
    for ContactFeatureServiceImpl<Time, Template, WebhookApi, EmailRelayApi>
where
    Time: TimeService,
    Template: TemplateService,
    WebhookApi: WebhookApiService,
    EmailRelayApi: EmailRelayApiService,
{
    #[trace_instrument(skip_all)]
    async fn submit(
        &self,
        input: ContactFormInput,
        requester: ContactRequester,
    ) -> Result<ContactSubmissionReceipt, ContactSubmitError> {
        let submission = self.parse_submission(input, requester)?;

        let webhook = self.notify_webhook(&submission).await;
        let email = self.notify_email_relay(&submission).await;

        log_submission(&submission, &webhook, &email);

        Ok(ContactSubmissionReceipt {
            id: submission.id,
            timestamp: submission.timestamp,
            webhook,
            email,
        })
    }

    #[trace_instrument(skip(self))]
    async fn test_webhook(&self) -> Result<WebhookKind, ContactTestWebhookError> {
        let url = self
            .config
            .webhook_url()
            .ok_or(ContactTestWebhookError::NotConfigured)?;

        let kind = WebhookKind::detect(url);
        let payload = payload::test(kind, self.time.now());

        self.webhook_api
            .post(url, &payload)
            .await
            .map_err(|err| match err {
                ExternApiError::Status { status, reason } => {
                    ContactTestWebhookError::Rejected { status, reason }
                }
                ExternApiError::Other(err) => ContactTestWebhookError::Other(err),
            })?;

        Ok(kind)
    }
}

impl<Time, Template, WebhookApi, EmailRelayApi>
    ContactFeatureServiceImpl<Time, Template, WebhookApi, EmailRelayApi>
where
    Time: TimeService,
    Template: TemplateService,
    WebhookApi: WebhookApiService,
    EmailRelayApi: EmailRelayApiService,
{
    fn parse_submission(
        &self,
        input: ContactFormInput,
        requester: ContactRequester,
    ) -> Result<ContactSubmission, ContactSubmitError> {
        let ContactFormInput {
            name,
            email,
            phone,
            company,
            subject,
            message,
        } = input;

        let (Some(name), Some(email), Some(subject), Some(message)) = (
            name.and_then(|x| ContactAuthorName::try_new(x).ok()),
            email.filter(|x| !x.trim().is_empty()),
            subject.and_then(|x| ContactSubject::try_new(x).ok()),
            message.and_then(|x| ContactMessage::try_new(x).ok()),
        ) else {
            return Err(ContactSubmitError::MissingFields);
        };

        let email = EmailAddress::try_new(email).map_err(|_| ContactSubmitError::InvalidEmail)?;

        let timestamp = self.time.now();

        Ok(ContactSubmission {
            id: ContactSubmissionId::from_timestamp(timestamp),
            author: ContactAuthor {
                name,
                email,
                phone: phone.and_then(|x| ContactPhone::try_new(x).ok()),
                company: company.and_then(|x| ContactCompany::try_new(x).ok()),
            },
            subject,
            message,
            timestamp,
            requester,
        })
    }

    async fn notify_webhook(&self, submission: &ContactSubmission) -> NotificationOutcome {
        let Some(url) = self.config.webhook_url() else {
            debug!("no webhook configured, skipping notification");
            return NotificationOutcome::Skipped;
        };

        let kind = WebhookKind::detect(url);
        let payload = payload::submission(kind, submission);

        match self.webhook_api.post(url, &payload).await {
            Ok(()) => {
                info!(%kind, id = %submission.id, "webhook notification sent");
                NotificationOutcome::Sent
            }
            Err(err) => {
                warn!(%kind, id = %submission.id, "webhook notification failed: {err:#}");
                NotificationOutcome::Failed {
                    reason: format!("{err:#}"),
                }
            }
        }
    }

    async fn notify_email_relay(&self, submission: &ContactSubmission) -> NotificationOutcome {
        let Some((endpoint, api_key)) = self.config.email_relay() else {
            debug!("no email relay configured, skipping notification");
            return NotificationOutcome::Skipped;
        };

        let html = match self.template.render(&ContactNotificationTemplate {
            name: submission.author.name.to_string(),
            email: submission.author.email.to_string(),
            phone: submission.author.phone_or_placeholder().into(),
            company: submission.author.company_or_placeholder().into(),
            subject: submission.subject.to_string(),
            message: submission.message.to_string(),
            received: submission.timestamp.format(TIME_FORMAT).to_string(),
        }) {
            Ok(html) => html,
            Err(err) => {
                error!(id = %submission.id, "Failed to render contact notification email: {err:#}");
                return NotificationOutcome::Failed {
                    reason: format!("{err:#}"),
                };
            }
        };

        let email = RelayEmail {
            to: self.config.recipient.to_string(),
            from: self.config.sender.to_string(),
            subject: format!("🚀 Portfolio Contact: {}", *submission.subject),
            html,
            reply_to: submission.author.email.to_string(),
        };

        match self.email_relay_api.send(endpoint, api_key, email).await {
            Ok(()) => {
                info!(id = %submission.id, "notification email sent");
                NotificationOutcome::Sent
            }
            Err(err) => {
                warn!(id = %submission.id, "email relay notification failed: {err:#}");
                NotificationOutcome::Failed {
                    reason: format!("{err:#}"),
                }
            }
        }
    }
}

/// Emits the structured submission record. The log is the only place
/// submissions are kept.
fn log_submission(
    submission: &ContactSubmission,
    webhook: &NotificationOutcome,
    email: &NotificationOutcome,
) {
    let record = ContactSubmissionRecord::new(submission, webhook, email);
    match serde_json::to_string(&record) {
        Ok(record) => info!(
            id = %submission.id,
            notification_sent = webhook.is_sent(),
            email_sent = email.is_sent(),
            %record,
            "new contact submission"
        ),
        Err(err) => error!(id = %submission.id, "Failed to serialize contact submission: {err}"),
    }
}
