use chrono::SecondsFormat;
use folio_core_contact_contracts::ContactSubmissionReceipt;
use folio_models::{contact::ContactFormInput, webhook::WebhookKind};
use serde::{Deserialize, Serialize};

/// Contact form as sent by the website. Every field may be missing, the
/// contact feature decides what is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub company: Option<String>,
}

impl From<ApiContactForm> for ContactFormInput {
    fn from(value: ApiContactForm) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            company: value.company,
            subject: value.subject,
            message: value.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiContactSubmitted {
    pub success: bool,
    pub message: &'static str,
    pub data: ApiContactSubmission,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmission {
    pub id: String,
    /// RFC 3339 with millisecond precision, e.g. `2024-06-10T06:13:20.000Z`
    pub timestamp: String,
    pub notification_sent: bool,
    pub email_sent: bool,
}

impl From<ContactSubmissionReceipt> for ApiContactSubmitted {
    fn from(value: ContactSubmissionReceipt) -> Self {
        Self {
            success: true,
            message: "Thank you for your message! I'll get back to you within 24 hours.",
            data: ApiContactSubmission {
                id: value.id.as_str().into(),
                timestamp: value.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
                notification_sent: value.webhook.is_sent(),
                email_sent: value.email.is_sent(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiWebhookTested {
    pub success: bool,
    pub message: &'static str,
    pub webhook_type: WebhookKind,
}

#[derive(Debug, Serialize)]
pub struct ApiWebhookNotConfigured {
    pub success: bool,
    pub error: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiWebhookRejected {
    pub success: bool,
    pub error: &'static str,
    pub status: u16,
    pub status_text: &'static str,
}
