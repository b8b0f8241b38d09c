use chrono::{DateTime, Utc};
use folio_core_contact_contracts::NotificationOutcome;
use folio_models::contact::{ContactSubmission, ContactSubmissionId};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmissionRecord<'a> {
    pub id: &'a ContactSubmissionId,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub company: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub timestamp: DateTime<Utc>,
    pub user_agent: &'a str,
    pub ip: &'a str,
    pub notification_sent: bool,
    pub email_sent: bool,
    pub status: &'static str,
}

impl<'a> ContactSubmissionRecord<'a> {
    pub fn new(
        submission: &'a ContactSubmission,
        webhook: &NotificationOutcome,
        email: &NotificationOutcome,
    ) -> Self {
        Self {
            id: &submission.id,
            name: &submission.author.name,
            email: &submission.author.email,
            phone: submission.author.phone_or_placeholder(),
            company: submission.author.company_or_placeholder(),
            subject: &submission.subject,
            message: &submission.message,
            timestamp: submission.timestamp,
            user_agent: submission.requester.user_agent_or_unknown(),
            ip: submission.requester.ip_or_unknown(),
            notification_sent: webhook.is_sent(),
            email_sent: email.is_sent(),
            status: "new",
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use folio_models::{
        contact::{
            ContactAuthor, ContactAuthorName, ContactMessage, ContactRequester, ContactSubject,
        },
        email_address::EmailAddress,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn placeholders_for_missing_values() {
        // Arrange
        let timestamp = Utc.timestamp_millis_opt(1_718_000_000_000).unwrap();
        let submission = ContactSubmission {
            id: ContactSubmissionId::from_timestamp(timestamp),
            author: ContactAuthor {
                name: ContactAuthorName::try_new("A").unwrap(),
                email: EmailAddress::try_new("a@b.com").unwrap(),
                phone: None,
                company: None,
            },
            subject: ContactSubject::try_new("S").unwrap(),
            message: ContactMessage::try_new("M").unwrap(),
            timestamp,
            requester: ContactRequester::default(),
        };

        // Act
        let record = ContactSubmissionRecord::new(
            &submission,
            &NotificationOutcome::Skipped,
            &NotificationOutcome::Failed {
                reason: "error".into(),
            },
        );

        // Assert
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "id": "contact_1718000000000",
                "name": "A",
                "email": "a@b.com",
                "phone": "Not provided",
                "company": "Not provided",
                "subject": "S",
                "message": "M",
                "timestamp": "2024-06-10T06:13:20Z",
                "userAgent": "Unknown",
                "ip": "Unknown",
                "notificationSent": false,
                "emailSent": false,
                "status": "new",
            })
        );
    }
}
