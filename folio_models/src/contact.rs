use chrono::{DateTime, Utc};
use nutype::nutype;
use serde::Serialize;

use crate::{email_address::EmailAddress, NOT_PROVIDED, UNKNOWN};

/// Raw contact form fields as submitted by a client. Nothing has been
/// validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Metadata about the client that sent a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequester {
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

impl ContactRequester {
    pub fn user_agent_or_unknown(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn ip_or_unknown(&self) -> &str {
        self.ip.as_deref().unwrap_or(UNKNOWN)
    }
}

/// A validated and normalized contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: ContactSubmissionId,
    pub author: ContactAuthor,
    pub subject: ContactSubject,
    pub message: ContactMessage,
    pub timestamp: DateTime<Utc>,
    pub requester: ContactRequester,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAuthor {
    pub name: ContactAuthorName,
    pub email: EmailAddress,
    pub phone: Option<ContactPhone>,
    pub company: Option<ContactCompany>,
}

impl ContactAuthor {
    pub fn phone_or_placeholder(&self) -> &str {
        self.phone.as_ref().map_or(NOT_PROVIDED, |x| x.as_str())
    }

    pub fn company_or_placeholder(&self) -> &str {
        self.company.as_ref().map_or(NOT_PROVIDED, |x| x.as_str())
    }
}

/// Time based identifier of a submission, e.g. `contact_1718000000000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ContactSubmissionId(String);

impl ContactSubmissionId {
    pub fn from_timestamp(timestamp: DateTime<Utc>) -> Self {
        Self(format!("contact_{}", timestamp.timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactSubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, AsRef, Deref, Display, Serialize)
)]
pub struct ContactAuthorName(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, AsRef, Deref, Display, Serialize)
)]
pub struct ContactPhone(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, AsRef, Deref, Display, Serialize)
)]
pub struct ContactCompany(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, AsRef, Deref, Display, Serialize)
)]
pub struct ContactSubject(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, AsRef, Deref, Display, Serialize)
)]
pub struct ContactMessage(String);
