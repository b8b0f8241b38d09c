use chrono::{DateTime, Utc};
use folio_models::{
    contact::ContactSubmission,
    webhook::{
        DiscordEmbed, DiscordEmbedField, DiscordEmbedFooter, DiscordMessage, SlackMessage,
        WebhookKind, WebhookPayload,
    },
};
use folio_utils::truncate_chars;

use crate::TIME_FORMAT;

const SUBMISSION_COLOR: u32 = 0x6366f1;
const TEST_COLOR: u32 = 0x00ff00;

/// Discord rejects embed field values longer than 1024 characters.
const DISCORD_MESSAGE_MAX_CHARS: usize = 1000;

pub fn submission(kind: WebhookKind, submission: &ContactSubmission) -> WebhookPayload {
    let author = &submission.author;
    match kind {
        WebhookKind::Discord => WebhookPayload::Discord(DiscordMessage {
            embeds: vec![DiscordEmbed {
                title: "🚀 New Portfolio Contact!".into(),
                description: None,
                color: SUBMISSION_COLOR,
                fields: vec![
                    field("👤 Name", author.name.as_str(), true),
                    field("📧 Email", author.email.as_str(), true),
                    field("📱 Phone", author.phone_or_placeholder(), true),
                    field("🏢 Company", author.company_or_placeholder(), true),
                    field("📋 Subject", submission.subject.as_str(), false),
                    field(
                        "💬 Message",
                        &truncate_chars(&submission.message, DISCORD_MESSAGE_MAX_CHARS, "..."),
                        false,
                    ),
                ],
                timestamp: Some(submission.timestamp),
                footer: DiscordEmbedFooter {
                    text: "Portfolio Contact Form".into(),
                },
            }],
        }),
        WebhookKind::Slack => WebhookPayload::Slack(SlackMessage {
            text: format!(
                "🚀 *New Portfolio Contact!*\n\n*Name:* {}\n*Email:* {}\n*Phone:* {}\n*Company:* \
                 {}\n*Subject:* {}\n*Message:*\n{}\n\n*Time:* {}",
                author.name,
                author.email,
                author.phone_or_placeholder(),
                author.company_or_placeholder(),
                submission.subject,
                submission.message,
                submission.timestamp.format(TIME_FORMAT),
            ),
        }),
    }
}

pub fn test(kind: WebhookKind, now: DateTime<Utc>) -> WebhookPayload {
    let time = now.format(TIME_FORMAT).to_string();
    match kind {
        WebhookKind::Discord => WebhookPayload::Discord(DiscordMessage {
            embeds: vec![DiscordEmbed {
                title: "🧪 Webhook Test".into(),
                description: Some("This is a test message from your portfolio contact form!".into()),
                color: TEST_COLOR,
                fields: vec![
                    field("Status", "✅ Working correctly", true),
                    field("Time", &time, true),
                ],
                timestamp: None,
                footer: DiscordEmbedFooter {
                    text: "Portfolio Contact Form Test".into(),
                },
            }],
        }),
        WebhookKind::Slack => WebhookPayload::Slack(SlackMessage {
            text: format!(
                "🧪 *Webhook Test*\n\n✅ Your webhook is working correctly!\n\n*Time:* {time}"
            ),
        }),
    }
}

fn field(name: &str, value: &str, inline: bool) -> DiscordEmbedField {
    DiscordEmbedField {
        name: name.into(),
        value: value.into(),
        inline,
    }
}
