use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

/// The receiving format of a chat webhook, detected from its URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WebhookKind {
    /// Rich embed payload with structured fields.
    Discord,
    /// Single flattened text payload. Used for every non-Discord URL.
    Slack,
}

impl WebhookKind {
    const DISCORD_HOST: &'static str = "discord.com";

    pub fn detect(url: &Url) -> Self {
        if url.as_str().contains(Self::DISCORD_HOST) {
            Self::Discord
        } else {
            Self::Slack
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Discord => "Discord",
            Self::Slack => "Slack",
        }
    }
}

impl std::fmt::Display for WebhookKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WebhookPayload {
    Discord(DiscordMessage),
    Slack(SlackMessage),
}

impl WebhookPayload {
    pub fn kind(&self) -> WebhookKind {
        match self {
            Self::Discord(_) => WebhookKind::Discord,
            Self::Slack(_) => WebhookKind::Slack,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscordMessage {
    pub embeds: Vec<DiscordEmbed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscordEmbed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<DiscordEmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub footer: DiscordEmbedFooter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscordEmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscordEmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackMessage {
    pub text: String,
}
