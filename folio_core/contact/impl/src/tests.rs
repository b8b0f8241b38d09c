use chrono::{DateTime, TimeZone, Utc};
use folio_extern_contracts::{email_relay::MockEmailRelayApiService, webhook::MockWebhookApiService};
use folio_models::webhook::{
    DiscordEmbed, DiscordEmbedField, DiscordEmbedFooter, DiscordMessage, SlackMessage,
    WebhookPayload,
};
use folio_shared_contracts::time::MockTimeService;
use folio_templates_contracts::MockTemplateService;
use folio_utils::assert_matches;
use pretty_assertions::assert_eq;

use super::*;

type Sut = ContactFeatureServiceImpl<
    MockTimeService,
    MockTemplateService,
    MockWebhookApiService,
    MockEmailRelayApiService,
>;

#[tokio::test]
async fn ok_without_notifications() {
    // Arrange
    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new(),
        webhook_api: MockWebhookApiService::new(),
        email_relay_api: MockEmailRelayApiService::new(),
        config: config(),
    };

    // Act
    let result = sut.submit(input(), requester()).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactSubmissionReceipt {
            id: ContactSubmissionId::from_timestamp(now()),
            timestamp: now(),
            webhook: NotificationOutcome::Skipped,
            email: NotificationOutcome::Skipped,
        }
    );
}

#[tokio::test]
async fn slack_webhook_with_normalized_values() {
    // Arrange
    let url = "https://hooks.slack.com/services/T/B/X".parse::<Url>().unwrap();
    let expected_payload = WebhookPayload::Slack(SlackMessage {
        text: "🚀 *New Portfolio Contact!*\n\n*Name:* Jane\n*Email:* jane@x.com\n*Phone:* Not \
               provided\n*Company:* ACME\n*Subject:* Hello\n*Message:*\nHi\nthere\n\n*Time:* \
               2024-06-10 06:13:20 UTC"
            .into(),
    });

    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new(),
        webhook_api: MockWebhookApiService::new().with_post(
            url.clone(),
            expected_payload,
            Ok(()),
        ),
        email_relay_api: MockEmailRelayApiService::new(),
        config: ContactFeatureConfig {
            webhook_url: Some(url.into()),
            ..config()
        },
    };

    let input = ContactFormInput {
        name: Some("  Jane  ".into()),
        email: Some("JANE@X.COM ".into()),
        phone: Some("   ".into()),
        company: Some(" ACME ".into()),
        subject: Some(" Hello ".into()),
        message: Some("Hi\nthere  ".into()),
    };

    // Act
    let result = sut.submit(input, requester()).await;

    // Assert
    let receipt = result.unwrap();
    assert_eq!(receipt.webhook, NotificationOutcome::Sent);
    assert_eq!(receipt.email, NotificationOutcome::Skipped);
}

#[tokio::test]
async fn discord_webhook() {
    // Arrange
    let url = "https://discord.com/api/webhooks/1/token"
        .parse::<Url>()
        .unwrap();
    let expected_payload = WebhookPayload::Discord(DiscordMessage {
        embeds: vec![DiscordEmbed {
            title: "🚀 New Portfolio Contact!".into(),
            description: None,
            color: 0x6366f1,
            fields: vec![
                field("👤 Name", "A", true),
                field("📧 Email", "a@b.com", true),
                field("📱 Phone", "Not provided", true),
                field("🏢 Company", "Not provided", true),
                field("📋 Subject", "S", false),
                field("💬 Message", "M", false),
            ],
            timestamp: Some(now()),
            footer: DiscordEmbedFooter {
                text: "Portfolio Contact Form".into(),
            },
        }],
    });

    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new(),
        webhook_api: MockWebhookApiService::new().with_post(
            url.clone(),
            expected_payload,
            Ok(()),
        ),
        email_relay_api: MockEmailRelayApiService::new(),
        config: ContactFeatureConfig {
            webhook_url: Some(url.into()),
            ..config()
        },
    };

    // Act
    let result = sut.submit(input(), requester()).await;

    // Assert
    assert_eq!(result.unwrap().webhook, NotificationOutcome::Sent);
}

#[tokio::test]
async fn discord_message_is_truncated() {
    // Arrange
    let url = "https://discord.com/api/webhooks/1/token"
        .parse::<Url>()
        .unwrap();
    let message = "x".repeat(1500);

    let mut webhook_api = MockWebhookApiService::new();
    webhook_api
        .expect_post()
        .once()
        .withf(|_, payload| match payload {
            WebhookPayload::Discord(DiscordMessage { embeds }) => {
                embeds[0].fields[5].value == format!("{}...", "x".repeat(1000))
            }
            WebhookPayload::Slack(_) => false,
        })
        .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));

    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new(),
        webhook_api,
        email_relay_api: MockEmailRelayApiService::new(),
        config: ContactFeatureConfig {
            webhook_url: Some(url.into()),
            ..config()
        },
    };

    // Act
    let result = sut
        .submit(
            ContactFormInput {
                message: Some(message),
                ..input()
            },
            requester(),
        )
        .await;

    // Assert
    assert_eq!(result.unwrap().webhook, NotificationOutcome::Sent);
}

#[tokio::test]
async fn alt_webhook_url_is_used_as_fallback() {
    // Arrange
    let url = "http://localhost:8001/webhook".parse::<Url>().unwrap();

    let mut webhook_api = MockWebhookApiService::new();
    let expected_url = url.clone();
    webhook_api
        .expect_post()
        .once()
        .withf(move |u, payload| *u == expected_url && payload.kind() == WebhookKind::Slack)
        .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));

    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new(),
        webhook_api,
        email_relay_api: MockEmailRelayApiService::new(),
        config: ContactFeatureConfig {
            alt_webhook_url: Some(url.into()),
            ..config()
        },
    };

    // Act
    let result = sut.submit(input(), requester()).await;

    // Assert
    assert_eq!(result.unwrap().webhook, NotificationOutcome::Sent);
}

#[tokio::test]
async fn webhook_error_status_does_not_fail_submission() {
    // Arrange
    let url = "https://hooks.slack.com/services/T/B/X".parse::<Url>().unwrap();

    let mut webhook_api = MockWebhookApiService::new();
    webhook_api
        .expect_post()
        .once()
        .return_once(|_, _| {
            Box::pin(std::future::ready(Err(ExternApiError::Status {
                status: 500,
                reason: Some("Internal Server Error"),
            })))
        });

    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new(),
        webhook_api,
        email_relay_api: MockEmailRelayApiService::new(),
        config: ContactFeatureConfig {
            webhook_url: Some(url.into()),
            ..config()
        },
    };

    // Act
    let result = sut.submit(input(), requester()).await;

    // Assert
    let receipt = result.unwrap();
    assert_matches!(receipt.webhook, NotificationOutcome::Failed { .. });
    assert!(!receipt.webhook.is_sent());
    assert_eq!(receipt.email, NotificationOutcome::Skipped);
}

#[tokio::test]
async fn webhook_transport_error_does_not_fail_submission() {
    // Arrange
    let url = "https://hooks.slack.com/services/T/B/X".parse::<Url>().unwrap();

    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new(),
        webhook_api: MockWebhookApiService::new().with_post_transport_error(url.clone()),
        email_relay_api: MockEmailRelayApiService::new(),
        config: ContactFeatureConfig {
            webhook_url: Some(url.into()),
            ..config()
        },
    };

    // Act
    let result = sut.submit(input(), requester()).await;

    // Assert
    assert_matches!(
        result.unwrap().webhook,
        NotificationOutcome::Failed { reason } if reason.contains("connection refused")
    );
}

#[tokio::test]
async fn email_relay() {
    // Arrange
    let endpoint = "https://relay.example.com/send".parse::<Url>().unwrap();

    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new().with_render(notification_template(), "<html>".into()),
        webhook_api: MockWebhookApiService::new(),
        email_relay_api: MockEmailRelayApiService::new().with_send(
            endpoint.clone(),
            "relay-key".into(),
            RelayEmail {
                to: "owner@example.com".into(),
                from: "noreply@example.com".into(),
                subject: "🚀 Portfolio Contact: S".into(),
                html: "<html>".into(),
                reply_to: "a@b.com".into(),
            },
            Ok(()),
        ),
        config: ContactFeatureConfig {
            email_relay_url: Some(endpoint.into()),
            email_relay_key: Some("relay-key".into()),
            ..config()
        },
    };

    // Act
    let result = sut.submit(input(), requester()).await;

    // Assert
    let receipt = result.unwrap();
    assert_eq!(receipt.webhook, NotificationOutcome::Skipped);
    assert_eq!(receipt.email, NotificationOutcome::Sent);
}

#[tokio::test]
async fn email_relay_requires_key() {
    // Arrange
    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new(),
        webhook_api: MockWebhookApiService::new(),
        email_relay_api: MockEmailRelayApiService::new(),
        config: ContactFeatureConfig {
            email_relay_url: Some(Arc::new("https://relay.example.com/send".parse().unwrap())),
            ..config()
        },
    };

    // Act
    let result = sut.submit(input(), requester()).await;

    // Assert
    assert_eq!(result.unwrap().email, NotificationOutcome::Skipped);
}

#[tokio::test]
async fn email_relay_failures_are_independent() {
    // Arrange
    let url = "https://hooks.slack.com/services/T/B/X".parse::<Url>().unwrap();
    let endpoint = "https://relay.example.com/send".parse::<Url>().unwrap();

    let mut webhook_api = MockWebhookApiService::new();
    webhook_api
        .expect_post()
        .once()
        .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));

    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new().with_render_error(notification_template()),
        webhook_api,
        email_relay_api: MockEmailRelayApiService::new(),
        config: ContactFeatureConfig {
            webhook_url: Some(url.into()),
            email_relay_url: Some(endpoint.into()),
            email_relay_key: Some("relay-key".into()),
            ..config()
        },
    };

    // Act
    let result = sut.submit(input(), requester()).await;

    // Assert
    let receipt = result.unwrap();
    assert_eq!(receipt.webhook, NotificationOutcome::Sent);
    assert_matches!(receipt.email, NotificationOutcome::Failed { .. });
}

#[tokio::test]
async fn email_relay_error_status() {
    // Arrange
    let endpoint = "https://relay.example.com/send".parse::<Url>().unwrap();

    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new().with_render(notification_template(), "<html>".into()),
        webhook_api: MockWebhookApiService::new(),
        email_relay_api: MockEmailRelayApiService::new().with_send(
            endpoint.clone(),
            "relay-key".into(),
            RelayEmail {
                to: "owner@example.com".into(),
                from: "noreply@example.com".into(),
                subject: "🚀 Portfolio Contact: S".into(),
                html: "<html>".into(),
                reply_to: "a@b.com".into(),
            },
            Err(401),
        ),
        config: ContactFeatureConfig {
            email_relay_url: Some(endpoint.into()),
            email_relay_key: Some("relay-key".into()),
            ..config()
        },
    };

    // Act
    let result = sut.submit(input(), requester()).await;

    // Assert
    assert_matches!(result.unwrap().email, NotificationOutcome::Failed { .. });
}

#[tokio::test]
async fn missing_fields() {
    for input in [
        ContactFormInput {
            name: None,
            ..input()
        },
        ContactFormInput {
            email: None,
            ..input()
        },
        ContactFormInput {
            subject: None,
            ..input()
        },
        ContactFormInput {
            message: None,
            ..input()
        },
        ContactFormInput {
            name: Some("".into()),
            ..input()
        },
        ContactFormInput {
            email: Some("   ".into()),
            ..input()
        },
        ContactFormInput {
            message: Some(" \n\t ".into()),
            ..input()
        },
        ContactFormInput::default(),
    ] {
        // Arrange
        let sut = sut_without_expectations();

        // Act
        let result = sut.submit(input.clone(), requester()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::MissingFields));
    }
}

#[tokio::test]
async fn invalid_email() {
    for email in [
        "jane",
        "jane@x",
        "jane doe@x.com",
        "@x.com",
        "jane@x.",
        "ja\u{a0}ne@x.com",
        "jane@x\u{3000}y.com",
    ] {
        // Arrange
        let sut = sut_without_expectations();
        let input = ContactFormInput {
            email: Some(email.into()),
            ..input()
        };

        // Act
        let result = sut.submit(input, requester()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::InvalidEmail));
    }
}

#[tokio::test]
async fn test_webhook_not_configured() {
    // Arrange
    let sut = sut_without_expectations();

    // Act
    let result = sut.test_webhook().await;

    // Assert
    assert_matches!(result, Err(ContactTestWebhookError::NotConfigured));
}

#[tokio::test]
async fn test_webhook_discord() {
    // Arrange
    let url = "https://discord.com/api/webhooks/1/token"
        .parse::<Url>()
        .unwrap();
    let expected_payload = WebhookPayload::Discord(DiscordMessage {
        embeds: vec![DiscordEmbed {
            title: "🧪 Webhook Test".into(),
            description: Some("This is a test message from your portfolio contact form!".into()),
            color: 0x00ff00,
            fields: vec![
                field("Status", "✅ Working correctly", true),
                field("Time", "2024-06-10 06:13:20 UTC", true),
            ],
            timestamp: None,
            footer: DiscordEmbedFooter {
                text: "Portfolio Contact Form Test".into(),
            },
        }],
    });

    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new(),
        webhook_api: MockWebhookApiService::new().with_post(
            url.clone(),
            expected_payload,
            Ok(()),
        ),
        email_relay_api: MockEmailRelayApiService::new(),
        config: ContactFeatureConfig {
            webhook_url: Some(url.into()),
            ..config()
        },
    };

    // Act
    let result = sut.test_webhook().await;

    // Assert
    assert_eq!(result.unwrap(), WebhookKind::Discord);
}

#[tokio::test]
async fn test_webhook_slack() {
    // Arrange
    let url = "https://hooks.slack.com/services/T/B/X".parse::<Url>().unwrap();
    let expected_payload = WebhookPayload::Slack(SlackMessage {
        text: "🧪 *Webhook Test*\n\n✅ Your webhook is working correctly!\n\n*Time:* 2024-06-10 \
               06:13:20 UTC"
            .into(),
    });

    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new(),
        webhook_api: MockWebhookApiService::new().with_post(
            url.clone(),
            expected_payload,
            Ok(()),
        ),
        email_relay_api: MockEmailRelayApiService::new(),
        config: ContactFeatureConfig {
            webhook_url: Some(url.into()),
            ..config()
        },
    };

    // Act
    let result = sut.test_webhook().await;

    // Assert
    assert_eq!(result.unwrap(), WebhookKind::Slack);
}

#[tokio::test]
async fn test_webhook_rejected() {
    // Arrange
    let url = "https://hooks.slack.com/services/T/B/X".parse::<Url>().unwrap();

    let mut webhook_api = MockWebhookApiService::new();
    webhook_api
        .expect_post()
        .once()
        .return_once(|_, _| {
            Box::pin(std::future::ready(Err(ExternApiError::Status {
                status: 403,
                reason: Some("Forbidden"),
            })))
        });

    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new(),
        webhook_api,
        email_relay_api: MockEmailRelayApiService::new(),
        config: ContactFeatureConfig {
            webhook_url: Some(url.into()),
            ..config()
        },
    };

    // Act
    let result = sut.test_webhook().await;

    // Assert
    assert_matches!(
        result,
        Err(ContactTestWebhookError::Rejected {
            status: 403,
            reason: Some("Forbidden")
        })
    );
}

#[tokio::test]
async fn test_webhook_transport_error() {
    // Arrange
    let url = "https://hooks.slack.com/services/T/B/X".parse::<Url>().unwrap();

    let sut = Sut {
        time: MockTimeService::new().with_now(now()),
        template: MockTemplateService::new(),
        webhook_api: MockWebhookApiService::new().with_post_transport_error(url.clone()),
        email_relay_api: MockEmailRelayApiService::new(),
        config: ContactFeatureConfig {
            webhook_url: Some(url.into()),
            ..config()
        },
    };

    // Act
    let result = sut.test_webhook().await;

    // Assert
    assert_matches!(result, Err(ContactTestWebhookError::Other(_)));
}

fn sut_without_expectations() -> Sut {
    Sut {
        time: MockTimeService::new(),
        template: MockTemplateService::new(),
        webhook_api: MockWebhookApiService::new(),
        email_relay_api: MockEmailRelayApiService::new(),
        config: config(),
    }
}

fn now() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_718_000_000_000).unwrap()
}

fn config() -> ContactFeatureConfig {
    ContactFeatureConfig {
        recipient: Arc::new(EmailAddress::try_new("owner@example.com").unwrap()),
        sender: Arc::new(EmailAddress::try_new("noreply@example.com").unwrap()),
        webhook_url: None,
        alt_webhook_url: None,
        email_relay_url: None,
        email_relay_key: None,
    }
}

fn input() -> ContactFormInput {
    ContactFormInput {
        name: Some("A".into()),
        email: Some("a@b.com".into()),
        phone: None,
        company: None,
        subject: Some("S".into()),
        message: Some("M".into()),
    }
}

fn requester() -> ContactRequester {
    ContactRequester {
        user_agent: Some("Mozilla/5.0".into()),
        ip: Some("203.0.113.7".into()),
    }
}

fn notification_template() -> ContactNotificationTemplate {
    ContactNotificationTemplate {
        name: "A".into(),
        email: "a@b.com".into(),
        phone: "Not provided".into(),
        company: "Not provided".into(),
        subject: "S".into(),
        message: "M".into(),
        received: "2024-06-10 06:13:20 UTC".into(),
    }
}

fn field(name: &str, value: &str, inline: bool) -> DiscordEmbedField {
    DiscordEmbedField {
        name: name.into(),
        value: value.into(),
        inline,
    }
}
