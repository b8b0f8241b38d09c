use anyhow::bail;
use clap::Subcommand;
use folio_config::Config;
use folio_core_contact_contracts::{ContactFeatureService, ContactTestWebhookError};
use folio_di::Provide;

use crate::environment::{types::ContactFeature, Provider};

#[derive(Debug, Subcommand)]
pub enum WebhookCommand {
    /// Send a test message to the configured webhook
    Test,
}

impl WebhookCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            WebhookCommand::Test => test(config).await,
        }
    }
}

async fn test(config: Config) -> anyhow::Result<()> {
    let mut provider = Provider::new(&config);
    let contact: ContactFeature = provider.provide();

    match contact.test_webhook().await {
        Ok(kind) => {
            println!("Test webhook sent successfully! ({kind})");
            Ok(())
        }
        Err(ContactTestWebhookError::NotConfigured) => bail!(
            "No webhook URL configured. Set webhook.url in the config file or \
             DISCORD_WEBHOOK_URL / WEBHOOK_URL in the environment."
        ),
        Err(ContactTestWebhookError::Rejected { status, reason }) => bail!(
            "Webhook failed with status {status} {}",
            reason.unwrap_or_default()
        ),
        Err(ContactTestWebhookError::Other(err)) => {
            Err(err.context("Failed to send test webhook"))
        }
    }
}
